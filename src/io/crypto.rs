use crate::{
    error::{IntegrityError, Result},
    io::progress::emit_hash_progress,
    types::{Algorithm, VerifyOptions},
};
use sha2::{Digest, Sha256, Sha512};
use std::{
    fs::File,
    io::{self, ErrorKind, Read},
    path::Path,
};

pub const DEFAULT_CHUNK_SIZE: usize = 4096;
/// Upper bound on the read buffer; larger values are rejected before allocating.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Streams `reader` through `algorithm` in `chunk_size`-byte reads and returns the
/// lowercase hex digest.
pub fn hash_reader<R: Read>(reader: R, algorithm: Algorithm, chunk_size: usize) -> Result<String> {
    check_chunk_size(chunk_size)?;
    Ok(digest_stream(reader, algorithm, chunk_size, |_| {})?)
}

pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<String> {
    hash_file_with(
        path,
        &VerifyOptions {
            algorithm,
            ..VerifyOptions::default()
        },
    )
}

pub fn hash_file_with(path: &Path, opts: &VerifyOptions) -> Result<String> {
    check_chunk_size(opts.chunk_size)?;

    let f = File::open(path).map_err(|source| IntegrityError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let total = f.metadata().map(|m| m.len()).unwrap_or(0);

    emit_hash_progress(0, total);
    let hex = digest_stream(f, opts.algorithm, opts.chunk_size, |done| {
        emit_hash_progress(done, total)
    })
    .map_err(|source| IntegrityError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), algorithm = %opts.algorithm, digest = %hex, "hashed file");
    Ok(hex)
}

fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(IntegrityError::InvalidChunkSize {
            size: chunk_size,
            max: MAX_CHUNK_SIZE,
        });
    }
    Ok(())
}

fn digest_stream<R: Read>(
    reader: R,
    algorithm: Algorithm,
    chunk_size: usize,
    on_progress: impl FnMut(u64),
) -> io::Result<String> {
    match algorithm {
        Algorithm::Sha256 => accumulate::<Sha256, _>(reader, chunk_size, on_progress),
        Algorithm::Sha512 => accumulate::<Sha512, _>(reader, chunk_size, on_progress),
    }
}

fn accumulate<D: Digest, R: Read>(
    mut reader: R,
    chunk_size: usize,
    mut on_progress: impl FnMut(u64),
) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; chunk_size];
    let mut done: u64 = 0;
    let mut chunks: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        done += n as u64;
        chunks += 1;
        on_progress(done);
    }
    tracing::debug!(bytes = done, chunks, "digest finalized");
    Ok(hex::encode(hasher.finalize()))
}
