use crate::{
    error::{IntegrityError, Result},
    io::crypto::hash_file_with,
    types::{Verification, VerifyOptions},
};
use std::path::Path;

/// Exact comparison: case-sensitive, no trimming.
pub fn digests_match(calculated: &str, expected: &str) -> bool {
    calculated == expected
}

pub fn verify_integrity(path: impl AsRef<Path>, expected: &str) -> Result<Verification> {
    verify_integrity_with(path, expected, &VerifyOptions::default())
}

pub fn verify_integrity_with(
    path: impl AsRef<Path>,
    expected: &str,
    opts: &VerifyOptions,
) -> Result<Verification> {
    let path = path.as_ref();
    if expected.is_empty() {
        return Err(IntegrityError::EmptyExpected);
    }
    if !opts.algorithm.is_well_formed(expected) {
        tracing::warn!(
            expected,
            algorithm = %opts.algorithm,
            "expected value is not a lowercase {} hex digest",
            opts.algorithm
        );
    }

    let calculated = hash_file_with(path, opts)?;
    let passed = digests_match(&calculated, expected);

    tracing::info!(path = %path.display(), passed, "integrity check");

    Ok(Verification {
        path: path.to_path_buf(),
        algorithm: opts.algorithm,
        expected: expected.to_string(),
        calculated,
        passed,
    })
}
