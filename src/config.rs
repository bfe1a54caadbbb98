use std::{env, path::PathBuf};

use crate::io::crypto::DEFAULT_CHUNK_SIZE;

pub const DEFAULT_FILE: &str = "example.txt";
pub const DEFAULT_EXPECTED: &str =
    "e3ecbe786207d09675637ec85a9a0a21d4f19a2d74ea0717f7d0766d9fd86264";

pub const FILE_ENV: &str = "INTEGRITY_CHECK_FILE";
pub const EXPECTED_ENV: &str = "INTEGRITY_CHECK_EXPECTED";
pub const CHUNK_SIZE_ENV: &str = "INTEGRITY_CHECK_CHUNK_SIZE";

pub fn target_file() -> PathBuf {
    env::var(FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_FILE))
}

pub fn expected_digest() -> String {
    env::var(EXPECTED_ENV).unwrap_or_else(|_| DEFAULT_EXPECTED.to_string())
}

/// Chunk size from the environment; unparsable or zero values fall back to the default.
pub fn chunk_size() -> usize {
    env::var(CHUNK_SIZE_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_CHUNK_SIZE)
}
