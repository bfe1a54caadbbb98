use std::path::PathBuf;

use thiserror::Error;

/// Central error type for the integrity-check crate.
#[derive(Debug, Error)]
pub enum IntegrityError {
    // Generic fallback (wraps anyhow)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    // Domain-specific variants
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Chunk size {size} out of range (1..={max})")]
    InvalidChunkSize { size: usize, max: usize },

    #[error("Expected digest is empty")]
    EmptyExpected,
}

// --- Implement From conversions for common errors ---
impl From<std::io::Error> for IntegrityError {
    fn from(e: std::io::Error) -> Self {
        IntegrityError::Anyhow(e.into())
    }
}

impl From<serde_json::Error> for IntegrityError {
    fn from(e: serde_json::Error) -> Self {
        IntegrityError::Anyhow(e.into())
    }
}

pub type Result<T> = std::result::Result<T, IntegrityError>;
