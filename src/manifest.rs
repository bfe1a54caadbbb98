//! JSON checksum manifests: several files verified in one pass.
//!
//! ```json
//! {
//!   "algorithm": "sha256",
//!   "artifacts": [
//!     { "file": "data/a.bin", "sha256": "<hex>", "size_bytes": 12 }
//!   ]
//! }
//! ```
//!
//! Relative `file` entries resolve against the manifest's own directory.

use crate::{
    error::{IntegrityError, Result},
    io::crypto::DEFAULT_CHUNK_SIZE,
    types::{Algorithm, Verification, VerifyOptions},
    verify::verify_integrity_with,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub algorithm: Algorithm,
    pub artifacts: Vec<Artifact>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artifact {
    pub file: String,
    #[serde(alias = "digest")]
    pub sha256: String,
    /// 0 means unchecked.
    #[serde(default)]
    pub size_bytes: u64,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| IntegrityError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(raw).map_err(|e| IntegrityError::Manifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.artifacts.is_empty() {
            return Err(IntegrityError::Manifest("no artifacts listed".into()));
        }
        for (i, a) in self.artifacts.iter().enumerate() {
            if a.file.trim().is_empty() {
                return Err(IntegrityError::Manifest(format!("artifact {i} has an empty file")));
            }
            if a.sha256.is_empty() {
                return Err(IntegrityError::Manifest(format!(
                    "artifact '{}' has an empty digest",
                    a.file
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ManifestEntry {
    pub verification: Verification,
    /// Actual size when it differed from `size_bytes`.
    pub size_mismatch: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct ManifestReport {
    pub manifest_path: PathBuf,
    pub entries: Vec<ManifestEntry>,
}

impl ManifestReport {
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.verification.passed)
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| !e.verification.passed).count()
    }
}

pub fn verify_manifest(path: &Path) -> Result<ManifestReport> {
    verify_manifest_with(path, DEFAULT_CHUNK_SIZE)
}

pub fn verify_manifest_with(path: &Path, chunk_size: usize) -> Result<ManifestReport> {
    let manifest = Manifest::load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let opts = VerifyOptions {
        algorithm: manifest.algorithm,
        chunk_size,
    };

    let mut entries = Vec::with_capacity(manifest.artifacts.len());
    for a in &manifest.artifacts {
        let local_path = base.join(&a.file);
        let verification = verify_integrity_with(&local_path, &a.sha256, &opts)?;

        let mut size_mismatch = None;
        if a.size_bytes > 0 {
            let size = fs::metadata(&local_path).map(|m| m.len()).unwrap_or(0);
            if size != a.size_bytes {
                tracing::warn!(
                    path = %local_path.display(),
                    expected = a.size_bytes,
                    got = size,
                    "size mismatch"
                );
                size_mismatch = Some(size);
            }
        }

        entries.push(ManifestEntry {
            verification,
            size_mismatch,
        });
    }

    Ok(ManifestReport {
        manifest_path: path.to_path_buf(),
        entries,
    })
}
