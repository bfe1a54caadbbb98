//! # integrity-check
//!
//! Streams a file through a cryptographic hash, renders the digest as hex and
//! compares it against an expected value.

pub mod config;
pub mod error;
pub mod io;
pub mod manifest;
pub mod types;
pub mod verify;

pub use crate::{
    error::{IntegrityError, Result},
    io::{
        crypto::{hash_file, hash_file_with, hash_reader, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE},
        progress::{clear_hash_progress_callback, set_hash_progress_callback},
    },
    manifest::{verify_manifest, verify_manifest_with, Artifact, Manifest, ManifestEntry, ManifestReport},
    types::{Algorithm, Verification, VerifyOptions},
    verify::{digests_match, verify_integrity, verify_integrity_with},
};
