use std::fs;
use tempfile::tempdir;

use integrity_check::{
    digests_match, verify_integrity, verify_integrity_with, Algorithm, IntegrityError,
    VerifyOptions,
};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[test]
fn matching_digest_passes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello").unwrap();

    let v = verify_integrity(&path, HELLO_SHA256).unwrap();
    assert!(v.passed);
    assert_eq!(v.calculated, HELLO_SHA256);
    assert_eq!(v.expected, HELLO_SHA256);
    assert_eq!(v.algorithm, Algorithm::Sha256);
    assert_eq!(v.path, path);
}

#[test]
fn modified_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello!").unwrap();

    let v = verify_integrity(&path, HELLO_SHA256).unwrap();
    assert!(!v.passed);
    assert_ne!(v.calculated, HELLO_SHA256);
}

#[test]
fn comparison_is_case_sensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello").unwrap();

    let upper = HELLO_SHA256.to_ascii_uppercase();
    let v = verify_integrity(&path, &upper).unwrap();
    assert!(!v.passed);

    assert!(!digests_match(HELLO_SHA256, &upper));
    assert!(!digests_match(HELLO_SHA256, &format!("{HELLO_SHA256}\n")));
    assert!(digests_match(HELLO_SHA256, HELLO_SHA256));
}

#[test]
fn empty_expected_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello").unwrap();

    let err = verify_integrity(&path, "").unwrap_err();
    assert!(matches!(err, IntegrityError::EmptyExpected));
}

#[test]
fn unreadable_file_is_an_error_not_a_failure() {
    let dir = tempdir().unwrap();
    let err = verify_integrity(dir.path().join("missing"), HELLO_SHA256).unwrap_err();
    assert!(matches!(err, IntegrityError::Open { .. }));
}

#[test]
fn sha256_digest_never_matches_under_sha512() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello").unwrap();

    let opts = VerifyOptions {
        algorithm: Algorithm::Sha512,
        ..VerifyOptions::default()
    };
    let v = verify_integrity_with(&path, HELLO_SHA256, &opts).unwrap();
    assert!(!v.passed);
    assert_eq!(v.calculated.len(), 128);
}
