use std::{env, path::PathBuf};

use integrity_check::{config, DEFAULT_CHUNK_SIZE};

// Single test: the environment is process-global.
#[test]
fn env_overrides_and_fallbacks() {
    env::remove_var(config::FILE_ENV);
    env::remove_var(config::EXPECTED_ENV);
    env::remove_var(config::CHUNK_SIZE_ENV);

    assert_eq!(config::target_file(), PathBuf::from("example.txt"));
    assert_eq!(config::expected_digest(), config::DEFAULT_EXPECTED);
    assert_eq!(config::chunk_size(), DEFAULT_CHUNK_SIZE);

    env::set_var(config::FILE_ENV, "other.bin");
    env::set_var(config::EXPECTED_ENV, "abc123");
    env::set_var(config::CHUNK_SIZE_ENV, "65536");
    assert_eq!(config::target_file(), PathBuf::from("other.bin"));
    assert_eq!(config::expected_digest(), "abc123");
    assert_eq!(config::chunk_size(), 65536);

    for bad in ["0", "-4", "lots"] {
        env::set_var(config::CHUNK_SIZE_ENV, bad);
        assert_eq!(config::chunk_size(), DEFAULT_CHUNK_SIZE, "value {bad}");
    }

    env::remove_var(config::FILE_ENV);
    env::remove_var(config::EXPECTED_ENV);
    env::remove_var(config::CHUNK_SIZE_ENV);
}
