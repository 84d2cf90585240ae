//! Unit tests for configuration resolution
//!
//! Port and database path resolve CLI > environment > config file >
//! compiled default.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate SAVORLOG_PORT or SAVORLOG_DB are marked with #[serial]
//! to ensure they run sequentially, not in parallel.

use savorlog_common::config::{
    default_database_path, ServerConfig, DB_ENV_VAR, DEFAULT_PORT, PORT_ENV_VAR,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(PORT_ENV_VAR);
    env::remove_var(DB_ENV_VAR);
}

#[test]
#[serial]
fn test_defaults_when_nothing_supplied() {
    clear_env();

    let config = ServerConfig::resolve(None, None);
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(!config.database_path.as_os_str().is_empty());
}

#[test]
#[serial]
fn test_env_overrides_default() {
    clear_env();
    env::set_var(PORT_ENV_VAR, "8123");
    env::set_var(DB_ENV_VAR, "/tmp/savorlog-test.db");

    let config = ServerConfig::resolve(None, None);
    assert_eq!(config.port, 8123);
    assert_eq!(config.database_path, PathBuf::from("/tmp/savorlog-test.db"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(PORT_ENV_VAR, "8123");
    env::set_var(DB_ENV_VAR, "/tmp/savorlog-env.db");

    let config = ServerConfig::resolve(Some(9000), Some(PathBuf::from("/tmp/savorlog-cli.db")));
    assert_eq!(config.port, 9000);
    assert_eq!(config.database_path, PathBuf::from("/tmp/savorlog-cli.db"));

    clear_env();
}

#[test]
#[serial]
fn test_malformed_port_env_falls_through() {
    clear_env();
    env::set_var(PORT_ENV_VAR, "not-a-port");

    let config = ServerConfig::resolve(None, None);
    assert_eq!(config.port, DEFAULT_PORT);

    clear_env();
}

#[test]
fn test_default_database_path_is_nonempty() {
    let path = default_database_path();
    assert!(path.to_string_lossy().contains("savorlog"));
}

#[test]
#[serial]
fn test_ensure_database_dir_creates_parent() {
    clear_env();
    let dir = tempfile::TempDir::new().expect("tempdir");
    let db_path = dir.path().join("sub").join("savorlog.db");

    let config = ServerConfig::resolve(None, Some(db_path.clone()));
    config.ensure_database_dir().expect("create parent");
    assert!(db_path.parent().unwrap().exists());
}
