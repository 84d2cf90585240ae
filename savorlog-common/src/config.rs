//! Configuration loading and resolution
//!
//! The server needs two externally supplied values: the listening port and
//! the SQLite database path. Each resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`SAVORLOG_PORT` / `SAVORLOG_DB`)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default listening port when no tier supplies one
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable naming the listening port
pub const PORT_ENV_VAR: &str = "SAVORLOG_PORT";

/// Environment variable naming the database path
pub const DB_ENV_VAR: &str = "SAVORLOG_DB";

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_path: PathBuf,
}

/// On-disk config file shape (`~/.config/savorlog/config.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
}

impl ServerConfig {
    /// Resolve configuration from all tiers.
    ///
    /// `cli_port` / `cli_database` come from command-line parsing and win
    /// over every other tier.
    pub fn resolve(cli_port: Option<u16>, cli_database: Option<PathBuf>) -> Self {
        let file = load_config_file().unwrap_or_default();

        let port = cli_port
            .or_else(port_from_env)
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        let database_path = cli_database
            .or_else(|| std::env::var(DB_ENV_VAR).ok().map(PathBuf::from))
            .or(file.database)
            .unwrap_or_else(default_database_path);

        Self {
            port,
            database_path,
        }
    }

    /// Create the database file's parent directory if it does not exist
    pub fn ensure_database_dir(&self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn port_from_env() -> Option<u16> {
    let raw = std::env::var(PORT_ENV_VAR).ok()?;
    match raw.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a valid port", PORT_ENV_VAR, raw);
            None
        }
    }
}

/// Load the TOML config file from the platform config directory.
///
/// Missing or unparsable files are not fatal; resolution falls through to
/// the compiled defaults.
fn load_config_file() -> Option<TomlConfig> {
    for path in candidate_config_paths() {
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<TomlConfig>(&contents) {
                Ok(config) => return Some(config),
                Err(e) => {
                    warn!("Ignoring malformed config file {}: {}", path.display(), e);
                    return None;
                }
            },
            Err(e) => {
                warn!("Could not read config file {}: {}", path.display(), e);
                return None;
            }
        }
    }
    None
}

fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("savorlog").join("config.toml"));
    }
    if cfg!(target_os = "linux") {
        paths.push(PathBuf::from("/etc/savorlog/config.toml"));
    }
    paths
}

/// Platform default database location: `<data dir>/savorlog/savorlog.db`
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("savorlog").join("savorlog.db"))
        .unwrap_or_else(|| PathBuf::from("savorlog.db"))
}

/// True when `path` looks like an already-resolved SQLite location the
/// server can open (used by startup diagnostics)
pub fn describe_database(path: &Path) -> String {
    if path.exists() {
        format!("{} (existing)", path.display())
    } else {
        format!("{} (will be created)", path.display())
    }
}
