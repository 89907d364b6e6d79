//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Read listen address, database path and logging settings from the
//!   process environment.
//! - Provide development-friendly defaults for every setting.
//!
//! # Invariants
//! - Empty or whitespace-only variables fall back to defaults.
//! - Reading configuration never fails; invalid values surface later at
//!   the component that consumes them.

use std::env;
use todolog_core::default_log_level;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DB_PATH: &str = "todolog.sqlite3";

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address, `host:port`.
    pub addr: String,
    /// SQLite database file path.
    pub db_path: String,
    /// Log directory; `None` keeps logging on stderr only.
    pub log_dir: Option<String>,
    /// Log level passed to the logging bootstrap.
    pub log_level: String,
}

impl ServerConfig {
    /// Reads configuration from `TODOLOG_*` environment variables.
    ///
    /// - `TODOLOG_ADDR` (default `127.0.0.1:3000`)
    /// - `TODOLOG_DB` (default `todolog.sqlite3`)
    /// - `TODOLOG_LOG_DIR` (default unset, stderr-only logging)
    /// - `TODOLOG_LOG_LEVEL` (default per build mode)
    pub fn from_env() -> Self {
        Self {
            addr: env_or("TODOLOG_ADDR", DEFAULT_ADDR),
            db_path: env_or("TODOLOG_DB", DEFAULT_DB_PATH),
            log_dir: env::var("TODOLOG_LOG_DIR")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            log_level: env_or("TODOLOG_LOG_LEVEL", default_log_level()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, DEFAULT_ADDR, DEFAULT_DB_PATH};
    use std::env;

    // Environment variables are process-global, so defaults and overrides
    // are exercised in one test to avoid races between parallel tests.
    #[test]
    fn from_env_uses_defaults_and_honors_overrides() {
        for key in [
            "TODOLOG_ADDR",
            "TODOLOG_DB",
            "TODOLOG_LOG_DIR",
            "TODOLOG_LOG_LEVEL",
        ] {
            env::remove_var(key);
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.log_dir, None);
        assert!(!config.log_level.is_empty());

        env::set_var("TODOLOG_ADDR", "0.0.0.0:8080");
        env::set_var("TODOLOG_DB", "/tmp/todolog-test.sqlite3");
        env::set_var("TODOLOG_LOG_DIR", "/var/log/todolog");
        env::set_var("TODOLOG_LOG_LEVEL", "warn");

        let config = ServerConfig::from_env();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.db_path, "/tmp/todolog-test.sqlite3");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/todolog"));
        assert_eq!(config.log_level, "warn");

        env::set_var("TODOLOG_ADDR", "   ");
        let config = ServerConfig::from_env();
        assert_eq!(config.addr, DEFAULT_ADDR);

        for key in [
            "TODOLOG_ADDR",
            "TODOLOG_DB",
            "TODOLOG_LOG_DIR",
            "TODOLOG_LOG_LEVEL",
        ] {
            env::remove_var(key);
        }
    }
}
