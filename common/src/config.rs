//! Runtime configuration.
//!
//! All environment access goes through this module, so the waiting logic
//! itself never reads process environment and can be tested against plain
//! maps.

use std::collections::HashMap;
use std::time::Duration;

use crate::models::ConnectionConfig;

/// Default overall deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Default polling interval in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 1;

/// Full runtime configuration for the readiness gate.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Connection parameters for the probe.
    pub connection: ConnectionConfig,
    /// Overall deadline in seconds.
    pub timeout_secs: u64,
    /// Fixed polling interval in seconds.
    pub interval_secs: u64,
    /// Map timeout/abort to non-zero exit codes instead of the historical 0.
    pub strict_exit: bool,
    /// Abort on non-transient probe errors instead of retrying them.
    pub fail_fast: bool,
}

impl WaitConfig {
    /// Loads the configuration from the process environment.
    pub fn load() -> Self {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Builds a configuration from an environment snapshot.
    ///
    /// Missing connection values default to the empty string, and the port
    /// is kept unparsed: a malformed value must surface as a connect-time
    /// failure, not a startup failure. Unparsable tuning values fall back
    /// to their defaults.
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        let get = |key: &str| env.get(key).cloned().unwrap_or_default();

        Self {
            connection: ConnectionConfig {
                host: get("WORDPRESS_DB_HOSTNAME"),
                port: get("WORDPRESS_DB_PORT"),
                user: get("WORDPRESS_DB_USER"),
                password: get("WORDPRESS_DB_PASSWORD"),
                database: get("WORDPRESS_DB_NAME"),
            },
            timeout_secs: parse_or(env, "DB_WAIT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            interval_secs: parse_or(env, "DB_WAIT_INTERVAL_SECS", DEFAULT_INTERVAL_SECS),
            strict_exit: flag(env, "DB_WAIT_STRICT_EXIT"),
            fail_fast: flag(env, "DB_WAIT_FAIL_FAST"),
        }
    }

    /// Overall deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Polling interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

fn parse_or(env: &HashMap<String, String>, key: &str, default: u64) -> u64 {
    match env.get(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default, "unparsable value, using default");
            default
        }),
    }
}

fn flag(env: &HashMap<String, String>, key: &str) -> bool {
    env.get(key)
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Loads a `.env` file from the working directory (best-effort, no error if
/// missing). Values already present in the environment win.
pub fn load_dotenv() {
    let env_path = std::path::Path::new(".env");
    if !env_path.exists() {
        return;
    }
    let Ok(content) = std::fs::read_to_string(env_path) else {
        return;
    };
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if std::env::var(key).is_err() {
                std::env::set_var(key, value.trim());
            }
        }
    }
}
