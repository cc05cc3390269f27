//! Frontend configuration from the environment

use std::env;
use std::path::PathBuf;

/// Environment variable naming the log directory
pub const LOG_DIR_VAR: &str = "MB_LOG_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory receiving `mbbirth.log`
    pub log_dir: PathBuf,
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MB_LOG_DIR` - log directory (default: platform data dir + `mbbirth`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>(LOG_DIR_VAR) {
            config.log_dir = dir;
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

/// Platform data directory for logs, falling back to the temp dir
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("mbbirth")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
