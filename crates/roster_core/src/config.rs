//! Runtime configuration for a roster session.
//!
//! # Invariants
//! - All durable files live under `data_dir`.
//! - No environment variables are consulted.

use crate::logging::{default_log_level, init_logging};
use crate::persist::PersistConfig;
use std::path::PathBuf;

/// SQLite file name used for durable storage.
pub const DB_FILE_NAME: &str = "roster.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Paths and policies for one roster instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Directory holding the database and logs.
    pub data_dir: PathBuf,
    pub persist: PersistConfig,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl RosterConfig {
    /// Configuration with default key, version and build-mode log level.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            persist: PersistConfig::default(),
            log_level: default_log_level().to_string(),
        }
    }

    pub fn with_persist_key(mut self, key: impl Into<String>) -> Self {
        self.persist.key = key.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// Starts file logging under `log_dir()`.
    ///
    /// # Errors
    /// - Same as [`init_logging`]; `data_dir` must be absolute.
    pub fn init_logging(&self) -> Result<(), String> {
        let log_dir = self.log_dir();
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", log_dir.display()))?;
        init_logging(&self.log_level, log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{RosterConfig, DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn paths_are_resolved_under_data_dir() {
        let config = RosterConfig::new("/var/roster").with_persist_key("school");

        assert_eq!(config.db_path(), Path::new("/var/roster").join(DB_FILE_NAME));
        assert_eq!(config.log_dir(), Path::new("/var/roster/logs"));
        assert_eq!(config.persist.storage_key(), "persist:school");
    }

    #[test]
    fn relative_data_dir_is_rejected_by_logging() {
        let error = RosterConfig::new("relative/dir")
            .init_logging()
            .expect_err("relative log dir must be rejected");
        assert!(error.contains("absolute"));
    }
}
