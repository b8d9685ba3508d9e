//! Runtime configuration assembled from CLI flags and the environment.

use std::path::PathBuf;

/// Default location of the log file when `LOG_FILE_PATH` is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Log file path from `LOG_FILE_PATH`, falling back to [`DEFAULT_LOG_FILE`].
    pub fn log_file_path() -> PathBuf {
        std::env::var("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
