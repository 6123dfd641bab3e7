use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the penguin dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at data row {row}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("dataset contains no records")]
    Empty,
}

/// Failures while resolving the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid sidebar color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("{name} must be between {min} and {max}, got {value}")]
    BinCountOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Why a view could not produce its artifact. Shown in place of that view only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A required selection has not been reported by the UI yet.
    #[error("waiting for selections")]
    NotReady,

    #[error("bin count must be between 1 and {max}, got {value}")]
    InvalidBinCount { value: i64, max: i64 },

    #[error("no {column} values match the current selection")]
    Empty { column: &'static str },
}
