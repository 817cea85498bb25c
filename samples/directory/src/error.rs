//! Application error types.
//!
//! A missing user or an unknown key is not an error here: the pipeline
//! reports it as `Absent`. These errors cover what stops the application
//! from running at all.

use std::path::PathBuf;

use monadic::lookup::LookupError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The directory file could not be read.
    #[error("failed to read directory file {}: {source}", path.display())]
    ReadDirectory {
        /// Path of the directory file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The directory file is not a JSON array of string records.
    #[error("failed to parse directory file {}: {source}", path.display())]
    ParseDirectory {
        /// Path of the directory file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The built-in directory has a malformed record.
    #[error("invalid directory record: {0}")]
    Record(#[from] LookupError),
}
