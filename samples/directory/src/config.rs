//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables, after
//! loading a `.env` file if one exists.
//!
//! # Example
//!
//! ```rust,ignore
//! use directory_pipeline::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("User: {}", config.user);
//! ```

use std::env::{self, VarError};
use std::path::PathBuf;

use thiserror::Error;

/// Glid used when `DIRECTORY_USER` is not set.
pub const DEFAULT_USER: &str = "ALBERT";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
///
/// - `directory_path`: JSON file holding the directory records
/// - `user`: glid of the signed-in user, as the identity provider reports it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory file; the built-in directory is used when `None`.
    pub directory_path: Option<PathBuf>,
    /// Raw glid of the current user. Empty means nobody is signed in.
    pub user: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DIRECTORY_PATH`: JSON directory file (optional)
    /// - `DIRECTORY_USER`: current user's glid (optional, default: `ALBERT`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is not valid Unicode
    /// or `DIRECTORY_PATH` is set to an empty string.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key))
    }

    /// Loads configuration through `read`, which behaves like [`env::var`].
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_source<F>(read: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let directory_path = get_optional_env(&read, "DIRECTORY_PATH")?
            .map(|path| {
                if path.trim().is_empty() {
                    Err(ConfigError::InvalidValue {
                        key: "DIRECTORY_PATH".to_string(),
                        message: "must not be empty when set".to_string(),
                    })
                } else {
                    Ok(PathBuf::from(path))
                }
            })
            .transpose()?;
        let user = get_optional_env(&read, "DIRECTORY_USER")?.unwrap_or_else(|| DEFAULT_USER.to_string());

        Ok(Self {
            directory_path,
            user,
        })
    }

    /// Creates a new `AppConfig` with the given values.
    #[must_use]
    pub const fn new(directory_path: Option<PathBuf>, user: String) -> Self {
        Self {
            directory_path,
            user,
        }
    }
}

/// Gets an optional environment variable.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is not valid Unicode.
fn get_optional_env<F>(read: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match read(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}
