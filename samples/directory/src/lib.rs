//! Directory pipeline sample application.
//!
//! Resolves the signed-in user's glid to a ufid and a display name through a
//! chain of `Maybe`-returning lookups, and checks the monad laws on the way.
//!
//! # Modules
//!
//! - [`config`]: environment-driven configuration
//! - [`error`]: application errors
//! - [`pipeline`]: the producer, the lookups and the demonstrations

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
