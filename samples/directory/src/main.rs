//! directory-pipeline
//!
//! Runs the directory lookup pipeline once and logs every intermediate
//! result.
//!
//! # Usage
//!
//! ```bash
//! # Built-in directory, default user
//! cargo run --bin directory-pipeline
//!
//! # Directory file and another user
//! DIRECTORY_PATH=samples/directory/data/directory.json DIRECTORY_USER=bob \
//!   cargo run --bin directory-pipeline
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_pipeline::pipeline::{check_laws, demonstrate, load_directory, resolve_user_name};
use directory_pipeline::{AppConfig, AppError};

fn main() -> Result<(), AppError> {
    // Load configuration first so RUST_LOG from .env is visible to the filter
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(user = %config.user, directory_path = ?config.directory_path, "configuration loaded");

    let directory = load_directory(&config)?;
    tracing::info!(records = directory.len(), "directory ready");

    for step in demonstrate(&config, &directory) {
        tracing::info!(step = step.label, result = %step.rendered);
    }

    for check in check_laws(&config, &directory) {
        if check.holds {
            tracing::info!(law = check.law, left = %check.left, right = %check.right, "law holds");
        } else {
            tracing::warn!(law = check.law, left = %check.left, right = %check.right, "law violated");
        }
    }

    let name = resolve_user_name(&config, &directory);
    tracing::info!(name = %name, "resolved current user");

    Ok(())
}
