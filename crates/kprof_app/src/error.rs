//! crates/kprof_app/src/error.rs
//!
//! Defines the primary error type for the application layer.

use crate::config::ConfigError;

/// The primary error type for the `kprof_app` crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A catch-all for any other unexpected errors during bootstrap.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
