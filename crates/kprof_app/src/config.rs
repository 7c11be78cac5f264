//! crates/kprof_app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub api_base: Option<String>,
    pub lesson_model: String,
    pub history_path: PathBuf,
    pub default_username: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure tests
    /// are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load API credentials (key is checked at bootstrap time) ---
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let api_base = std::env::var("OPENAI_API_BASE").ok();

        // --- Load Adapter-specific Settings ---
        let lesson_model =
            std::env::var("LESSON_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let history_path = std::env::var("KPROF_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./kprof_history.json"));
        let default_username =
            std::env::var("KPROF_USERNAME").unwrap_or_else(|_| "enseignant".to_string());

        Ok(Self {
            openai_api_key,
            api_base,
            lesson_model,
            history_path,
            default_username,
            log_level,
        })
    }
}
