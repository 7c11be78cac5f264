//! crates/kprof_app/src/lib.rs
//!
//! Application layer: adapters for the core ports, configuration, and the
//! bootstrap wiring that assembles a ready-to-use `PlanStore`. The view layer
//! (whatever renders the form and the tabbed plan display) talks only to the
//! store this crate hands back.

pub mod adapters;
pub mod config;
pub mod error;

use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{JsonFileHistoryAdapter, OpenAiLessonAdapter};
use config::Config;
use error::AppError;
use kprof_core::store::PlanStore;

/// Sets up logging from the configured level. Call once, before anything
/// else, from the embedding process.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            config.log_level.to_string(),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wires the generation client and the history slot into a `PlanStore`,
/// loading any persisted history in the process.
pub async fn build_store(config: &Config) -> Result<PlanStore, AppError> {
    let api_key = config
        .openai_api_key
        .as_ref()
        .ok_or_else(|| AppError::Internal("OPENAI_API_KEY is required".to_string()))?;

    let mut openai_config = OpenAIConfig::new().with_api_key(api_key.clone());
    if let Some(api_base) = &config.api_base {
        openai_config = openai_config.with_api_base(api_base.clone());
    }
    let client = Client::with_config(openai_config);

    let generator = Arc::new(OpenAiLessonAdapter::new(
        client,
        config.lesson_model.clone(),
        config.default_username.clone(),
    ));
    let repository = Arc::new(JsonFileHistoryAdapter::new(config.history_path.clone()));

    Ok(PlanStore::open(generator, repository).await)
}
