//! crates/kprof_app/src/adapters/history.rs
//!
//! File-backed implementation of the `HistoryRepository` port: one JSON file
//! holding the serialized history array as its entire value. Read once at
//! startup, rewritten whole on every history mutation.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use kprof_core::{
    domain::LessonPlan,
    ports::{HistoryRepository, PersistenceError},
};

/// The single persisted slot, addressed by file path.
#[derive(Clone)]
pub struct JsonFileHistoryAdapter {
    path: PathBuf,
}

impl JsonFileHistoryAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryAdapter {
    /// Reads the stored history. A missing file means no history yet; any
    /// unreadable or malformed content is a `Read` error for the caller to
    /// recover from.
    async fn load(&self) -> Result<Vec<LessonPlan>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::Read(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| PersistenceError::Read(e.to_string()))
    }

    /// Overwrites the slot with the serialized history, creating the parent
    /// directory on first use.
    async fn save(&self, history: &[LessonPlan]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PersistenceError::Write(e.to_string()))?;
            }
        }

        let serialized = serde_json::to_string_pretty(history)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        fs::write(&self.path, serialized)
            .await
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }
}
