//! crates/kprof_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete generation service and storage slot.

use async_trait::async_trait;

use crate::domain::{LessonPlan, LessonPlanRequest};

//=========================================================================================
// Error Types
//=========================================================================================

/// The generic, localized message shown to the user when generation fails.
/// The underlying cause is logged by the adapter, never surfaced.
pub const GENERIC_GENERATION_MESSAGE: &str =
    "Désolé, une erreur est survenue lors de la génération de la réponse.";

/// The single user-facing failure category for lesson generation.
///
/// Network failures, malformed or incomplete responses and service-side
/// rejections all collapse into this one error. It carries only a message fit
/// for display; diagnostics stay in the logs.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The standard error with the generic localized message.
    pub fn generic() -> Self {
        Self::new(GENERIC_GENERATION_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failures of the persisted history slot.
///
/// A `Read` error on load is recovered by starting with empty history; a
/// `Write` error is logged and the in-memory state stays authoritative.
/// Neither is ever shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("stored history could not be read: {0}")]
    Read(String),
    #[error("history could not be written: {0}")]
    Write(String),
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The external text-generation provider, invoked exactly once per request.
#[async_trait]
pub trait LessonGenerationService: Send + Sync {
    /// Generates a complete lesson plan for the given request.
    ///
    /// The operation is atomic from the caller's perspective: either a fully
    /// stamped plan comes back, or a single `GenerationError`. No retries,
    /// no partial results.
    async fn generate(&self, request: &LessonPlanRequest) -> Result<LessonPlan, GenerationError>;
}

/// The single named slot holding the serialized history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Reads the whole history; the slot holds exactly one serialized array.
    /// An absent slot is empty history, not an error.
    async fn load(&self) -> Result<Vec<LessonPlan>, PersistenceError>;

    /// Overwrites the slot with the serialized current history.
    async fn save(&self, history: &[LessonPlan]) -> Result<(), PersistenceError>;
}
