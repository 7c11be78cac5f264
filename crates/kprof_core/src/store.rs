//! crates/kprof_core/src/store.rs
//!
//! The `PlanStore` owns all session state the view layer renders: the current
//! plan, the bounded deduplicated history, the loading flag and the error
//! banner message. It is the only writer of the persisted history slot.
//!
//! Execution is single-threaded and event-driven: every operation takes
//! `&mut self`, so at most one generation call is ever in flight and no
//! locking is needed around the slot.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{LessonPlan, LessonPlanRequest, HISTORY_LIMIT};
use crate::ports::{HistoryRepository, LessonGenerationService, PersistenceError};

/// The two-state session machine: a form is shown while composing, the tabbed
/// plan display while viewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Composing,
    Viewing,
}

/// Owns the current plan and the persisted history, mutated only through the
/// operations below.
pub struct PlanStore {
    generator: Arc<dyn LessonGenerationService>,
    repository: Arc<dyn HistoryRepository>,
    current_plan: Option<LessonPlan>,
    history: Vec<LessonPlan>,
    is_loading: bool,
    error: Option<String>,
    mode: ViewMode,
}

impl PlanStore {
    /// Constructs the store, loading history once from the persistent slot.
    ///
    /// Corrupt or unreadable stored history is discarded: the store starts
    /// with an empty list and the failure only reaches the logs. Current
    /// plan, flags and view mode always start fresh.
    pub async fn open(
        generator: Arc<dyn LessonGenerationService>,
        repository: Arc<dyn HistoryRepository>,
    ) -> Self {
        let history = match repository.load().await {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "stored history unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            generator,
            repository,
            current_plan: None,
            history,
            is_loading: false,
            error: None,
            mode: ViewMode::Composing,
        }
    }

    /// Generates a plan for the request and makes it current.
    ///
    /// On success the plan is upserted into history: any existing entry with
    /// the same `question` is evicted, the new plan goes to the front, and
    /// the list is truncated to [`HISTORY_LIMIT`] entries. On failure only
    /// the error message changes; history and the current plan stay intact,
    /// so the user can simply resubmit.
    pub async fn submit(&mut self, request: LessonPlanRequest) {
        // The view disables the form while loading; this guard keeps the
        // contract self-contained. No queueing, no cancellation.
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.error = None;

        match self.generator.generate(&request).await {
            Ok(plan) => {
                self.history.retain(|p| p.question != plan.question);
                self.history.insert(0, plan.clone());
                self.history.truncate(HISTORY_LIMIT);
                self.current_plan = Some(plan);
                self.mode = ViewMode::Viewing;
                self.persist_history().await;
            }
            Err(e) => {
                self.error = Some(e.message().to_string());
            }
        }

        self.is_loading = false;
    }

    /// Loads a history entry into the current plan. Returns `false` (and
    /// changes nothing) when no entry has the given id.
    pub fn select(&mut self, id: Uuid) -> bool {
        match self.history.iter().find(|p| p.id == id) {
            Some(plan) => {
                self.current_plan = Some(plan.clone());
                self.mode = ViewMode::Viewing;
                true
            }
            None => false,
        }
    }

    /// Removes a plan from history. Deleting the currently viewed plan
    /// returns the session to the composing state.
    pub async fn delete(&mut self, id: Uuid) {
        let before = self.history.len();
        self.history.retain(|p| p.id != id);
        if self.history.len() != before {
            self.persist_history().await;
        }

        if self.current_plan.as_ref().is_some_and(|p| p.id == id) {
            self.current_plan = None;
            self.mode = ViewMode::Composing;
        }
    }

    /// Explicit "new question" action: back to the empty form.
    pub fn start_new(&mut self) {
        self.current_plan = None;
        self.error = None;
        self.mode = ViewMode::Composing;
    }

    /// Final persistence write for shutdown. Every history mutation already
    /// persists, so this only matters when an earlier write failed.
    pub async fn flush(&self) -> Result<(), PersistenceError> {
        self.repository.save(&self.history).await
    }

    pub fn current_plan(&self) -> Option<&LessonPlan> {
        self.current_plan.as_ref()
    }

    pub fn history(&self) -> &[LessonPlan] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Rewrites the slot with the current history. A failed write is logged
    /// and otherwise ignored: the in-memory state stays authoritative.
    async fn persist_history(&self) {
        if let Err(e) = self.repository.save(&self.history).await {
            warn!(error = %e, "failed to persist history");
        }
    }
}
