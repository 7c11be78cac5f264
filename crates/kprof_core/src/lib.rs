pub mod domain;
pub mod ports;
pub mod prompt;
pub mod store;

pub use domain::{
    GradeLevel, LessonMeta, LessonPlan, LessonPlanRequest, SourceRef, HISTORY_LIMIT,
};
pub use ports::{
    GenerationError, HistoryRepository, LessonGenerationService, PersistenceError,
    GENERIC_GENERATION_MESSAGE,
};
pub use prompt::{build_lesson_prompt, LessonPrompt};
pub use store::{PlanStore, ViewMode};
