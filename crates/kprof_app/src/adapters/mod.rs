pub mod generation;
pub mod history;

pub use generation::OpenAiLessonAdapter;
pub use history::JsonFileHistoryAdapter;
