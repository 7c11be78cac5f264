//! crates/kprof_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs carry the persisted JSON shape directly (camelCase field
//! names), so the serde derives live here rather than in a separate DTO layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of plans kept in history, most recent first.
pub const HISTORY_LIMIT: usize = 15;

/// The target school grade guiding content difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradeLevel {
    Ce1,
    Ce2,
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeLevel::Ce1 => write!(f, "CE1"),
            GradeLevel::Ce2 => write!(f, "CE2"),
        }
    }
}

/// A single submission from the form. Transient: one per generation call,
/// never persisted on its own.
///
/// `topic` must be non-empty after trimming; the view layer enforces this
/// before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRequest {
    pub topic: String,
    pub grade_level: GradeLevel,
}

/// Optional richer metadata echoed by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMeta {
    pub titre: String,
    pub domaine: String,
    pub sous_domaine: String,
    pub duree: String,
}

/// A reference to supporting material. Explicitly typed replacement for the
/// legacy untyped `sources` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub url: Option<String>,
}

/// A generated lesson plan, the persisted unit of value.
///
/// Created only by a successful generation call, never mutated afterwards,
/// destroyed only by explicit deletion or by falling off the history bound.
/// `question` is the user-facing display string and the deduplication key
/// within history; `id` is the selection/deletion key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub topic: String,
    pub question: String,
    pub grade_level: GradeLevel,
    pub username: String,
    /// Learner-facing recap of the lesson, markdown.
    pub rappel_cours: String,
    /// Teacher-facing lesson sequence, markdown.
    pub sequence_pedagogique: String,
    /// Practice exercises, markdown.
    pub exercices: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introductory_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_meta: Option<LessonMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan(topic: &str) -> LessonPlan {
        LessonPlan {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            topic: topic.to_string(),
            question: topic.to_string(),
            grade_level: GradeLevel::Ce1,
            username: "enseignant".to_string(),
            rappel_cours: "## Rappel".to_string(),
            sequence_pedagogique: "## Séquence".to_string(),
            exercices: "## Exercices".to_string(),
            introductory_text: Some("Bonjour".to_string()),
            lesson_meta: Some(LessonMeta {
                titre: "Les fractions".to_string(),
                domaine: "Mathématiques".to_string(),
                sous_domaine: "Numération".to_string(),
                duree: "45 min".to_string(),
            }),
            sources: vec![SourceRef { url: None }],
        }
    }

    #[test]
    fn grade_level_uses_upper_case_wire_form() {
        assert_eq!(serde_json::to_string(&GradeLevel::Ce1).unwrap(), "\"CE1\"");
        assert_eq!(
            serde_json::from_str::<GradeLevel>("\"CE2\"").unwrap(),
            GradeLevel::Ce2
        );
        assert_eq!(GradeLevel::Ce2.to_string(), "CE2");
    }

    #[test]
    fn plan_fields_serialize_as_camel_case() {
        let value = serde_json::to_value(sample_plan("Les fractions")).unwrap();
        assert!(value.get("rappelCours").is_some());
        assert!(value.get("sequencePedagogique").is_some());
        assert!(value.get("gradeLevel").is_some());
        assert!(value.get("lessonMeta").is_some());
    }

    #[test]
    fn history_round_trips_through_json() {
        let history = vec![sample_plan("Les fractions"), sample_plan("Le passé composé")];
        let encoded = serde_json::to_string(&history).unwrap();
        let decoded: Vec<LessonPlan> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, history);
    }
}
