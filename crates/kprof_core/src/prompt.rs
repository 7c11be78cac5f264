//! crates/kprof_core/src/prompt.rs
//!
//! Builds the instruction text and the declarative response-shape descriptor
//! sent to the generation service. Pure and deterministic: no I/O, no clock,
//! no randomness.

use serde_json::{json, Value};

use crate::domain::GradeLevel;

/// The two halves of a generation request: the natural-language instruction
/// and the JSON-Schema descriptor of the expected structured reply.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonPrompt {
    pub text: String,
    pub response_schema: Value,
}

/// Builds the prompt for one (topic, grade level) submission.
///
/// Precondition: `topic` is non-empty after trimming; the view layer disables
/// submission otherwise.
pub fn build_lesson_prompt(topic: &str, grade_level: GradeLevel) -> LessonPrompt {
    debug_assert!(!topic.trim().is_empty());

    let text = format!(
        r#"En tant que kPROF, l'assistant IA des enseignants sénégalais, aide-moi à préparer un cours sur : "{topic}".
Niveau : {grade_level} (Sénégal).

Fournis une réponse structurée en trois parties :
1. Rappel du cours : Fiche synthétique pour les élèves.
2. Séquence pédagogique : Guide pour le maître (Objectifs, Durée, Déroulement).
3. Exercices : Évaluations pour la classe.

Respecte les standards du Ministère de l'Éducation Nationale (MEN) du Sénégal pour les classes de l'Étape 2 (CE1/CE2)."#
    );

    LessonPrompt {
        text,
        response_schema: response_schema(),
    }
}

/// The declarative shape of the expected reply. Three required narrative
/// blocks plus optional metadata the service may fill in.
fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "rappelCours": {
                "type": "string",
                "description": "Un rappel clair et structuré du cours pour les élèves. Utilisez le format Markdown."
            },
            "sequencePedagogique": {
                "type": "string",
                "description": "Une séquence pédagogique détaillée pour l'enseignant, incluant les étapes de la leçon. Utilisez le format Markdown."
            },
            "exercices": {
                "type": "string",
                "description": "Une série d'exercices variés (compréhension, application) adaptés au niveau. Utilisez le format Markdown."
            },
            "introductoryText": {
                "type": "string",
                "description": "Brève introduction bienveillante à la réponse."
            },
            "lessonMeta": {
                "type": "object",
                "description": "Métadonnées de la fiche de cours.",
                "properties": {
                    "titre": { "type": "string" },
                    "domaine": { "type": "string" },
                    "sousDomaine": { "type": "string" },
                    "duree": { "type": "string" }
                },
                "required": ["titre", "domaine", "sousDomaine", "duree"],
                "additionalProperties": false
            },
            "sources": {
                "type": "array",
                "description": "Références éventuelles.",
                "items": {
                    "type": "object",
                    "properties": {
                        "url": { "type": ["string", "null"] }
                    },
                    "additionalProperties": false
                }
            }
        },
        "required": ["rappelCours", "sequencePedagogique", "exercices"],
        "additionalProperties": false
    })
}
