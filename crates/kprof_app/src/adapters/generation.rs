//! crates/kprof_app/src/adapters/generation.rs
//!
//! This module contains the adapter for the lesson-generating LLM.
//! It implements the `LessonGenerationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use kprof_core::{
    domain::{LessonMeta, LessonPlan, LessonPlanRequest, SourceRef},
    ports::{GenerationError, LessonGenerationService},
    prompt::build_lesson_prompt,
};

/// Static persona configuration: who the assistant is and which curriculum it
/// covers. Sent as the system message on every request.
const PERSONA: &str = "Tu es kPROF, un assistant pédagogique virtuel intelligent conçu par Bibliothèques Sans Frontières pour accompagner les enseignants sénégalais. Tu es expert du curriculum national du Sénégal (CE1-CE2). Tu t'exprimes de manière bienveillante, professionnelle et précise.";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `LessonGenerationService` using an
/// OpenAI-compatible LLM with a JSON-Schema constrained response.
#[derive(Clone)]
pub struct OpenAiLessonAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    default_username: String,
}

/// The content-only payload the service returns. Everything else on a
/// [`LessonPlan`] is stamped locally after parsing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedLesson {
    rappel_cours: String,
    sequence_pedagogique: String,
    exercices: String,
    #[serde(default)]
    introductory_text: Option<String>,
    #[serde(default)]
    lesson_meta: Option<LessonMeta>,
    #[serde(default)]
    sources: Vec<SourceRef>,
}

impl OpenAiLessonAdapter {
    /// Creates a new `OpenAiLessonAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String, default_username: String) -> Self {
        Self {
            client,
            model,
            default_username,
        }
    }

    /// Parses the service payload and stamps it into a full plan: fresh id,
    /// current timestamp, and the echo fields the payload does not carry
    /// (topic, question, grade level, display name).
    fn assemble_plan(
        payload: &str,
        request: &LessonPlanRequest,
        default_username: &str,
    ) -> Result<LessonPlan, GenerationError> {
        let generated: GeneratedLesson = serde_json::from_str(payload).map_err(|e| {
            error!(error = %e, "generation payload is not a valid lesson document");
            GenerationError::generic()
        })?;

        Ok(LessonPlan {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            topic: request.topic.clone(),
            question: request.topic.clone(),
            grade_level: request.grade_level,
            username: default_username.to_string(),
            rappel_cours: generated.rappel_cours,
            sequence_pedagogique: generated.sequence_pedagogique,
            exercices: generated.exercices,
            introductory_text: generated.introductory_text,
            lesson_meta: generated.lesson_meta,
            sources: generated.sources,
        })
    }
}

//=========================================================================================
// `LessonGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl LessonGenerationService for OpenAiLessonAdapter {
    /// Sends exactly one generation request and parses the reply into a plan.
    ///
    /// Every failure mode (request building, transport, empty response,
    /// malformed payload) is logged here and collapsed into the single
    /// user-facing `GenerationError`.
    async fn generate(&self, request: &LessonPlanRequest) -> Result<LessonPlan, GenerationError> {
        let prompt = build_lesson_prompt(&request.topic, request.grade_level);

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(PERSONA)
                .build()
                .map_err(|e| {
                    error!(error = %e, "failed to build system message");
                    GenerationError::generic()
                })?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt.text)
                .build()
                .map_err(|e| {
                    error!(error = %e, "failed to build user message");
                    GenerationError::generic()
                })?
                .into(),
        ];

        let response_format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: "lesson_plan".to_string(),
                description: Some("Fiche de cours structurée pour l'enseignant.".to_string()),
                schema: Some(prompt.response_schema),
                strict: Some(false),
            },
        };

        let api_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .response_format(response_format)
            .n(1)
            .build()
            .map_err(|e| {
                error!(error = %e, "failed to build generation request");
                GenerationError::generic()
            })?;

        let response = self
            .client
            .chat()
            .create(api_request)
            .await
            .map_err(|e: OpenAIError| {
                error!(error = %e, "generation request failed");
                GenerationError::generic()
            })?;

        let payload = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                error!("generation response contained no text content");
                GenerationError::generic()
            })?;

        Self::assemble_plan(&payload, request, &self.default_username)
    }
}
