use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::prompts::{build_quiz_prompt, QUIZ_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::domain::{Article, Quiz},
    services::model_service::CompletionClient,
    services::quiz_validator::{
        positional_difficulty, question_candidates, validate_questions, DifficultyStrategy,
    },
    services::sanitizer::{extract_json_payload, ExpectedShape},
};

/// Upper bound on article text fed to the model, to stay inside its
/// context window.
pub const MAX_ARTICLE_CHARS: usize = 4000;

/// Turns article text into a validated quiz: prompt, complete,
/// sanitize, parse, validate, assemble. No persistence and no retries;
/// every failure is terminal for the request and typed for the caller.
pub struct QuizGenerator {
    client: Arc<dyn CompletionClient>,
    difficulty: DifficultyStrategy,
}

impl QuizGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            difficulty: positional_difficulty,
        }
    }

    /// Replace the index-to-difficulty labeling used when the model
    /// omits difficulty.
    pub fn with_difficulty_strategy(mut self, strategy: DifficultyStrategy) -> Self {
        self.difficulty = strategy;
        self
    }

    pub async fn generate(&self, article: &Article, requested: usize) -> AppResult<Quiz> {
        let content = truncate_chars(&article.content, MAX_ARTICLE_CHARS);
        let prompt = build_quiz_prompt(&article.title, content, requested);

        let completion = self.client.complete(QUIZ_SYSTEM_PROMPT, &prompt).await?;
        log::debug!(
            "model completion for '{}': {} chars",
            article.title,
            completion.len()
        );

        let payload = extract_json_payload(&completion, ExpectedShape::Array)?;
        log::debug!("sanitized payload: {} chars", payload.len());

        let value: Value = serde_json::from_str(payload).map_err(|err| {
            log::warn!("completion for '{}' is not valid JSON: {err}", article.title);
            AppError::MalformedResponse(format!("completion is not valid JSON: {err}"))
        })?;
        let candidates = question_candidates(&value).ok_or_else(|| {
            AppError::MalformedResponse("expected a JSON array of questions".to_string())
        })?;

        let questions = validate_questions(candidates, requested, self.difficulty)
            .map_err(|violation| {
                log::warn!("rejected completion for '{}': {violation}", article.title);
                violation
            })?;
        log::info!(
            "validated {} questions for '{}'",
            questions.len(),
            article.title
        );

        Ok(Quiz::new(&article.title, &article.source_url, questions))
    }
}

/// Char-boundary-safe prefix of at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
