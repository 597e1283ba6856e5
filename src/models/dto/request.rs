use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 300, message = "Topic must be 1-300 characters"))]
    pub topic: String,

    #[validate(range(min = 1, max = 10, message = "num_questions must be 1-10"))]
    pub num_questions: Option<u32>,
}

impl GenerateQuizRequest {
    pub fn question_count(&self) -> usize {
        self.num_questions
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_QUESTION_COUNT)
    }
}

// The length rule on `answers` records the rejected value, so
// Vec<AnswerInput> must be Serialize.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerInput {
    pub question_index: u32,
    pub selected_answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1))]
    pub quiz_id: String,

    #[validate(length(min = 1, max = 50, message = "user_name must be 1-50 characters"))]
    pub user_name: Option<String>,

    #[validate(length(min = 1, message = "At least one answer is required"))]
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LimitParams {
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<i64>,
}

impl Default for LimitParams {
    fn default() -> Self {
        Self { limit: Some(10) }
    }
}

impl LimitParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 50)
    }
}
