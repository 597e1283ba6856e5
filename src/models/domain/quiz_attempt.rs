use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scored submission against a stored quiz. Written once, never
/// mutated; quiz_id is a weak reference and topic is denormalized at
/// submission time so the leaderboard reads a single collection.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub user_name: Option<String>,
    pub topic: String,
    pub score: f64,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub answers: Vec<AnswerResult>,
    pub completed_at: DateTime<Utc>,
}

/// Per-question grading detail, kept in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResult {
    pub question_index: u32,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

impl QuizAttempt {
    pub fn new(
        quiz_id: &str,
        user_name: Option<String>,
        topic: &str,
        score: f64,
        correct_answers: i32,
        total_questions: i32,
        answers: Vec<AnswerResult>,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_name,
            topic: topic.to_string(),
            score,
            correct_answers,
            total_questions,
            answers,
            completed_at: Utc::now(),
        }
    }
}
