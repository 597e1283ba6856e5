use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnswerResult, Quiz, QuizAttempt};

#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuizResponse {
    pub quiz_id: String,
    pub score: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub answers: Vec<AnswerResult>,
}

impl From<QuizAttempt> for SubmitQuizResponse {
    fn from(attempt: QuizAttempt) -> Self {
        SubmitQuizResponse {
            quiz_id: attempt.quiz_id,
            score: attempt.score,
            total_questions: attempt.total_questions,
            correct_answers: attempt.correct_answers,
            answers: attempt.answers,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub user_name: String,
    pub score: f64,
    pub topic: String,
    pub completed_at: DateTime<Utc>,
}

impl From<QuizAttempt> for LeaderboardEntry {
    fn from(attempt: QuizAttempt) -> Self {
        LeaderboardEntry {
            user_name: attempt.user_name.unwrap_or_default(),
            score: attempt.score,
            topic: attempt.topic,
            completed_at: attempt.completed_at,
        }
    }
}

/// List-item view for quiz history; omits the question bodies.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryResponse {
    pub id: String,
    pub topic: String,
    pub source_url: String,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<Quiz> for QuizSummaryResponse {
    fn from(quiz: Quiz) -> Self {
        QuizSummaryResponse {
            id: quiz.id,
            topic: quiz.topic,
            source_url: quiz.source_url,
            question_count: quiz.questions.len(),
            created_at: quiz.created_at,
        }
    }
}
