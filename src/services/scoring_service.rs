use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerResult, QuizAttempt, QuizQuestion},
    models::dto::request::{AnswerInput, SubmitQuizRequest},
    models::dto::response::{LeaderboardEntry, SubmitQuizResponse},
    repositories::{QuizAttemptRepository, QuizRepository},
};

/// Grading outcome before it is attached to an attempt record.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreOutcome {
    pub score: f64,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub results: Vec<AnswerResult>,
}

/// Grade submitted answers against stored questions.
///
/// Pure and deterministic: exact string comparison against the stored
/// correct answer, no case or whitespace normalization. An out-of-range
/// index fails the whole submission. The breakdown keeps submission
/// order; the score is a 0-100 percentage of the stored question count,
/// rounded to 2 decimals, with 0 questions defined as score 0.
pub fn score_answers(
    questions: &[QuizQuestion],
    answers: &[AnswerInput],
) -> AppResult<ScoreOutcome> {
    let mut correct_count = 0;
    let mut results = Vec::with_capacity(answers.len());

    for answer in answers {
        let question = questions.get(answer.question_index as usize).ok_or(
            AppError::IndexOutOfRange {
                index: answer.question_index,
                total: questions.len(),
            },
        )?;

        let is_correct = answer.selected_answer == question.correct_answer;
        if is_correct {
            correct_count += 1;
        }

        results.push(AnswerResult {
            question_index: answer.question_index,
            question: question.question.clone(),
            user_answer: answer.selected_answer.clone(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
            explanation: question.explanation.clone(),
        });
    }

    let total = questions.len();
    let score = if total > 0 {
        round2(correct_count as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    Ok(ScoreOutcome {
        score,
        correct_answers: correct_count,
        total_questions: total as i32,
        results,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct ScoringService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl ScoringService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, attempts: Arc<dyn QuizAttemptRepository>) -> Self {
        Self { quizzes, attempts }
    }

    /// Score a submission and persist the resulting attempt.
    pub async fn submit(&self, request: SubmitQuizRequest) -> AppResult<SubmitQuizResponse> {
        request.validate()?;

        let quiz = self
            .quizzes
            .find_by_id(&request.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", request.quiz_id))
            })?;

        let outcome = score_answers(&quiz.questions, &request.answers)?;
        log::info!(
            "scored attempt on quiz '{}': {}/{} correct",
            quiz.id,
            outcome.correct_answers,
            outcome.total_questions
        );

        let attempt = QuizAttempt::new(
            &quiz.id,
            request.user_name,
            &quiz.topic,
            outcome.score,
            outcome.correct_answers,
            outcome.total_questions,
            outcome.results,
        );
        let attempt = self.attempts.insert(attempt).await?;

        Ok(SubmitQuizResponse::from(attempt))
    }

    /// Named attempts ordered by score descending.
    pub async fn leaderboard(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        let attempts = self.attempts.top_attempts(limit).await?;
        Ok(attempts.into_iter().map(LeaderboardEntry::from).collect())
    }
}
