use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use wiki_quiz_server::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Quiz, QuizQuestion},
    models::domain::quiz_attempt::QuizAttempt,
    models::dto::request::{AnswerInput, SubmitQuizRequest},
    repositories::{QuizAttemptRepository, QuizRepository},
    services::ScoringService,
};

struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        // Mirrors the unique index on source_url.
        if quizzes.values().any(|q| q.source_url == quiz.source_url) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz for source '{}' already exists",
                quiz.source_url
            )));
        }

        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn find_by_source_url(&self, source_url: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .values()
            .find(|q| q.source_url == source_url)
            .cloned())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        Ok(quizzes.remove(id).is_some())
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }
}

struct InMemoryQuizAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, QuizAttempt>>>,
}

impl InMemoryQuizAttemptRepository {
    fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn insert(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&attempt.id) {
            return Err(AppError::AlreadyExists(format!(
                "Attempt with id '{}' already exists",
                attempt.id
            )));
        }
        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn top_attempts(&self, limit: i64) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| a.user_name.is_some())
            .cloned()
            .collect();
        items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }
}

fn make_question(correct: &str) -> QuizQuestion {
    QuizQuestion {
        question: format!("Which option is {}?", correct),
        options: vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ],
        correct_answer: correct.to_string(),
        difficulty: Difficulty::Medium,
        explanation: String::new(),
    }
}

fn make_quiz(id: &str, topic: &str, age_minutes: i64) -> Quiz {
    let source_url = format!(
        "https://en.wikipedia.org/wiki/{}",
        topic.replace(' ', "_")
    );
    let mut quiz = Quiz::new(topic, &source_url, vec![make_question("B"), make_question("C")]);
    quiz.id = id.to_string();
    quiz.created_at = Utc::now() - Duration::minutes(age_minutes);
    quiz
}

fn make_attempt(id: &str, user_name: Option<&str>, score: f64) -> QuizAttempt {
    let mut attempt = QuizAttempt::new(
        "quiz-1",
        user_name.map(|v| v.to_string()),
        "Rust",
        score,
        0,
        2,
        vec![],
    );
    attempt.id = id.to_string();
    attempt
}

#[tokio::test]
async fn quiz_repository_crud_and_error_paths() {
    let repo = InMemoryQuizRepository::new();

    let quiz1 = make_quiz("quiz-1", "Mars", 10);
    let quiz2 = make_quiz("quiz-2", "Jupiter", 5);

    let created = repo.insert(quiz1.clone()).await.expect("insert quiz1");
    assert_eq!(created.id, "quiz-1");

    repo.insert(quiz2.clone()).await.expect("insert quiz2");

    let duplicate_id = repo.insert(quiz1.clone()).await;
    assert!(matches!(duplicate_id, Err(AppError::AlreadyExists(_))));

    let mut same_source = make_quiz("quiz-3", "Mars", 1);
    same_source.source_url = quiz1.source_url.clone();
    let duplicate_source = repo.insert(same_source).await;
    assert!(matches!(duplicate_source, Err(AppError::AlreadyExists(_))));

    let found = repo.find_by_id("quiz-1").await.expect("find should work");
    assert!(found.is_some());

    let by_source = repo
        .find_by_source_url("https://en.wikipedia.org/wiki/Mars")
        .await
        .expect("source lookup should work");
    assert_eq!(by_source.map(|q| q.id), Some("quiz-1".to_string()));

    let missing_source = repo
        .find_by_source_url("https://en.wikipedia.org/wiki/Venus")
        .await
        .expect("source lookup should work");
    assert!(missing_source.is_none());

    let recent = repo.recent(10).await.expect("recent should work");
    assert_eq!(recent.len(), 2);
    // Newest first.
    assert_eq!(recent[0].id, "quiz-2");
    assert_eq!(recent[1].id, "quiz-1");

    let limited = repo.recent(1).await.expect("recent should work");
    assert_eq!(limited.len(), 1);

    let deleted = repo.delete_by_id("quiz-1").await.expect("delete should work");
    assert!(deleted);
    let gone = repo.find_by_id("quiz-1").await.expect("find should work");
    assert!(gone.is_none());

    let deleted_again = repo.delete_by_id("quiz-1").await.expect("delete should work");
    assert!(!deleted_again);
}

#[tokio::test]
async fn attempt_repository_ranks_named_attempts_only() {
    let repo = InMemoryQuizAttemptRepository::new();

    repo.insert(make_attempt("attempt-1", Some("alice"), 80.0))
        .await
        .expect("insert attempt1");
    repo.insert(make_attempt("attempt-2", None, 100.0))
        .await
        .expect("insert attempt2");
    repo.insert(make_attempt("attempt-3", Some("bob"), 95.5))
        .await
        .expect("insert attempt3");
    repo.insert(make_attempt("attempt-4", Some("carol"), 40.0))
        .await
        .expect("insert attempt4");

    let duplicate = repo.insert(make_attempt("attempt-1", Some("alice"), 80.0)).await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));

    let top = repo.top_attempts(10).await.expect("leaderboard should work");
    let names: Vec<_> = top.iter().map(|a| a.user_name.clone().unwrap()).collect();
    // The anonymous 100.0 attempt is stored but never ranked.
    assert_eq!(names, vec!["bob", "alice", "carol"]);

    let top_two = repo.top_attempts(2).await.expect("leaderboard should work");
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[0].user_name.as_deref(), Some("bob"));
}

#[tokio::test]
async fn scoring_service_grades_and_records_attempts() {
    let quizzes = Arc::new(InMemoryQuizRepository::new());
    let attempts = Arc::new(InMemoryQuizAttemptRepository::new());

    quizzes
        .insert(make_quiz("quiz-1", "Mars", 1))
        .await
        .expect("seed quiz");

    let service = ScoringService::new(quizzes.clone(), attempts.clone());

    let response = service
        .submit(SubmitQuizRequest {
            quiz_id: "quiz-1".to_string(),
            user_name: Some("alice".to_string()),
            answers: vec![
                AnswerInput {
                    question_index: 0,
                    selected_answer: "B".to_string(),
                },
                AnswerInput {
                    question_index: 1,
                    selected_answer: "A".to_string(),
                },
            ],
        })
        .await
        .expect("submission should work");

    assert_eq!(response.quiz_id, "quiz-1");
    assert_eq!(response.score, 50.0);
    assert_eq!(response.correct_answers, 1);
    assert_eq!(response.total_questions, 2);
    assert_eq!(response.answers.len(), 2);
    assert!(response.answers[0].is_correct);

    let missing = service
        .submit(SubmitQuizRequest {
            quiz_id: "no-such-quiz".to_string(),
            user_name: None,
            answers: vec![AnswerInput {
                question_index: 0,
                selected_answer: "B".to_string(),
            }],
        })
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let out_of_range = service
        .submit(SubmitQuizRequest {
            quiz_id: "quiz-1".to_string(),
            user_name: None,
            answers: vec![AnswerInput {
                question_index: 9,
                selected_answer: "B".to_string(),
            }],
        })
        .await;
    assert!(matches!(
        out_of_range,
        Err(AppError::IndexOutOfRange { index: 9, total: 2 })
    ));

    let leaderboard = service.leaderboard(10).await.expect("leaderboard should work");
    assert_eq!(leaderboard.len(), 1);
    assert_eq!(leaderboard[0].user_name, "alice");
    assert_eq!(leaderboard[0].score, 50.0);
    assert_eq!(leaderboard[0].topic, "Mars");
}
