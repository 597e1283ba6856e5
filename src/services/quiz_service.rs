use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    models::dto::request::GenerateQuizRequest,
    repositories::QuizRepository,
    services::generation_service::QuizGenerator,
    services::wikipedia_service::ArticleSource,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    source: Arc<dyn ArticleSource>,
    generator: Arc<QuizGenerator>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        source: Arc<dyn ArticleSource>,
        generator: Arc<QuizGenerator>,
    ) -> Self {
        Self {
            repository,
            source,
            generator,
        }
    }

    /// Generate and persist a quiz for a topic or article URL.
    ///
    /// A quiz already stored for the resolved source URL is returned
    /// as-is, before any model call. The same applies when a concurrent
    /// request wins the insert race: the unique source_url index turns
    /// the losing write into a read of the stored quiz.
    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let article = self.source.fetch(&request.topic).await?;

        if let Some(existing) = self
            .repository
            .find_by_source_url(&article.source_url)
            .await?
        {
            log::info!(
                "returning stored quiz '{}' for source {}",
                existing.id,
                article.source_url
            );
            return Ok(existing);
        }

        let quiz = self
            .generator
            .generate(&article, request.question_count())
            .await?;

        match self.repository.insert(quiz).await {
            Ok(quiz) => Ok(quiz),
            Err(AppError::AlreadyExists(_)) => {
                log::info!(
                    "concurrent generation for source {}, reusing stored quiz",
                    article.source_url
                );
                self.repository
                    .find_by_source_url(&article.source_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::DatabaseError(format!(
                            "quiz for source '{}' vanished after duplicate insert",
                            article.source_url
                        ))
                    })
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{id}' not found")))?;

        Ok(quiz)
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Quiz with id '{id}' not found")));
        }
        Ok(())
    }

    pub async fn recent_quizzes(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        self.repository.recent(limit).await
    }
}
