use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizAttemptRepository, MongoQuizRepository},
    services::{
        generation_service::QuizGenerator, model_service::GroqClient, quiz_service::QuizService,
        scoring_service::ScoringService, wikipedia_service::WikipediaClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub scoring_service: Arc<ScoringService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let api_key = SecretString::from(config.groq_api_key.expose_secret().to_string());
        let completion_client = Arc::new(GroqClient::new(api_key));
        let generator = Arc::new(QuizGenerator::new(completion_client));
        let article_source = Arc::new(WikipediaClient::new());

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository.clone(),
            article_source,
            generator,
        ));
        let scoring_service = Arc::new(ScoringService::new(quiz_repository, attempt_repository));

        Ok(Self {
            quiz_service,
            scoring_service,
            db,
            config: Arc::new(config),
        })
    }
}
