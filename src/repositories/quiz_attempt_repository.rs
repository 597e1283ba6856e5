use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::quiz_attempt::QuizAttempt};

#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    async fn insert(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn top_attempts(&self, limit: i64) -> AppResult<Vec<QuizAttempt>>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_id_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_id".to_string())
                    .build(),
            )
            .build();

        let score_index = IndexModel::builder()
            .keys(doc! { "score": -1 })
            .options(
                IndexOptions::builder()
                    .name("score_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(quiz_id_index).await?;
        self.collection.create_index(score_index).await?;

        log::info!("Successfully created indexes for quiz_attempts collection");
        Ok(())
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn insert(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn top_attempts(&self, limit: i64) -> AppResult<Vec<QuizAttempt>> {
        // Anonymous attempts are stored but never ranked.
        let attempts = self
            .collection
            .find(doc! { "user_name": { "$ne": null } })
            .sort(doc! { "score": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }
}
