use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_by_source_url(&self, source_url: &str) -> AppResult<Option<Quiz>>;
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
    async fn recent(&self, limit: i64) -> AppResult<Vec<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // One stored quiz per article; generation dedupes on this key.
        let source_url_index = IndexModel::builder()
            .keys(doc! { "source_url": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("source_url_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(source_url_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_by_source_url(&self, source_url: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "source_url": source_url })
            .await?;
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        use futures::TryStreamExt;

        let quizzes = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }
}
