use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated quiz. Immutable after creation; regenerating for a new
/// article produces a new Quiz, and source_url is unique in storage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub topic: String,
    pub source_url: String,
    pub questions: Vec<QuizQuestion>,
    pub created_at: DateTime<Utc>,
}

/// Invariant: correct_answer equals exactly one element of options, and
/// options holds exactly 4 distinct non-empty strings. Enforced by the
/// validation pipeline before any Quiz is assembled.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Quiz {
    pub fn new(topic: &str, source_url: &str, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            source_url: source_url.to_string(),
            questions,
            created_at: Utc::now(),
        }
    }
}
