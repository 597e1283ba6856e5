pub mod generation_service;
pub mod model_service;
pub mod quiz_service;
pub mod quiz_validator;
pub mod sanitizer;
pub mod scoring_service;
pub mod wikipedia_service;

pub use generation_service::QuizGenerator;
pub use model_service::{CompletionClient, GroqClient};
pub use quiz_service::QuizService;
pub use scoring_service::ScoringService;
pub use wikipedia_service::{ArticleSource, WikipediaClient};
