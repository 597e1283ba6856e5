pub mod article;
pub mod quiz;
pub mod quiz_attempt;
pub use article::Article;
pub use quiz::{Difficulty, Quiz, QuizQuestion};
pub use quiz_attempt::{AnswerResult, QuizAttempt};
