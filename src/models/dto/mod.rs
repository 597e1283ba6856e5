pub mod request;
pub mod response;
pub use request::{AnswerInput, GenerateQuizRequest, LimitParams, SubmitQuizRequest};
pub use response::{LeaderboardEntry, QuizSummaryResponse, SubmitQuizResponse};
