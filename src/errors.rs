use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// One structurally broken question invalidates the whole batch; the
/// index and offending detail are kept for diagnosing prompt drift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("question {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index} has {actual_count} usable options, expected exactly 4")]
    InvalidOptionCount { index: usize, actual_count: usize },

    #[error("question {index} answer '{answer}' is not one of its options")]
    AnswerNotInOptions { index: usize, answer: String },

    #[error("model produced {got} valid questions, requested {want}")]
    InsufficientQuestions { got: usize, want: usize },
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Quiz schema violation: {0}")]
    SchemaViolation(#[from] SchemaViolation),

    #[error("Invalid submission: answer index {index} out of range for {total} questions")]
    IndexOutOfRange { index: u32, total: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SourceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            return AppError::AlreadyExists(err.to_string());
        }
        AppError::DatabaseError(err.to_string())
    }
}

/// Duplicate-key writes (code 11000) come from the unique source_url
/// index; callers treat them as cache hits, not failures.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
