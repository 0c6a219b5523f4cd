use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
///
/// ```json
/// {"message":"User not found","status":404}
/// ```
///
/// `status` always matches the status line of the response it is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    pub status: u16,
}

impl ErrorPayload {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        ErrorPayload {
            message: message.into(),
            status,
        }
    }
}

/// Failures while rendering a response.
#[derive(Debug, Error)]
pub enum RespondError {
    /// The payload could not be encoded as JSON.
    #[error("json: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Status codes must have three digits.
    #[error("invalid status code {0}")]
    InvalidStatus(u16),

    /// The sink failed while being written.
    #[error("write response: {0}")]
    Io(#[from] std::io::Error),
}

impl RespondError {
    /// Whether a fallback body can still be delivered to the client.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RespondError::Io(_))
    }
}

pub type RespondResult<T> = Result<T, RespondError>;

/// Typed HTTP error for handlers that return `Result<T, HttpError>`.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; blank messages fall back to the reason phrase.
    pub fn message(&self) -> &str {
        let message = match self {
            HttpError::BadRequest(m)
            | HttpError::Unauthorized(m)
            | HttpError::Forbidden(m)
            | HttpError::NotFound(m)
            | HttpError::Conflict(m)
            | HttpError::Internal(m) => m.as_str(),
        };
        or_default(message, self.status_code())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.status_code().as_u16(), self.message())
    }
}

/// `message`, or the reason phrase of `status` when `message` is blank.
pub(crate) fn or_default(message: &str, status: StatusCode) -> &str {
    if message.trim().is_empty() {
        status.canonical_reason().unwrap_or_default()
    } else {
        message
    }
}
