//! Fleet API client errors

use elite_core::AppError;
use thiserror::Error;

/// Errors of the fleet API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: request took longer than {0}s")]
    Timeout(u64),

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

    #[error("HTTP error: status {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => ClientError::BadRequest(message),
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            409 => ClientError::Conflict(message),
            _ => ClientError::HttpError { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::BadRequest(msg) => AppError::InvalidInput(msg),
            ClientError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ClientError::Forbidden(msg) => AppError::Forbidden(msg),
            ClientError::NotFound(msg) => AppError::NotFound(msg),
            ClientError::Conflict(msg) => AppError::Conflict(msg),
            ClientError::Timeout(secs) => AppError::UpstreamTimeout(secs),
            ClientError::Config(msg) => AppError::Config(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}
