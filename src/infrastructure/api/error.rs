use thiserror::Error;

use crate::core::api::ApiFailure;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Cannot connect to {0}")]
    Connection(String),
    #[error("Not found")]
    NotFound,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<ApiError> for ApiFailure {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::NotFound => ApiFailure::NotFound,
            other => ApiFailure::Message(other.to_string()),
        }
    }
}
