//! Error types for Feedhub

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    /// An id did not resolve to a stored record
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A referential constraint was violated
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FeedError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        FeedError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        FeedError::InvalidRequest(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FeedError::NotFound { .. })
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, FeedError::InvalidRequest(_))
    }
}
