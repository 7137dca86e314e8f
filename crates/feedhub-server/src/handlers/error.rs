//! Domain error to HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedhub_core::FeedError;
use serde_json::json;

/// Error returned by every handler
pub struct ApiError(pub FeedError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            FeedError::NotFound { .. } => StatusCode::NOT_FOUND,
            FeedError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            FeedError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(FeedError::not_found("User", "x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(FeedError::invalid("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(FeedError::Storage("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
