//! API error types.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use train_media::MediaError;
use train_ml_client::MlError;
use train_storage::StorageError;

use crate::metrics;
use crate::templates;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingPrecondition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Video generation failed: {0}")]
    Generation(#[from] MlError),

    #[error("Video processing failed: {0}")]
    Media(#[from] MediaError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn missing_precondition(msg: impl Into<String>) -> Self {
        Self::MissingPrecondition(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPrecondition(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) | ApiError::Storage(StorageError::MissingClip(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) | ApiError::Media(_) | ApiError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Media(e) if e.is_encoder_failure() => {
                metrics::record_encoder_failure();
                error!(error = %self, "Encoder failure");
            }
            _ if self.is_internal() => error!(error = %self, "Request failed"),
            _ => warn!(status = %status, error = %self, "Request rejected"),
        }

        let mut response = (status, Html(templates::error_page(&self.to_string()))).into_response();
        if self.is_internal() {
            response.extensions_mut().insert(InternalErrorDetail);
        }
        response
    }
}

/// Marks a response whose page carries internal error details.
#[derive(Debug, Clone, Copy)]
pub struct InternalErrorDetail;

/// Page shown in place of internal error details in production.
pub fn redacted_error_page() -> Html<String> {
    Html(templates::error_page("An internal error occurred"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use train_models::ClipRole;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::missing_precondition("Stage 1 video not found. Generate scenario first.")
                .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(StorageError::MissingClip(ClipRole::Final)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(MlError::RequestFailed("503".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(MediaError::Timeout(30)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_precondition_message_is_verbatim() {
        let err =
            ApiError::missing_precondition("Stage 1 video not found. Generate scenario first.");
        assert_eq!(
            err.to_string(),
            "Stage 1 video not found. Generate scenario first."
        );
    }

    #[test]
    fn test_only_server_errors_are_marked() {
        let response = ApiError::from(MlError::RequestFailed("503".to_string())).into_response();
        assert!(response.extensions().get::<InternalErrorDetail>().is_some());

        let response = ApiError::bad_request("Unknown task setting: Underwater").into_response();
        assert!(response.extensions().get::<InternalErrorDetail>().is_none());
    }
}
