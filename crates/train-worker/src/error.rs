//! Worker error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Invalid prompts: {0}")]
    InvalidPrompts(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generation of clip {index} failed: {source}")]
    Generation {
        index: usize,
        #[source]
        source: train_ml_client::MlError,
    },

    #[error("Generation client error: {0}")]
    Client(#[from] train_ml_client::MlError),

    #[error("Media error: {0}")]
    Media(#[from] train_media::MediaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    pub fn invalid_prompts(msg: impl Into<String>) -> Self {
        Self::InvalidPrompts(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkerError::InvalidPrompts(_) | WorkerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            WorkerError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            WorkerError::Generation { .. } => StatusCode::BAD_GATEWAY,
            WorkerError::Client(_) | WorkerError::Media(_) | WorkerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Narrative request failed");
        } else {
            warn!(status = %status, error = %self, "Narrative request rejected");
        }

        let code = match &self {
            WorkerError::Generation { index, .. } => Some(format!("clip_{}", index)),
            _ => None,
        };
        let body = ErrorResponse {
            detail: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WorkerError::invalid_request("bad finetune id").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkerError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WorkerError::Generation {
                index: 3,
                source: train_ml_client::MlError::RequestFailed("503".to_string()),
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            WorkerError::Media(train_media::MediaError::Timeout(30)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
