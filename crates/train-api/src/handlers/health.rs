//! Health check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness response.
#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub ffmpeg: bool,
    pub generator: bool,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check endpoint: FFmpeg installed and generator reachable.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let ffmpeg = train_media::check_ffmpeg().is_ok();
    let generator = state.generator.health_check().await;

    let (status, label) = if ffmpeg && generator {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(ReadyResponse {
            status: label.to_string(),
            ffmpeg,
            generator,
        }),
    )
}
