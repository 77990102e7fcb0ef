//! Clip playback.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use train_models::ClipRole;

use crate::error::{ApiError, ApiResult};
use crate::session::existing_session;
use crate::state::AppState;

/// The session's scenario clip.
pub async fn scenario_video(State(state): State<AppState>, jar: CookieJar) -> ApiResult<Response> {
    serve_clip(&state, &jar, ClipRole::Scenario).await
}

/// The session's stitched clip.
pub async fn final_video(State(state): State<AppState>, jar: CookieJar) -> ApiResult<Response> {
    serve_clip(&state, &jar, ClipRole::Final).await
}

async fn serve_clip(state: &AppState, jar: &CookieJar, role: ClipRole) -> ApiResult<Response> {
    let session = existing_session(&state.store, jar)
        .ok_or_else(|| ApiError::not_found(format!("no {} video for this session", role)))?;

    let bytes = session.read_clip(role).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "video/mp4"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    )
        .into_response())
}
