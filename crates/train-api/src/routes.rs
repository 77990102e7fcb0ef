//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    final_video, generate_scenario, generate_user_action, health, index, ready, scenario_video,
};
use crate::metrics::metrics_middleware;
use crate::middleware::{
    cors_layer, hide_internal_errors, make_request_span, request_id, request_logging,
    security_headers,
};
use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let page_routes = Router::new()
        .route("/", get(index))
        .route("/generate_scenario", post(generate_scenario))
        .route("/scenario_video", get(scenario_video))
        .route("/generate_user_action", post(generate_user_action))
        .route("/final_video", get(final_video));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn_with_state(state.clone(), hide_internal_errors))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        // Outside request_id so the span is current when the ID is recorded
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
