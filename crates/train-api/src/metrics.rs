//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "train_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "train_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "train_http_requests_in_flight";

    // Pipeline metrics
    pub const SCENARIOS_GENERATED_TOTAL: &str = "train_scenarios_generated_total";
    pub const ACTIONS_STITCHED_TOTAL: &str = "train_actions_stitched_total";
    pub const ENCODER_FAILURES_TOTAL: &str = "train_encoder_failures_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a stored scenario clip.
pub fn record_scenario_generated(source: &str) {
    let labels = [("source", source.to_string())];
    counter!(names::SCENARIOS_GENERATED_TOTAL, &labels).increment(1);
}

/// Record a completed continuation + stitch.
pub fn record_action_stitched() {
    counter!(names::ACTIONS_STITCHED_TOTAL).increment(1);
}

/// Record an encoder rejection.
pub fn record_encoder_failure() {
    counter!(names::ENCODER_FAILURES_TOTAL).increment(1);
}

/// Metrics middleware for HTTP requests.
///
/// Labels by route template so unknown paths cannot blow up cardinality.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
