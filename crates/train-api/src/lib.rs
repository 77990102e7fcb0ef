//! Axum web front-end for CPR scenario training videos.
//!
//! This crate provides:
//! - The selection form, scenario and action pages, and clip playback
//! - Per-session clip storage keyed by a cookie
//! - Health, readiness, and Prometheus endpoints
//! - Security headers, request IDs, and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

pub use config::{ApiConfig, ScenarioSource};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use session::SESSION_COOKIE;
pub use state::AppState;
