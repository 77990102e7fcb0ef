//! Client for the remote video generation service.
//!
//! The service turns a text prompt into an encoded video clip. Two entry
//! points exist: direct generation from a prompt, and a hosted endpoint that
//! renders its own default narrative. Both are exposed through the
//! [`VideoGenerator`] trait so callers can substitute a fake in tests.

pub mod client;
pub mod error;
pub mod generator;
pub mod types;

pub use client::{GeneratorConfig, HttpVideoGenerator, DEFAULT_FINETUNE_ID};
pub use error::{MlError, MlResult};
pub use generator::VideoGenerator;
pub use types::{GenerationRequest, HealthResponse};
