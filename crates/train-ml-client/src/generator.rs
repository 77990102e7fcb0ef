//! The generation seam.

use async_trait::async_trait;

use crate::error::MlResult;

/// Produces encoded video clips from prompts.
///
/// Implementations return the raw container bytes exactly as the service
/// sent them. Nothing is retried; a failure surfaces to the caller.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Render `prompt` as a clip of `num_frames` frames.
    async fn generate(&self, prompt: &str, num_frames: u32) -> MlResult<Vec<u8>>;

    /// Render the service's built-in default narrative. Takes no prompt.
    async fn generate_default(&self) -> MlResult<Vec<u8>>;

    /// Whether the service is reachable. Never fails.
    async fn health_check(&self) -> bool {
        true
    }
}
