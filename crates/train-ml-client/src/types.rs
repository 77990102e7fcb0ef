//! Generation service request/response types.

use serde::{Deserialize, Serialize};

/// Body of a direct generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fine-tuned model to render with
    pub finetune_id: String,
    /// Text prompt
    pub prompt: String,
    /// Number of frames to render
    pub num_frames: u32,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
