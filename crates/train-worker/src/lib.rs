//! Batch narrative generation.
//!
//! This crate provides:
//! - The default ten-step CPR narrative and prompt file loading
//! - [`BatchJob`]: concurrent generation of one clip per prompt, joined and
//!   combined in prompt order
//! - The `train-batch` command-line entry point
//! - The `train-hosted` HTTP endpoint serving the narrative as one video

pub mod batch;
pub mod config;
pub mod error;
pub mod hosted;
pub mod logging;
pub mod output;
pub mod prompts;

pub use batch::{frames_for, BatchJob, CLIP_FPS};
pub use config::HostedConfig;
pub use error::{WorkerError, WorkerResult};
pub use hosted::{hosted_router, GeneratorFactory, HostedState};
pub use output::{checked_finetune_id, output_path, write_video};
pub use prompts::{load_prompts, DEFAULT_PROMPTS};
