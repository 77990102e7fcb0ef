//! HTTP endpoint rendering the default narrative as one video.
//!
//! `GET /default?finetune_id=...[&prompt_file=...]` runs a [`BatchJob`] with
//! the requested fine-tune and answers with the combined MP4. This is the
//! service the web front-end calls in hosted scenario mode.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use train_media::{BatchCombiner, EncodingSettings, FfmpegEditor, FfmpegRunner};
use train_ml_client::{GeneratorConfig, HttpVideoGenerator, MlResult, VideoGenerator};

use crate::batch::{frames_for, BatchJob, CLIP_FPS};
use crate::config::HostedConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::output::{checked_finetune_id, output_path, write_video};
use crate::prompts::{load_prompts, DEFAULT_PROMPTS};

/// Builds a generator bound to one fine-tune.
pub trait GeneratorFactory: Send + Sync {
    fn for_finetune(&self, finetune_id: &str) -> MlResult<Arc<dyn VideoGenerator>>;
}

impl GeneratorFactory for GeneratorConfig {
    fn for_finetune(&self, finetune_id: &str) -> MlResult<Arc<dyn VideoGenerator>> {
        let generator = HttpVideoGenerator::new(self.clone().with_finetune_id(finetune_id))?;
        Ok(Arc::new(generator))
    }
}

/// Shared state of the hosted endpoint.
#[derive(Clone)]
pub struct HostedState {
    pub generators: Arc<dyn GeneratorFactory>,
    pub combiner: BatchCombiner,
    pub num_frames: u32,
    pub prompts_dir: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
}

impl HostedState {
    /// Build state around the HTTP generator and FFmpeg.
    pub fn from_config(config: &HostedConfig, generators: GeneratorConfig) -> Self {
        let mut runner = FfmpegRunner::new();
        if let Some(secs) = config.ffmpeg_timeout_secs {
            runner = runner.with_timeout(secs);
        }
        let editor = FfmpegEditor::new(runner, EncodingSettings::default());

        Self {
            generators: Arc::new(generators),
            combiner: BatchCombiner::new(Arc::new(editor), CLIP_FPS),
            num_frames: frames_for(config.clip_seconds, CLIP_FPS),
            prompts_dir: config.prompts_dir.clone(),
            output_root: config.output_root.clone(),
        }
    }

    /// Prompts for one request: a named file from the prompts directory, or
    /// the built-in narrative.
    async fn prompts(&self, prompt_file: Option<&str>) -> WorkerResult<Vec<String>> {
        let Some(name) = prompt_file else {
            return Ok(DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect());
        };
        let dir = self
            .prompts_dir
            .as_deref()
            .ok_or_else(|| WorkerError::invalid_request("prompt files are not enabled"))?;

        load_prompts(&resolve_prompt_file(dir, name)?).await
    }
}

/// `name` must be a bare file name inside `dir`.
fn resolve_prompt_file(dir: &Path, name: &str) -> WorkerResult<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(file)), None) => Ok(dir.join(file)),
        _ => Err(WorkerError::invalid_request(format!(
            "invalid prompt_file: {:?}",
            name
        ))),
    }
}

/// Query of the narrative endpoint.
#[derive(Debug, Deserialize)]
pub struct NarrativeQuery {
    pub finetune_id: String,
    pub prompt_file: Option<String>,
}

/// Generate and combine the narrative, keep a copy under the output root,
/// and return the video.
pub async fn default_narrative(
    State(state): State<HostedState>,
    Query(query): Query<NarrativeQuery>,
) -> WorkerResult<Response> {
    let finetune_id = checked_finetune_id(&query.finetune_id)?;
    let prompts = state.prompts(query.prompt_file.as_deref()).await?;
    info!(finetune_id = %finetune_id, clips = prompts.len(), "Rendering narrative");

    let generator = state.generators.for_finetune(finetune_id)?;
    let job = BatchJob::new(generator, state.combiner.clone(), state.num_frames);
    let video = job.run(&prompts).await?;

    if let Some(root) = &state.output_root {
        let path = output_path(root, finetune_id);
        match write_video(&path, &video).await {
            Ok(()) => info!(path = %path.display(), "Output written"),
            Err(e) => warn!(path = %path.display(), "Failed to keep output copy: {}", e),
        }
    }

    Ok(([(header::CONTENT_TYPE, "video/mp4")], video).into_response())
}

/// Liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Create the hosted endpoint router.
pub fn hosted_router(state: HostedState) -> Router {
    Router::new()
        .route("/default", get(default_narrative))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prompt_file() {
        let dir = Path::new("/srv/prompts");
        assert_eq!(
            resolve_prompt_file(dir, "medical_prompts.txt").unwrap(),
            PathBuf::from("/srv/prompts/medical_prompts.txt")
        );
        for bad in ["", "../secret.txt", "/etc/passwd", "sub/file.txt", "."] {
            assert!(resolve_prompt_file(dir, bad).is_err(), "{:?} accepted", bad);
        }
    }
}
