//! Combining a batch of generated clips into one video.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::editor::ClipEditor;
use crate::error::{MediaError, MediaResult};
use crate::fs_utils::scoped_temp_dir;

/// Concatenates in-memory clips, in the order given.
///
/// Putting clips in narrative order is the caller's job; batch generation
/// may complete out of order and the combiner never re-sorts.
#[derive(Clone)]
pub struct BatchCombiner {
    editor: Arc<dyn ClipEditor>,
    fps: u32,
    scratch_dir: Option<PathBuf>,
}

impl BatchCombiner {
    pub fn new(editor: Arc<dyn ClipEditor>, fps: u32) -> Self {
        Self {
            editor,
            fps,
            scratch_dir: None,
        }
    }

    /// Create per-operation temp directories inside `dir`.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Write each clip to `chunk{i}.mp4`, join them all, and return the
    /// joined bytes.
    pub async fn combine(&self, clips: &[Vec<u8>]) -> MediaResult<Vec<u8>> {
        if clips.is_empty() {
            return Err(MediaError::InvalidVideo("no clips to combine".to_string()));
        }

        let scratch = scoped_temp_dir(self.scratch_dir.as_deref(), "train-combine-")?;

        let mut chunk_paths = Vec::with_capacity(clips.len());
        for (i, chunk) in clips.iter().enumerate() {
            let path = scratch.path().join(format!("chunk{}.mp4", i));
            tokio::fs::write(&path, chunk).await?;
            chunk_paths.push(path);
        }

        let output = scratch.path().join("output.mp4");
        self.editor.concatenate(&chunk_paths, &output, self.fps).await?;

        let combined = tokio::fs::read(&output).await?;
        info!("Combined {} clips into {} bytes", clips.len(), combined.len());

        Ok(combined)
    }
}
