//! Joining a scenario clip to its continuation.
//!
//! Rather than replaying the whole previous clip, a short anchor is cut from
//! it and placed in front of the continuation. Output length stays bounded
//! as rounds accumulate; the anchor is a snapshot, not the true last frame.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use metrics::histogram;
use tracing::{info, warn};

use crate::editor::ClipEditor;
use crate::error::{MediaError, MediaResult};
use crate::fs_utils::{move_file, scoped_temp_dir};

/// Anchor placement and output frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchSettings {
    /// Where the anchor starts in the first clip
    pub anchor_start_secs: f64,
    /// Anchor length
    pub anchor_duration_secs: f64,
    /// Frame rate of the anchor and the joined output
    pub fps: u32,
}

impl Default for StitchSettings {
    fn default() -> Self {
        Self {
            anchor_start_secs: 4.0,
            anchor_duration_secs: 1.0,
            fps: 15,
        }
    }
}

impl StitchSettings {
    /// Create settings from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            anchor_start_secs: std::env::var("STITCH_ANCHOR_START")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.anchor_start_secs),
            anchor_duration_secs: std::env::var("STITCH_ANCHOR_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.anchor_duration_secs),
            fps: std::env::var("STITCH_FPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fps),
        }
    }

    /// Shortest first clip the anchor can be cut from.
    pub fn min_source_secs(&self) -> f64 {
        self.anchor_start_secs + self.anchor_duration_secs
    }
}

/// Joins an anchor from one clip with another clip.
#[derive(Clone)]
pub struct Stitcher {
    editor: Arc<dyn ClipEditor>,
    settings: StitchSettings,
    scratch_dir: Option<PathBuf>,
}

impl Stitcher {
    pub fn new(editor: Arc<dyn ClipEditor>) -> Self {
        Self {
            editor,
            settings: StitchSettings::default(),
            scratch_dir: None,
        }
    }

    pub fn with_settings(mut self, settings: StitchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Create per-operation temp directories inside `dir`.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn settings(&self) -> &StitchSettings {
        &self.settings
    }

    /// Cut the anchor from `clip_a`, append `clip_b`, and write the result
    /// to `output`, replacing any previous file there.
    ///
    /// The two encoder passes run in sequence. Intermediates live in a temp
    /// directory that is removed on every exit path, and `output` is only
    /// replaced once the join has succeeded.
    pub async fn stitch(
        &self,
        clip_a: &Path,
        clip_b: &Path,
        output: &Path,
    ) -> MediaResult<PathBuf> {
        for clip in [clip_a, clip_b] {
            if !clip.is_file() {
                return Err(MediaError::FileNotFound(clip.to_path_buf()));
            }
        }

        let started = Instant::now();
        let scratch = scoped_temp_dir(self.scratch_dir.as_deref(), "train-stitch-")?;
        let anchor = scratch.path().join("anchor.mp4");
        let joined = scratch.path().join("joined.mp4");

        self.editor
            .extract_segment(
                clip_a,
                &anchor,
                self.settings.anchor_start_secs,
                self.settings.anchor_duration_secs,
                self.settings.fps,
            )
            .await
            .map_err(|e| {
                if let MediaError::SegmentTooShort { .. } = e {
                    warn!(
                        "{} is shorter than {:.1}s, no anchor to cut",
                        clip_a.display(),
                        self.settings.min_source_secs()
                    );
                }
                e
            })?;

        self.editor
            .concatenate(&[anchor, clip_b.to_path_buf()], &joined, self.settings.fps)
            .await?;

        move_file(&joined, output).await?;

        histogram!("train_stitch_duration_seconds").record(started.elapsed().as_secs_f64());
        info!(
            "Stitched {} + {} -> {} in {:.1}s",
            clip_a.display(),
            clip_b.display(),
            output.display(),
            started.elapsed().as_secs_f64()
        );

        Ok(output.to_path_buf())
    }
}
