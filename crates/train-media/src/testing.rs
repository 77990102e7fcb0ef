//! In-memory [`ClipEditor`] for unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::editor::ClipEditor;
use crate::error::{MediaError, MediaResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Extract {
        input: PathBuf,
        output: PathBuf,
        start_secs: f64,
        duration_secs: f64,
        fps: u32,
    },
    Concat {
        inputs: Vec<PathBuf>,
        output: PathBuf,
        fps: u32,
    },
}

/// Records every call. Extraction keeps the first byte of the input;
/// concatenation writes the inputs' bytes back to back.
#[derive(Debug, Default)]
pub struct FakeEditor {
    calls: Mutex<Vec<Call>>,
    fail_concat: bool,
    short_source: bool,
}

impl FakeEditor {
    /// Concatenation leaves a partial file behind and fails.
    pub fn failing_concat() -> Self {
        Self {
            fail_concat: true,
            ..Default::default()
        }
    }

    /// Extraction behaves as if the input ended before the segment.
    pub fn short_source() -> Self {
        Self {
            short_source: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipEditor for FakeEditor {
    async fn extract_segment(
        &self,
        input: &Path,
        output: &Path,
        start_secs: f64,
        duration_secs: f64,
        fps: u32,
    ) -> MediaResult<()> {
        self.calls.lock().unwrap().push(Call::Extract {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            start_secs,
            duration_secs,
            fps,
        });

        if self.short_source {
            return Err(MediaError::SegmentTooShort {
                requested: duration_secs,
                produced: 0.0,
            });
        }

        let bytes = tokio::fs::read(input).await?;
        tokio::fs::write(output, &bytes[..bytes.len().min(1)]).await?;
        Ok(())
    }

    async fn concatenate(&self, inputs: &[PathBuf], output: &Path, fps: u32) -> MediaResult<()> {
        self.calls.lock().unwrap().push(Call::Concat {
            inputs: inputs.to_vec(),
            output: output.to_path_buf(),
            fps,
        });

        if self.fail_concat {
            tokio::fs::write(output, b"partial").await?;
            return Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                Some("Invalid data found when processing input".to_string()),
                Some(1),
            ));
        }

        let mut joined = Vec::new();
        for input in inputs {
            joined.extend(tokio::fs::read(input).await?);
        }
        tokio::fs::write(output, joined).await?;
        Ok(())
    }
}
