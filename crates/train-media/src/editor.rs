//! Narrow interface over the external media tool.
//!
//! The stitcher and combiner only ever need two operations: cut a segment
//! out of a clip, and join clips end to end. [`ClipEditor`] exposes exactly
//! those; [`FfmpegEditor`] implements them with the FFmpeg CLI.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Segment extraction and concatenation.
#[async_trait]
pub trait ClipEditor: Send + Sync {
    /// Re-encode `duration_secs` of `input` starting at `start_secs` into
    /// `output` at `fps`.
    async fn extract_segment(
        &self,
        input: &Path,
        output: &Path,
        start_secs: f64,
        duration_secs: f64,
        fps: u32,
    ) -> MediaResult<()>;

    /// Join the video tracks of `inputs`, in order, into `output` at `fps`.
    async fn concatenate(&self, inputs: &[PathBuf], output: &Path, fps: u32) -> MediaResult<()>;
}

/// Codec choices for every re-encode.
#[derive(Debug, Clone)]
pub struct EncodingSettings {
    pub video_codec: String,
    pub audio_codec: String,
    pub pixel_format: String,
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            // Browsers refuse 4:4:4 H.264
            pixel_format: "yuv420p".to_string(),
        }
    }
}

/// [`ClipEditor`] backed by the FFmpeg CLI.
#[derive(Debug, Clone, Default)]
pub struct FfmpegEditor {
    runner: FfmpegRunner,
    encoding: EncodingSettings,
}

impl FfmpegEditor {
    pub fn new(runner: FfmpegRunner, encoding: EncodingSettings) -> Self {
        Self { runner, encoding }
    }

    fn encode(&self, cmd: FfmpegCommand) -> FfmpegCommand {
        cmd.video_codec(&self.encoding.video_codec)
            .audio_codec(&self.encoding.audio_codec)
            .pixel_format(&self.encoding.pixel_format)
            .output_args(["-movflags", "+faststart"])
    }
}

#[async_trait]
impl ClipEditor for FfmpegEditor {
    async fn extract_segment(
        &self,
        input: &Path,
        output: &Path,
        start_secs: f64,
        duration_secs: f64,
        fps: u32,
    ) -> MediaResult<()> {
        ensure_exists(input)?;

        info!(
            "Extracting segment: {} -> {} (start: {:.2}s, duration: {:.2}s, fps: {})",
            input.display(),
            output.display(),
            start_secs,
            duration_secs,
            fps
        );

        let cmd = FfmpegCommand::new(input, output)
            .seek(start_secs)
            .duration(duration_secs)
            .frame_rate(fps);
        let progress = self.runner.run(&self.encode(cmd)).await?;

        // FFmpeg exits 0 when seeking past the end; it just writes nothing
        let produced = progress.out_time_secs();
        if produced + segment_tolerance(fps) < duration_secs {
            return Err(MediaError::SegmentTooShort {
                requested: duration_secs,
                produced,
            });
        }

        Ok(())
    }

    async fn concatenate(&self, inputs: &[PathBuf], output: &Path, fps: u32) -> MediaResult<()> {
        let (first, rest) = inputs
            .split_first()
            .ok_or_else(|| MediaError::InvalidVideo("no clips to concatenate".to_string()))?;
        for input in inputs {
            ensure_exists(input)?;
        }

        info!(
            "Concatenating {} clips -> {} (fps: {})",
            inputs.len(),
            output.display(),
            fps
        );

        let cmd = rest
            .iter()
            .fold(FfmpegCommand::new(first, output), |cmd, input| cmd.add_input(input))
            .filter_complex(concat_filter(inputs.len(), fps))
            .map("[outv]")
            .frame_rate(fps);
        self.runner.run(&self.encode(cmd)).await?;

        Ok(())
    }
}

/// Two frames of slack: FFmpeg reports the timestamp of the last frame,
/// not the end of its display interval.
fn segment_tolerance(fps: u32) -> f64 {
    2.0 / f64::from(fps.max(1))
}

/// Filter graph normalizing each input's frame rate before a video-only
/// concat, e.g. `[0:v]fps=15,setsar=1[v0];[1:v]fps=15,setsar=1[v1];[v0][v1]concat=n=2:v=1:a=0[outv]`.
fn concat_filter(count: usize, fps: u32) -> String {
    let mut graph = String::new();
    for i in 0..count {
        graph.push_str(&format!("[{i}:v]fps={fps},setsar=1[v{i}];"));
    }
    for i in 0..count {
        graph.push_str(&format!("[v{i}]"));
    }
    graph.push_str(&format!("concat=n={count}:v=1:a=0[outv]"));
    graph
}

fn ensure_exists(path: &Path) -> MediaResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(MediaError::FileNotFound(path.to_path_buf()))
    }
}
