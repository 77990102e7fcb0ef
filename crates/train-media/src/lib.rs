//! FFmpeg CLI wrapper for the clip pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and a runner with timeouts
//! - Progress parsing from `-progress pipe:2`
//! - The [`ClipEditor`] seam over segment extraction and concatenation
//! - [`Stitcher`] (anchor from one clip plus another clip) and
//!   [`BatchCombiner`] (ordered join of in-memory clips)
//! - FFprobe inspection

pub mod combine;
pub mod command;
pub mod editor;
pub mod error;
pub mod fs_utils;
pub mod probe;
pub mod progress;
pub mod stitch;

#[cfg(test)]
pub(crate) mod testing;

pub use combine::BatchCombiner;
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use editor::{ClipEditor, EncodingSettings, FfmpegEditor};
pub use error::{MediaError, MediaResult};
pub use probe::{probe_video, VideoInfo};
pub use progress::FfmpegProgress;
pub use stitch::{StitchSettings, Stitcher};
