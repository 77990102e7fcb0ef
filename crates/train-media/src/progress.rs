//! FFmpeg progress parsing.

use serde::{Deserialize, Serialize};

/// Keys FFmpeg emits on `-progress` output.
const PROGRESS_KEYS: &[&str] = &[
    "frame",
    "fps",
    "stream_0_0_q",
    "bitrate",
    "total_size",
    "out_time_us",
    "out_time_ms",
    "out_time",
    "dup_frames",
    "drop_frames",
    "speed",
    "progress",
];

/// Progress information from FFmpeg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FfmpegProgress {
    /// Current frame number
    pub frame: u64,
    /// Current FPS
    pub fps: f64,
    /// Output time in microseconds
    pub out_time_us: i64,
    /// Output time as string (HH:MM:SS.microseconds)
    pub out_time: String,
    /// Encoding speed (e.g., 1.5 = 1.5x realtime)
    pub speed: f64,
    /// Whether encoding is complete
    pub is_complete: bool,
}

impl FfmpegProgress {
    /// Encoded output length in seconds.
    pub fn out_time_secs(&self) -> f64 {
        self.out_time_us.max(0) as f64 / 1_000_000.0
    }
}

/// Whether a stderr line belongs to the `-progress pipe:2` stream.
pub(crate) fn is_progress_line(line: &str) -> bool {
    line.trim()
        .split_once('=')
        .map(|(key, _)| PROGRESS_KEYS.contains(&key) || key.starts_with("stream_"))
        .unwrap_or(false)
}

/// Parse a progress line from FFmpeg's -progress output.
///
/// Returns a snapshot at the end of each progress block.
pub(crate) fn parse_progress_line(
    line: &str,
    current: &mut FfmpegProgress,
) -> Option<FfmpegProgress> {
    let (key, value) = line.trim().split_once('=')?;

    match key {
        // Despite the name, FFmpeg reports out_time_ms in microseconds too
        "out_time_us" | "out_time_ms" => {
            if let Ok(us) = value.parse::<i64>() {
                current.out_time_us = us;
            }
        }
        "out_time" => {
            current.out_time = value.to_string();
        }
        "frame" => {
            if let Ok(frame) = value.parse() {
                current.frame = frame;
            }
        }
        "fps" => {
            if let Ok(fps) = value.parse() {
                current.fps = fps;
            }
        }
        "speed" => {
            // Format: "1.5x" or "N/A"
            if let Some(speed) = value.strip_suffix('x').and_then(|s| s.trim().parse().ok()) {
                current.speed = speed;
            }
        }
        "progress" => {
            if value == "end" {
                current.is_complete = true;
            }
            return Some(current.clone());
        }
        _ => {}
    }

    None
}
