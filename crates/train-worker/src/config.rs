//! Hosted narrative server configuration.

use std::path::PathBuf;

/// Configuration for the hosted narrative endpoint.
#[derive(Debug, Clone)]
pub struct HostedConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Seconds per generated clip
    pub clip_seconds: u32,
    /// Directory `prompt_file` names are resolved in; `None` disables them
    pub prompts_dir: Option<PathBuf>,
    /// Root for the per-finetune copy of each response; `None` skips it
    pub output_root: Option<PathBuf>,
    /// FFmpeg timeout; `None` waits indefinitely
    pub ffmpeg_timeout_secs: Option<u64>,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8002,
            clip_seconds: 10,
            prompts_dir: None,
            output_root: Some(PathBuf::from("/tmp")),
            ffmpeg_timeout_secs: None,
        }
    }
}

impl HostedConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOSTED_HOST").unwrap_or(defaults.host),
            port: std::env::var("HOSTED_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            clip_seconds: std::env::var("CLIP_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.clip_seconds),
            prompts_dir: std::env::var("PROMPTS_DIR").ok().map(PathBuf::from),
            output_root: match std::env::var("OUTPUT_ROOT") {
                Ok(s) if s.is_empty() => None,
                Ok(s) => Some(PathBuf::from(s)),
                Err(_) => defaults.output_root,
            },
            ffmpeg_timeout_secs: std::env::var("FFMPEG_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}
