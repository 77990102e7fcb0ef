//! API configuration.

use std::fmt;
use std::str::FromStr;

/// Where the scenario clip comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioSource {
    /// Render the built scenario prompt directly
    #[default]
    Prompted,
    /// Fetch the hosted default narrative; the built prompt is only stored
    Hosted,
}

impl ScenarioSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioSource::Prompted => "prompted",
            ScenarioSource::Hosted => "hosted",
        }
    }
}

impl fmt::Display for ScenarioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompted" => Ok(ScenarioSource::Prompted),
            "hosted" => Ok(ScenarioSource::Hosted),
            other => Err(format!("unknown scenario source: {}", other)),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// Scenario generation path
    pub scenario_source: ScenarioSource,
    /// Frames requested for a scenario clip
    pub scenario_frames: u32,
    /// Frames requested for a continuation clip
    pub continuation_frames: u32,
    /// FFmpeg timeout; `None` waits indefinitely
    pub ffmpeg_timeout_secs: Option<u64>,
    /// Whether to serve /metrics
    pub metrics_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 64 * 1024, // forms only
            environment: "development".to_string(),
            scenario_source: ScenarioSource::default(),
            scenario_frames: 150,
            continuation_frames: 75,
            ffmpeg_timeout_secs: None,
            metrics_enabled: true,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            scenario_source: std::env::var("SCENARIO_SOURCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.scenario_source),
            scenario_frames: std::env::var("SCENARIO_FRAMES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.scenario_frames),
            continuation_frames: std::env::var("CONTINUATION_FRAMES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.continuation_frames),
            ffmpeg_timeout_secs: std::env::var("FFMPEG_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
            metrics_enabled: std::env::var("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.scenario_source, ScenarioSource::Prompted);
        assert_eq!(config.scenario_frames, 150);
        assert_eq!(config.continuation_frames, 75);
        assert!(config.ffmpeg_timeout_secs.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_is_production_ignores_case() {
        for environment in ["production", "Production", "PRODUCTION"] {
            let config = ApiConfig {
                environment: environment.to_string(),
                ..Default::default()
            };
            assert!(config.is_production(), "{}", environment);
        }
    }

    #[test]
    fn test_scenario_source_parse() {
        assert_eq!(
            "Hosted".parse::<ScenarioSource>().unwrap(),
            ScenarioSource::Hosted
        );
        assert_eq!(
            " prompted ".parse::<ScenarioSource>().unwrap(),
            ScenarioSource::Prompted
        );
        assert!("modal".parse::<ScenarioSource>().is_err());
    }
}
