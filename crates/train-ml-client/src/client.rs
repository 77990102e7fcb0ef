//! Generation service HTTP client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::{Client, Response};
use tracing::{debug, info, warn};

use crate::error::{MlError, MlResult};
use crate::generator::VideoGenerator;
use crate::types::{GenerationRequest, HealthResponse};

/// Fine-tune used when `FINETUNE_ID` is unset.
pub const DEFAULT_FINETUNE_ID: &str = "nova_2025-11-08 21:12:58.543332";

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the direct generation service
    pub generator_url: String,
    /// Full URL of the hosted default-narrative endpoint
    pub hosted_url: String,
    /// Fine-tuned model identifier sent with every request
    pub finetune_id: String,
    /// Overall request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generator_url: "http://localhost:8001".to_string(),
            hosted_url: "http://localhost:8002/default".to_string(),
            finetune_id: DEFAULT_FINETUNE_ID.to_string(),
            timeout: None,
        }
    }
}

impl GeneratorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            generator_url: std::env::var("GENERATOR_URL").unwrap_or(defaults.generator_url),
            hosted_url: std::env::var("HOSTED_GENERATOR_URL").unwrap_or(defaults.hosted_url),
            finetune_id: std::env::var("FINETUNE_ID").unwrap_or(defaults.finetune_id),
            timeout: std::env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }

    pub fn with_finetune_id(mut self, finetune_id: impl Into<String>) -> Self {
        self.finetune_id = finetune_id.into();
        self
    }
}

/// [`VideoGenerator`] speaking HTTP to the generation service.
pub struct HttpVideoGenerator {
    http: Client,
    config: GeneratorConfig,
}

impl HttpVideoGenerator {
    /// Create a new client.
    pub fn new(config: GeneratorConfig) -> MlResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(MlError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> MlResult<Self> {
        Self::new(GeneratorConfig::from_env())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn run_url(&self) -> String {
        format!("{}/run", self.config.generator_url.trim_end_matches('/'))
    }

    /// Turn a response into clip bytes, rejecting error statuses and empty bodies.
    async fn clip_bytes(response: Response) -> MlResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MlError::request_failed(format!(
                "Generation service returned {}: {}",
                status, body
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(MlError::InvalidResponse(
                "Generation service returned an empty body".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }

    fn record(endpoint: &'static str, started: Instant, result: &MlResult<Vec<u8>>) {
        let status = if result.is_ok() { "success" } else { "error" };
        counter!("train_generation_requests_total", "endpoint" => endpoint, "status" => status)
            .increment(1);
        histogram!("train_generation_duration_seconds", "endpoint" => endpoint)
            .record(started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl VideoGenerator for HttpVideoGenerator {
    async fn generate(&self, prompt: &str, num_frames: u32) -> MlResult<Vec<u8>> {
        let url = self.run_url();
        let request = GenerationRequest {
            finetune_id: self.config.finetune_id.clone(),
            prompt: prompt.to_string(),
            num_frames,
        };

        debug!(num_frames, "Sending generation request to {}", url);

        let started = Instant::now();
        let result = async {
            let response = self.http.post(&url).json(&request).send().await?;
            Self::clip_bytes(response).await
        }
        .await;
        Self::record("run", started, &result);

        if let Ok(bytes) = &result {
            info!(
                num_frames,
                size = bytes.len(),
                "Generated clip in {:.1}s",
                started.elapsed().as_secs_f64()
            );
        }
        result
    }

    async fn generate_default(&self) -> MlResult<Vec<u8>> {
        debug!("Requesting default narrative from {}", self.config.hosted_url);

        let started = Instant::now();
        let result = async {
            let response = self
                .http
                .get(&self.config.hosted_url)
                .query(&[("finetune_id", self.config.finetune_id.as_str())])
                .send()
                .await?;
            Self::clip_bytes(response).await
        }
        .await;
        Self::record("hosted", started, &result);

        if let Ok(bytes) = &result {
            info!(
                size = bytes.len(),
                "Received default narrative in {:.1}s",
                started.elapsed().as_secs_f64()
            );
        }
        result
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.config.generator_url.trim_end_matches('/'));

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<HealthResponse>().await {
                    Ok(health) => health.status == "healthy" || health.status == "ok",
                    // Any 2xx counts when the body is not the usual shape
                    Err(_) => true,
                }
            }
            Ok(response) => {
                warn!("Generation service health check failed: {}", response.status());
                false
            }
            Err(e) => {
                warn!("Generation service health check error: {}", e);
                false
            }
        }
    }
}
