//! Application state.

use std::sync::Arc;

use train_media::{
    ClipEditor, EncodingSettings, FfmpegEditor, FfmpegRunner, StitchSettings, Stitcher,
};
use train_ml_client::{HttpVideoGenerator, VideoGenerator};
use train_storage::{ClipStore, SessionLocks, StoreConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: ClipStore,
    pub locks: SessionLocks,
    pub generator: Arc<dyn VideoGenerator>,
    pub stitcher: Stitcher,
}

impl AppState {
    /// Assemble state from already-built parts.
    pub fn new(
        config: ApiConfig,
        store: ClipStore,
        generator: Arc<dyn VideoGenerator>,
        editor: Arc<dyn ClipEditor>,
    ) -> Self {
        Self {
            config,
            store,
            locks: SessionLocks::new(),
            generator,
            stitcher: Stitcher::new(editor),
        }
    }

    /// Build state with the HTTP generator and FFmpeg editor, configured
    /// from the environment.
    pub fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store = ClipStore::from_config(&StoreConfig::from_env());
        let generator = HttpVideoGenerator::from_env()?;

        let mut runner = FfmpegRunner::new();
        if let Some(secs) = config.ffmpeg_timeout_secs {
            runner = runner.with_timeout(secs);
        }
        let editor = FfmpegEditor::new(runner, EncodingSettings::default());

        let state = Self::new(config, store, Arc::new(generator), Arc::new(editor));
        Ok(state.with_stitch_settings(StitchSettings::from_env()))
    }

    pub fn with_stitch_settings(mut self, settings: StitchSettings) -> Self {
        self.stitcher = self.stitcher.with_settings(settings);
        self
    }
}
