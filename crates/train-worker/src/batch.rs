//! Concurrent clip generation joined in prompt order.

use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info};

use train_media::BatchCombiner;
use train_ml_client::VideoGenerator;

use crate::error::{WorkerError, WorkerResult};

/// Output frame rate of every generated clip.
pub const CLIP_FPS: u32 = 15;

/// Frames needed for a clip of `clip_seconds` at `fps`.
pub fn frames_for(clip_seconds: u32, fps: u32) -> u32 {
    clip_seconds.saturating_mul(fps)
}

/// Generates one clip per prompt and combines them into one video.
pub struct BatchJob {
    generator: Arc<dyn VideoGenerator>,
    combiner: BatchCombiner,
    num_frames: u32,
}

impl BatchJob {
    pub fn new(
        generator: Arc<dyn VideoGenerator>,
        combiner: BatchCombiner,
        num_frames: u32,
    ) -> Self {
        Self {
            generator,
            combiner,
            num_frames,
        }
    }

    /// Generate every prompt concurrently, then combine in prompt order.
    ///
    /// Clips arrive in completion order; each carries its prompt index and
    /// the set is re-sorted after the last one lands. The first failed
    /// generation fails the job and drops the rest.
    pub async fn run(&self, prompts: &[String]) -> WorkerResult<Vec<u8>> {
        if prompts.is_empty() {
            return Err(WorkerError::invalid_prompts("no prompts to generate"));
        }

        let started = Instant::now();
        info!(
            clips = prompts.len(),
            num_frames = self.num_frames,
            "Generating batch"
        );

        let mut pending: FuturesUnordered<_> = prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| {
                let generator = Arc::clone(&self.generator);
                let num_frames = self.num_frames;
                async move {
                    let result = generator.generate(prompt, num_frames).await;
                    (index, result)
                }
            })
            .collect();

        let mut clips = Vec::with_capacity(prompts.len());
        while let Some((index, result)) = pending.next().await {
            let bytes = result.map_err(|source| WorkerError::Generation { index, source })?;
            debug!(index, size = bytes.len(), "Clip generated");
            clips.push((index, bytes));
        }

        clips.sort_by_key(|(index, _)| *index);
        let ordered: Vec<Vec<u8>> = clips.into_iter().map(|(_, bytes)| bytes).collect();

        let video = self.combiner.combine(&ordered).await?;
        info!(
            size = video.len(),
            "Batch combined in {:.1}s",
            started.elapsed().as_secs_f64()
        );

        Ok(video)
    }
}
