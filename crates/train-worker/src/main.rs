//! Batch narrative generator binary.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use train_media::{probe_video, BatchCombiner, FfmpegEditor};
use train_ml_client::{GeneratorConfig, HttpVideoGenerator};
use train_worker::logging::init_tracing;
use train_worker::{
    checked_finetune_id, frames_for, load_prompts, output_path, write_video, BatchJob, CLIP_FPS,
    DEFAULT_PROMPTS,
};

#[derive(Parser, Debug)]
#[command(name = "train-batch")]
#[command(
    about = "Generate a narrative of CPR clips and combine them into one video",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Fine-tuned model to render with (defaults to FINETUNE_ID)
    #[arg(long)]
    finetune_id: Option<String>,

    /// File with one prompt per line; the built-in narrative otherwise
    #[arg(long)]
    prompt_file: Option<PathBuf>,

    /// Seconds per clip
    #[arg(long, default_value_t = 10)]
    clip_seconds: u32,

    /// Where to write the combined video [default: /tmp/{finetune_id}/video.mp4]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut config = GeneratorConfig::from_env();
    if let Some(id) = args.finetune_id {
        config = config.with_finetune_id(id);
    }
    let finetune_id = config.finetune_id.clone();

    let prompts = match &args.prompt_file {
        Some(path) => load_prompts(path)
            .await
            .with_context(|| format!("loading prompts from {}", path.display()))?,
        None => DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
    };
    info!(finetune_id = %finetune_id, clips = prompts.len(), "Starting batch");

    let generator = HttpVideoGenerator::new(config).context("building generation client")?;
    let combiner = BatchCombiner::new(Arc::new(FfmpegEditor::default()), CLIP_FPS);
    let job = BatchJob::new(
        Arc::new(generator),
        combiner,
        frames_for(args.clip_seconds, CLIP_FPS),
    );

    let video = job.run(&prompts).await.context("batch generation failed")?;

    let output = match args.output {
        Some(path) => path,
        None => output_path(
            &PathBuf::from("/tmp"),
            checked_finetune_id(&finetune_id).context("choosing output path")?,
        ),
    };
    write_video(&output, &video)
        .await
        .with_context(|| format!("writing {}", output.display()))?;

    let info = probe_video(&output).await.context("probing combined video")?;
    info!(
        path = %output.display(),
        duration_secs = info.duration,
        size = info.size,
        "Output written"
    );

    Ok(())
}
