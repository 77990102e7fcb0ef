//! Where combined narratives are written.

use std::path::{Path, PathBuf};

use crate::error::{WorkerError, WorkerResult};

/// `{root}/{finetune_id}/video.mp4`.
pub fn output_path(root: &Path, finetune_id: &str) -> PathBuf {
    root.join(finetune_id).join("video.mp4")
}

/// Reject IDs that would escape the output root when used as a directory.
pub fn checked_finetune_id(finetune_id: &str) -> WorkerResult<&str> {
    let id = finetune_id.trim();
    let escapes = id.contains(['/', '\\', '\0']) || id == "." || id == "..";
    if id.is_empty() || escapes {
        return Err(WorkerError::invalid_request(format!(
            "invalid finetune_id: {:?}",
            finetune_id
        )));
    }
    Ok(id)
}

/// Write `video` to `path`, creating parent directories.
pub async fn write_video(path: &Path, video: &[u8]) -> WorkerResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, video).await?;
    Ok(())
}
