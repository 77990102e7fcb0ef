//! Scratch directories and moving finished outputs into place.

use std::path::Path;

use tempfile::TempDir;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::MediaResult;

/// Create a temporary working directory for one operation.
///
/// The directory and everything in it is removed when the returned guard
/// drops, whichever way the operation exits. With `parent` set the directory
/// is created inside it (keeping intermediates on the same filesystem as the
/// final outputs), otherwise in the system temp dir.
pub fn scoped_temp_dir(parent: Option<&Path>, prefix: &str) -> MediaResult<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(prefix);

    let dir = match parent {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            builder.tempdir_in(parent)?
        }
        None => builder.tempdir()?,
    };

    debug!("Created scratch directory: {}", dir.path().display());
    Ok(dir)
}

/// Move a finished file to `dst`, replacing whatever was there.
///
/// Tries a rename first. Across filesystems (EXDEV) it copies to a sibling
/// of `dst` and renames that, so readers of `dst` never see a partial file.
pub async fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> MediaResult<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).await?;
    }

    match fs::rename(src, dst).await {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device_error(&e) => {
            debug!(
                "Cross-device rename, copying instead: {} -> {}",
                src.display(),
                dst.display()
            );
            copy_then_rename(src, dst).await
        }
        Err(e) => Err(e.into()),
    }
}

/// EXDEV is 18 on Linux and macOS.
fn is_cross_device_error(e: &std::io::Error) -> bool {
    e.raw_os_error() == Some(18)
}

async fn copy_then_rename(src: &Path, dst: &Path) -> MediaResult<()> {
    let staging = dst.with_extension("partial");

    fs::copy(src, &staging).await?;
    if let Err(e) = fs::rename(&staging, dst).await {
        let _ = fs::remove_file(&staging).await;
        return Err(e.into());
    }

    if let Err(e) = fs::remove_file(src).await {
        warn!("Failed to remove {} after copy: {}", src.display(), e);
    }

    Ok(())
}
