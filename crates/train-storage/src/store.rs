//! Session directories and clip slots.
//!
//! Layout:
//!
//! ```text
//! {data_dir}/sessions/{session_id}/
//! ├── medical_prompts.txt
//! ├── scenario.mp4
//! ├── continuation.mp4
//! ├── final_video.mp4
//! └── tmp/            (scratch space for in-flight encodes)
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use train_models::{ClipRole, SessionId};

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};

/// Name of the prompt slot inside a session directory.
pub const PROMPT_FILE_NAME: &str = "medical_prompts.txt";

const SESSIONS_DIR: &str = "sessions";
const SCRATCH_DIR: &str = "tmp";

/// Root of all session directories.
#[derive(Debug, Clone)]
pub struct ClipStore {
    root: PathBuf,
}

impl ClipStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: data_dir.into().join(SESSIONS_DIR),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.data_dir)
    }

    /// Directory containing every session directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handle to one session's slots. Nothing is created until first write.
    pub fn session(&self, id: &SessionId) -> SessionStore {
        SessionStore {
            id: *id,
            dir: self.root.join(id.to_string()),
        }
    }

    /// Resolve a session from an untrusted identifier, such as a cookie value.
    pub fn open_session(&self, raw: &str) -> StorageResult<SessionStore> {
        let id: SessionId = raw
            .trim()
            .parse()
            .map_err(|_| StorageError::invalid_session(format!("malformed session id: {}", raw)))?;
        Ok(self.session(&id))
    }
}

/// One session's prompt and clip slots.
#[derive(Debug, Clone)]
pub struct SessionStore {
    id: SessionId,
    dir: PathBuf,
}

impl SessionStore {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prompt_path(&self) -> PathBuf {
        self.dir.join(PROMPT_FILE_NAME)
    }

    pub fn clip_path(&self, role: ClipRole) -> PathBuf {
        self.dir.join(role.file_name())
    }

    /// Scratch directory for temporary files belonging to this session.
    ///
    /// Kept inside the session directory so finished outputs can be renamed
    /// into their slot without crossing filesystems.
    pub async fn scratch_dir(&self) -> StorageResult<PathBuf> {
        let scratch = self.dir.join(SCRATCH_DIR);
        tokio::fs::create_dir_all(&scratch).await?;
        Ok(scratch)
    }

    /// Store the prompt, replacing any previous one.
    pub async fn write_prompt(&self, prompt: &str) -> StorageResult<()> {
        self.write_atomic(&self.prompt_path(), prompt.as_bytes()).await?;
        debug!(session = %self.id, "Stored prompt");
        Ok(())
    }

    /// Stored prompt, or `None` if this session never stored one.
    pub async fn read_prompt(&self) -> StorageResult<Option<String>> {
        match tokio::fs::read_to_string(self.prompt_path()).await {
            Ok(prompt) => Ok(Some(prompt)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store a clip in its role slot, replacing any previous clip.
    pub async fn write_clip(&self, role: ClipRole, bytes: &[u8]) -> StorageResult<PathBuf> {
        let path = self.clip_path(role);
        self.write_atomic(&path, bytes).await?;

        info!(
            session = %self.id,
            role = %role,
            size = bytes.len(),
            "Stored clip"
        );

        Ok(path)
    }

    /// Read a stored clip.
    pub async fn read_clip(&self, role: ClipRole) -> StorageResult<Vec<u8>> {
        match tokio::fs::read(self.clip_path(role)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::MissingClip(role))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn has_clip(&self, role: ClipRole) -> bool {
        tokio::fs::try_exists(self.clip_path(role)).await.unwrap_or(false)
    }

    /// Path of a stored clip, failing if the slot is empty.
    pub async fn require_clip(&self, role: ClipRole) -> StorageResult<PathBuf> {
        if self.has_clip(role).await {
            Ok(self.clip_path(role))
        } else {
            Err(StorageError::MissingClip(role))
        }
    }

    /// Write to a temp file first, then rename over the target.
    async fn write_atomic(&self, path: &Path, data: &[u8]) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}
