//! Per-session request serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;
use train_models::SessionId;

/// Registry of one async lock per session.
///
/// Holding the guard for a session excludes every other request for that
/// session; different sessions never contend.
#[derive(Debug, Default, Clone)]
pub struct SessionLocks {
    inner: Arc<Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `session`.
    pub async fn lock(&self, session: &SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            // Drop entries nobody is holding or waiting on
            map.retain(|id, lock| id == session || Arc::strong_count(lock) > 1);
            map.entry(*session).or_default().clone()
        };

        debug!(session = %session, "Waiting for session lock");
        lock.lock_owned().await
    }

    /// Number of sessions currently tracked.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
