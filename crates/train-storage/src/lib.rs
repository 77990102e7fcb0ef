//! Per-session filesystem clip store.
//!
//! This crate provides:
//! - One directory per session holding the prompt and every clip role
//! - Atomic writes (temp file + rename) so readers never see partial clips
//! - Per-session locks serializing requests within one session

pub mod config;
pub mod error;
pub mod locks;
pub mod store;

pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
pub use locks::SessionLocks;
pub use store::{ClipStore, SessionStore, PROMPT_FILE_NAME};
