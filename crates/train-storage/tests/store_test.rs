//! Clip store behaviour against a real temp directory.

use tempfile::TempDir;
use train_models::{ClipRole, SessionId};
use train_storage::{ClipStore, StorageError};

#[tokio::test]
async fn test_prompt_slot_overwrites() {
    let dir = TempDir::new().unwrap();
    let session = ClipStore::new(dir.path()).session(&SessionId::new());

    assert_eq!(session.read_prompt().await.unwrap(), None);

    session.write_prompt("first").await.unwrap();
    session.write_prompt("second").await.unwrap();
    assert_eq!(session.read_prompt().await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn test_clip_slots_are_independent() {
    let dir = TempDir::new().unwrap();
    let session = ClipStore::new(dir.path()).session(&SessionId::new());

    session.write_clip(ClipRole::Scenario, b"scenario").await.unwrap();

    assert!(session.has_clip(ClipRole::Scenario).await);
    assert!(!session.has_clip(ClipRole::Continuation).await);
    assert_eq!(session.read_clip(ClipRole::Scenario).await.unwrap(), b"scenario");
    assert!(matches!(
        session.read_clip(ClipRole::Final).await,
        Err(StorageError::MissingClip(ClipRole::Final))
    ));
}

#[tokio::test]
async fn test_require_clip() {
    let dir = TempDir::new().unwrap();
    let session = ClipStore::new(dir.path()).session(&SessionId::new());

    let err = session.require_clip(ClipRole::Scenario).await.unwrap_err();
    assert!(err.is_missing());
    assert_eq!(err.to_string(), "scenario clip not found for this session");

    let written = session.write_clip(ClipRole::Scenario, b"v1").await.unwrap();
    assert_eq!(session.require_clip(ClipRole::Scenario).await.unwrap(), written);
}

#[tokio::test]
async fn test_rewrite_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let session = ClipStore::new(dir.path()).session(&SessionId::new());

    session.write_clip(ClipRole::Final, b"old").await.unwrap();
    session.write_clip(ClipRole::Final, b"new").await.unwrap();

    assert_eq!(session.read_clip(ClipRole::Final).await.unwrap(), b"new");
    let names: Vec<String> = std::fs::read_dir(session.dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["final_video.mp4".to_string()]);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let dir = TempDir::new().unwrap();
    let store = ClipStore::new(dir.path());
    let a = store.session(&SessionId::new());
    let b = store.session(&SessionId::new());

    a.write_clip(ClipRole::Scenario, b"a").await.unwrap();
    a.write_prompt("prompt a").await.unwrap();

    assert!(!b.has_clip(ClipRole::Scenario).await);
    assert_eq!(b.read_prompt().await.unwrap(), None);
}

#[tokio::test]
async fn test_open_session_round_trips_cookie_value() {
    let dir = TempDir::new().unwrap();
    let store = ClipStore::new(dir.path());
    let id = SessionId::new();

    let session = store.open_session(&id.to_string()).unwrap();
    assert_eq!(session.id(), &id);
}
