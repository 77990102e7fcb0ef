//! Shared data models for the trAIn backend.
//!
//! This crate provides:
//! - Closed-set scenario selections (task setting, complexity, cognitive load)
//! - Prompt building for the scenario and continuation stages
//! - Clip roles and session identifiers used by the clip store

pub mod clip;
pub mod prompt;
pub mod selection;
pub mod session;

// Re-export common types
pub use clip::ClipRole;
pub use prompt::{continuation_prompt, scenario_prompt, Prompt, DEFAULT_PREVIOUS_SCENARIO};
pub use selection::{
    CognitiveLoad, ScenarioSelection, SelectionParseError, TaskComplexity, TaskSetting,
};
pub use session::SessionId;
