//! Clip roles.

use std::fmt;

/// The role a stored clip plays in a session. At most one clip per role
/// exists at a time; writing a role again replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipRole {
    /// Clip generated from the scenario selections
    Scenario,
    /// Clip generated from the user's follow-up action
    Continuation,
    /// Anchor of the scenario joined with the continuation
    Final,
}

impl ClipRole {
    pub const ALL: &'static [ClipRole] =
        &[ClipRole::Scenario, ClipRole::Continuation, ClipRole::Final];

    /// File name of the clip inside a session directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ClipRole::Scenario => "scenario.mp4",
            ClipRole::Continuation => "continuation.mp4",
            ClipRole::Final => "final_video.mp4",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipRole::Scenario => "scenario",
            ClipRole::Continuation => "continuation",
            ClipRole::Final => "final",
        }
    }
}

impl fmt::Display for ClipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
