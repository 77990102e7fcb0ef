//! Prompt building for the scenario and continuation stages.

use std::fmt;

use crate::selection::ScenarioSelection;

/// Stand-in for the previous scenario when no prompt was stored.
pub const DEFAULT_PREVIOUS_SCENARIO: &str = "Previous scenario";

const SCENARIO_SUFFIX: &str = "Generate a visual CPR simulation demonstrating the setting clearly.";

/// A text prompt sent to the video generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the initial-stage prompt from the three form selections.
pub fn scenario_prompt(selection: &ScenarioSelection) -> Prompt {
    Prompt(format!(
        "CPR emergency scenario. Task setting: {}. Task complexity: {}. Cognitive load: {}. {}",
        selection.task_setting, selection.task_complexity, selection.cognitive_load, SCENARIO_SUFFIX
    ))
}

/// Build the follow-up prompt from the stored scenario prompt and the
/// user's free-text action.
pub fn continuation_prompt(previous: Option<&str>, action: &str) -> Prompt {
    let previous = previous.unwrap_or(DEFAULT_PREVIOUS_SCENARIO);
    Prompt(format!("Previous scenario: {}. Now, user action: {}.", previous, action.trim()))
}
