//! Scenario selection fields.
//!
//! Each field is a closed set presented to the user as a `<select>`. The
//! label of a variant is the exact text shown in the form and embedded in
//! the prompt.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where the CPR task takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSetting {
    Safe,
    Hazmat,
    ViolenceThreat,
    TrafficActiveRoadway,
    UnstableSurfaces,
    SevereWeather,
    ConfinedSpace,
    HeightElevated,
    Entrapped,
}

impl TaskSetting {
    /// All available settings, in form order.
    pub const ALL: &'static [TaskSetting] = &[
        TaskSetting::Safe,
        TaskSetting::Hazmat,
        TaskSetting::ViolenceThreat,
        TaskSetting::TrafficActiveRoadway,
        TaskSetting::UnstableSurfaces,
        TaskSetting::SevereWeather,
        TaskSetting::ConfinedSpace,
        TaskSetting::HeightElevated,
        TaskSetting::Entrapped,
    ];

    /// Label shown in the form and used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            TaskSetting::Safe => "Safe",
            TaskSetting::Hazmat => "Hazardous - Hazmat",
            TaskSetting::ViolenceThreat => "Hazardous - Violence threat",
            TaskSetting::TrafficActiveRoadway => "Hazardous - Traffic active roadway",
            TaskSetting::UnstableSurfaces => "Hazardous - Unstable surfaces",
            TaskSetting::SevereWeather => "Hazardous - Severe weather",
            TaskSetting::ConfinedSpace => "Hazardous - Confined space",
            TaskSetting::HeightElevated => "Hazardous - Height / elevated",
            TaskSetting::Entrapped => "Hazardous - Entrapped / pinned / crushed",
        }
    }
}

/// Patient and history complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskComplexity {
    Pediatric,
    Geriatric,
    Bariatric,
    Pregnant,
    ClearHistory,
    PoorHistorianAltered,
    PoorHistorianLanguageBarrier,
    StraightforwardPresentation,
    AtypicalPresentation,
    SymptomRedHerrings,
    UnusualPositioning,
}

impl TaskComplexity {
    pub const ALL: &'static [TaskComplexity] = &[
        TaskComplexity::Pediatric,
        TaskComplexity::Geriatric,
        TaskComplexity::Bariatric,
        TaskComplexity::Pregnant,
        TaskComplexity::ClearHistory,
        TaskComplexity::PoorHistorianAltered,
        TaskComplexity::PoorHistorianLanguageBarrier,
        TaskComplexity::StraightforwardPresentation,
        TaskComplexity::AtypicalPresentation,
        TaskComplexity::SymptomRedHerrings,
        TaskComplexity::UnusualPositioning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskComplexity::Pediatric => "Pediatric",
            TaskComplexity::Geriatric => "Geriatric",
            TaskComplexity::Bariatric => "Bariatric",
            TaskComplexity::Pregnant => "Pregnant",
            TaskComplexity::ClearHistory => "Clear history",
            TaskComplexity::PoorHistorianAltered => "Poor historian (altered)",
            TaskComplexity::PoorHistorianLanguageBarrier => "Poor historian (language barrier)",
            TaskComplexity::StraightforwardPresentation => "Straightforward symptom presentation",
            TaskComplexity::AtypicalPresentation => "Atypical symptom presentation",
            TaskComplexity::SymptomRedHerrings => "Symptom red herrings",
            TaskComplexity::UnusualPositioning => "Unusual patient positioning",
        }
    }
}

/// Bystanders, patient count and resource availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CognitiveLoad {
    BystanderNone,
    BystanderHelpful,
    BystanderObstructive,
    SinglePatient,
    MultiplePatients,
    MassCasualty,
    ResourcesFull,
    ResourcesLimited,
    ResourcesAustere,
}

impl CognitiveLoad {
    pub const ALL: &'static [CognitiveLoad] = &[
        CognitiveLoad::BystanderNone,
        CognitiveLoad::BystanderHelpful,
        CognitiveLoad::BystanderObstructive,
        CognitiveLoad::SinglePatient,
        CognitiveLoad::MultiplePatients,
        CognitiveLoad::MassCasualty,
        CognitiveLoad::ResourcesFull,
        CognitiveLoad::ResourcesLimited,
        CognitiveLoad::ResourcesAustere,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CognitiveLoad::BystanderNone => "Bystander none",
            CognitiveLoad::BystanderHelpful => "Bystander helpful",
            CognitiveLoad::BystanderObstructive => "Bystander obstructive",
            CognitiveLoad::SinglePatient => "Single patient",
            CognitiveLoad::MultiplePatients => "Multiple patients",
            CognitiveLoad::MassCasualty => "Mass casualty",
            CognitiveLoad::ResourcesFull => "Resources full",
            CognitiveLoad::ResourcesLimited => "Resources limited",
            CognitiveLoad::ResourcesAustere => "Resources austere",
        }
    }
}

/// Rejected selection value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {field}: {value}")]
pub struct SelectionParseError {
    pub field: &'static str,
    pub value: String,
}

macro_rules! impl_label_traits {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = SelectionParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| SelectionParseError {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_label_traits!(TaskSetting, "task setting");
impl_label_traits!(TaskComplexity, "task complexity");
impl_label_traits!(CognitiveLoad, "cognitive load");

/// The three values picked on the scenario form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioSelection {
    pub task_setting: TaskSetting,
    pub task_complexity: TaskComplexity,
    pub cognitive_load: CognitiveLoad,
}

impl ScenarioSelection {
    /// Parse raw form values.
    pub fn parse(
        task_setting: &str,
        task_complexity: &str,
        cognitive_load: &str,
    ) -> Result<Self, SelectionParseError> {
        Ok(Self {
            task_setting: task_setting.parse()?,
            task_complexity: task_complexity.parse()?,
            cognitive_load: cognitive_load.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for s in TaskSetting::ALL {
            assert_eq!(s.label().parse::<TaskSetting>().unwrap(), *s);
        }
        for c in TaskComplexity::ALL {
            assert_eq!(c.label().parse::<TaskComplexity>().unwrap(), *c);
        }
        for l in CognitiveLoad::ALL {
            assert_eq!(l.label().parse::<CognitiveLoad>().unwrap(), *l);
        }
    }

    #[test]
    fn test_closed_set_sizes() {
        assert_eq!(TaskSetting::ALL.len(), 9);
        assert_eq!(TaskComplexity::ALL.len(), 11);
        assert_eq!(CognitiveLoad::ALL.len(), 9);
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "Underwater".parse::<TaskSetting>().unwrap_err();
        assert_eq!(err.field, "task setting");
        assert_eq!(err.value, "Underwater");

        // Labels are matched exactly, not case-folded
        assert!("pediatric".parse::<TaskComplexity>().is_err());
    }

    #[test]
    fn test_selection_parse() {
        let selection =
            ScenarioSelection::parse("Hazardous - Confined space", "Pregnant", "Mass casualty")
                .unwrap();
        assert_eq!(selection.task_setting, TaskSetting::ConfinedSpace);
        assert_eq!(selection.task_complexity, TaskComplexity::Pregnant);
        assert_eq!(selection.cognitive_load, CognitiveLoad::MassCasualty);

        let err = ScenarioSelection::parse("Safe", "Pregnant", "Lots").unwrap_err();
        assert_eq!(err.field, "cognitive load");
    }
}
