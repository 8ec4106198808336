use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProfileError;

/// A value the user picks from a fixed list of labelled choices.
pub trait SelectOption: Sized + Copy + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;
    /// Every choice, in display order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Normalized form interpolated into prompts.
    fn key(&self) -> String;

    /// Accepts the display label or the normalized key, ignoring case and
    /// treating spaces, dashes and underscores alike.
    fn from_label(value: &str) -> Result<Self, ProfileError> {
        let wanted = canonical(value);
        Self::ALL
            .iter()
            .copied()
            .find(|option| canonical(option.label()) == wanted)
            .ok_or_else(|| ProfileError::UnknownOption {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }
}

/// Options rendered as a slider: ordered, and selectable by position.
pub trait SliderOption: SelectOption + Ord {
    fn from_position(position: usize) -> Result<Self, ProfileError> {
        Self::ALL
            .get(position)
            .copied()
            .ok_or(ProfileError::SliderOutOfRange {
                field: Self::FIELD,
                position,
                len: Self::ALL.len(),
            })
    }
}

fn canonical(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn snake(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    StressReduction,
    BetterSleep,
    MoreEnergy,
}

impl Goal {
    /// Preselected goals when the user has not chosen any yet.
    pub const DEFAULTS: [Goal; 2] = [Goal::WeightLoss, Goal::MoreEnergy];
}

impl SelectOption for Goal {
    const FIELD: &'static str = "goal";
    const ALL: &'static [Self] = &[
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::StressReduction,
        Goal::BetterSleep,
        Goal::MoreEnergy,
    ];

    fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::StressReduction => "Stress Reduction",
            Goal::BetterSleep => "Better Sleep",
            Goal::MoreEnergy => "More Energy",
        }
    }

    fn key(&self) -> String {
        snake(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Balanced,
    Vegetarian,
    Vegan,
    Keto,
    Mediterranean,
}

impl SelectOption for DietaryPreference {
    const FIELD: &'static str = "diet";
    const ALL: &'static [Self] = &[
        DietaryPreference::Balanced,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::Keto,
        DietaryPreference::Mediterranean,
    ];

    fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Balanced => "Balanced",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Mediterranean => "Mediterranean",
        }
    }

    fn key(&self) -> String {
        self.label().to_lowercase()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    NoNuts,
    NoDairy,
    NoGluten,
    NoShellfish,
    NoEggs,
}

impl SelectOption for Restriction {
    const FIELD: &'static str = "restriction";
    const ALL: &'static [Self] = &[
        Restriction::NoNuts,
        Restriction::NoDairy,
        Restriction::NoGluten,
        Restriction::NoShellfish,
        Restriction::NoEggs,
    ];

    fn label(&self) -> &'static str {
        match self {
            Restriction::NoNuts => "No Nuts",
            Restriction::NoDairy => "No Dairy",
            Restriction::NoGluten => "No Gluten",
            Restriction::NoShellfish => "No Shellfish",
            Restriction::NoEggs => "No Eggs",
        }
    }

    fn key(&self) -> String {
        snake(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SelectOption for FitnessLevel {
    const FIELD: &'static str = "fitness level";
    const ALL: &'static [Self] = &[
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    fn key(&self) -> String {
        self.label().to_lowercase()
    }
}

impl SliderOption for FitnessLevel {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    YogaMat,
    ResistanceBands,
    Dumbbells,
    PullUpBar,
    None,
}

impl SelectOption for Equipment {
    const FIELD: &'static str = "equipment";
    const ALL: &'static [Self] = &[
        Equipment::YogaMat,
        Equipment::ResistanceBands,
        Equipment::Dumbbells,
        Equipment::PullUpBar,
        Equipment::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            Equipment::YogaMat => "Yoga Mat",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::PullUpBar => "Pull-up Bar",
            Equipment::None => "None",
        }
    }

    // Equipment reaches the prompt under its display label.
    fn key(&self) -> String {
        self.label().to_string()
    }
}

/// Current stress level, from most stressed to calmest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    VeryStressed,
    Stressed,
    Neutral,
    Calm,
    VeryCalm,
}

impl SelectOption for StressLevel {
    const FIELD: &'static str = "mood";
    const ALL: &'static [Self] = &[
        StressLevel::VeryStressed,
        StressLevel::Stressed,
        StressLevel::Neutral,
        StressLevel::Calm,
        StressLevel::VeryCalm,
    ];

    fn label(&self) -> &'static str {
        match self {
            StressLevel::VeryStressed => "Very Stressed",
            StressLevel::Stressed => "Stressed",
            StressLevel::Neutral => "Neutral",
            StressLevel::Calm => "Calm",
            StressLevel::VeryCalm => "Very Calm",
        }
    }

    fn key(&self) -> String {
        self.label().to_lowercase()
    }
}

impl SliderOption for StressLevel {}

macro_rules! display_as_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })+
    };
}

display_as_label!(Goal, DietaryPreference, Restriction, FitnessLevel, Equipment, StressLevel);
