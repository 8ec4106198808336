//! Turns the user's raw selections into a normalized [`UserProfile`].

pub mod options;

pub use options::{
    DietaryPreference, Equipment, FitnessLevel, Goal, Restriction, SelectOption, SliderOption,
    StressLevel,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },
    #[error("{field} slider position {position} is out of range (0..{len})")]
    SliderOutOfRange {
        field: &'static str,
        position: usize,
        len: usize,
    },
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse profile file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Selections exactly as the input surface hands them over: display labels,
/// possibly missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RawSelections {
    pub goals: Vec<String>,
    pub diet: Option<String>,
    pub restrictions: Vec<String>,
    pub fitness_level: Option<String>,
    pub equipment: Vec<String>,
    pub mood: Option<String>,
}

impl RawSelections {
    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// What the user asked for. Built once per run and never modified.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    goals: BTreeSet<Goal>,
    diet: Option<DietaryPreference>,
    exclusions: BTreeSet<Restriction>,
    fitness_level: Option<FitnessLevel>,
    equipment: BTreeSet<Equipment>,
    mood: Option<StressLevel>,
}

impl UserProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn from_selections(raw: &RawSelections) -> Result<Self, ProfileError> {
        let mut builder = ProfileBuilder::default();
        for goal in &raw.goals {
            builder = builder.goal(Goal::from_label(goal)?);
        }
        if let Some(diet) = &raw.diet {
            builder = builder.diet(DietaryPreference::from_label(diet)?);
        }
        for restriction in &raw.restrictions {
            builder = builder.exclude(Restriction::from_label(restriction)?);
        }
        if let Some(level) = &raw.fitness_level {
            builder = builder.fitness_level(FitnessLevel::from_label(level)?);
        }
        for item in &raw.equipment {
            builder = builder.equipment(Equipment::from_label(item)?);
        }
        if let Some(mood) = &raw.mood {
            builder = builder.mood(StressLevel::from_label(mood)?);
        }
        Ok(builder.build())
    }

    pub fn goals(&self) -> &BTreeSet<Goal> {
        &self.goals
    }

    pub fn diet(&self) -> Option<DietaryPreference> {
        self.diet
    }

    pub fn exclusions(&self) -> &BTreeSet<Restriction> {
        &self.exclusions
    }

    pub fn fitness_level(&self) -> Option<FitnessLevel> {
        self.fitness_level
    }

    pub fn equipment(&self) -> &BTreeSet<Equipment> {
        &self.equipment
    }

    pub fn mood(&self) -> Option<StressLevel> {
        self.mood
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    profile: UserProfile,
}

impl ProfileBuilder {
    pub fn goal(mut self, goal: Goal) -> Self {
        self.profile.goals.insert(goal);
        self
    }

    pub fn goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.profile.goals.extend(goals);
        self
    }

    pub fn diet(mut self, diet: DietaryPreference) -> Self {
        self.profile.diet = Some(diet);
        self
    }

    pub fn exclude(mut self, restriction: Restriction) -> Self {
        self.profile.exclusions.insert(restriction);
        self
    }

    pub fn fitness_level(mut self, level: FitnessLevel) -> Self {
        self.profile.fitness_level = Some(level);
        self
    }

    pub fn equipment(mut self, item: Equipment) -> Self {
        self.profile.equipment.insert(item);
        self
    }

    pub fn mood(mut self, mood: StressLevel) -> Self {
        self.profile.mood = Some(mood);
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}
