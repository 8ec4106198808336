use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::personalities::Role;
use crate::profile::UserProfile;

/// One oracle call in the plan, in execution order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    MealPlan,
    WorkoutPlan,
    MindfulnessPlan,
    IntegratedSchedule,
    ProgressReport,
}

impl Stage {
    pub const ORDER: [Stage; 5] = [
        Stage::MealPlan,
        Stage::WorkoutPlan,
        Stage::MindfulnessPlan,
        Stage::IntegratedSchedule,
        Stage::ProgressReport,
    ];

    /// The three stages that only read the profile.
    pub const PLANNING: [Stage; 3] = [Stage::MealPlan, Stage::WorkoutPlan, Stage::MindfulnessPlan];

    pub fn role(&self) -> Role {
        match self {
            Stage::MealPlan => Role::Nutritionist,
            Stage::WorkoutPlan => Role::FitnessPlanner,
            Stage::MindfulnessPlan => Role::MindfulnessGuide,
            Stage::IntegratedSchedule => Role::ScheduleCoordinator,
            Stage::ProgressReport => Role::ProgressReporter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::MealPlan => "meal plan",
            Stage::WorkoutPlan => "workout plan",
            Stage::MindfulnessPlan => "mindfulness plan",
            Stage::IntegratedSchedule => "integrated schedule",
            Stage::ProgressReport => "progress report",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StageResult {
    pub stage: Stage,
    pub role: Role,
    pub prompt: String,
    /// Oracle output, untouched.
    pub text: String,
    pub elapsed_ms: u64,
}

/// Placeholder activity record fed to the progress report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: UserProfile,
    pub history: Vec<HistoryEntry>,
    pub stages: Vec<StageResult>,
}

impl PlanReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageResult> {
        self.stages.iter().find(|result| result.stage == stage)
    }
}
