//! Renders the instruction string each stage sends to the oracle.

pub mod templates;

use crate::engine::history::render_history;
use crate::engine::types::{HistoryEntry, Stage};
use crate::profile::{SelectOption, UserProfile};

/// Placeholder for a field the user left empty.
pub const EMPTY_FIELD: &str = "None";

/// Everything a single stage's template needs.
#[derive(Debug, Clone, Copy)]
pub enum StageInput<'a> {
    MealPlan(&'a UserProfile),
    WorkoutPlan(&'a UserProfile),
    MindfulnessPlan(&'a UserProfile),
    IntegratedSchedule {
        meal_plan: &'a str,
        workout_plan: &'a str,
        mindfulness_plan: &'a str,
    },
    ProgressReport {
        history: &'a [HistoryEntry],
        schedule: &'a str,
    },
}

impl StageInput<'_> {
    pub fn stage(&self) -> Stage {
        match self {
            StageInput::MealPlan(_) => Stage::MealPlan,
            StageInput::WorkoutPlan(_) => Stage::WorkoutPlan,
            StageInput::MindfulnessPlan(_) => Stage::MindfulnessPlan,
            StageInput::IntegratedSchedule { .. } => Stage::IntegratedSchedule,
            StageInput::ProgressReport { .. } => Stage::ProgressReport,
        }
    }
}

/// Stateless: the same input always yields the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    pub fn assemble(&self, input: &StageInput<'_>) -> String {
        match *input {
            StageInput::MealPlan(profile) => templates::meal_plan(
                &join(profile.goals()),
                &single(profile.diet()),
                &join(profile.exclusions()),
                &single(profile.fitness_level()),
            ),
            StageInput::WorkoutPlan(profile) => templates::workout_plan(
                &single(profile.fitness_level()),
                &join(profile.equipment()),
            ),
            StageInput::MindfulnessPlan(profile) => {
                templates::mindfulness_plan(&single(profile.mood()))
            }
            StageInput::IntegratedSchedule {
                meal_plan,
                workout_plan,
                mindfulness_plan,
            } => templates::integrated_schedule(meal_plan, workout_plan, mindfulness_plan),
            StageInput::ProgressReport { history, schedule } => {
                templates::progress_report(&render_history(history), schedule)
            }
        }
    }

    /// Prompts for the stages that depend only on the profile.
    pub fn planning_prompts(&self, profile: &UserProfile) -> Vec<(Stage, String)> {
        [
            StageInput::MealPlan(profile),
            StageInput::WorkoutPlan(profile),
            StageInput::MindfulnessPlan(profile),
        ]
        .iter()
        .map(|input| (input.stage(), self.assemble(input)))
        .collect()
    }
}

fn join<'a, T: SelectOption>(options: impl IntoIterator<Item = &'a T>) -> String {
    let keys: Vec<String> = options.into_iter().map(|option| option.key()).collect();
    if keys.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        keys.join(", ")
    }
}

fn single<T: SelectOption>(option: Option<T>) -> String {
    option.map_or_else(|| EMPTY_FIELD.to_string(), |option| option.key())
}
