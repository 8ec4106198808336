//! High-level coordinator: profile → five prompts → five oracle calls → report.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::engine::history::synthetic_history;
use crate::engine::prompts::{PromptAssembler, StageInput};
use crate::engine::types::{PlanReport, Stage, StageResult};
use crate::llm::{CompletionOracle, CompletionRequest, Config};
use crate::profile::UserProfile;

/// Notified around every oracle call; the CLI uses it as its spinner.
pub trait StageObserver: Send + Sync {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _result: &StageResult) {}
}

pub struct SilentObserver;

impl StageObserver for SilentObserver {}

/// Runs the stages strictly one after another. A failed call ends the run.
pub struct StageSequencer {
    oracle: Arc<dyn CompletionOracle>,
    config: Config,
    assembler: PromptAssembler,
    observer: Box<dyn StageObserver>,
}

impl StageSequencer {
    pub fn new(oracle: Arc<dyn CompletionOracle>, config: Config) -> Self {
        Self {
            oracle,
            config,
            assembler: PromptAssembler,
            observer: Box::new(SilentObserver),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn StageObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Drive one full plan. `today` anchors the synthetic history.
    pub async fn run(&self, profile: &UserProfile, today: NaiveDate) -> Result<PlanReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("plan", %run_id, model = %self.config.model);

        async move {
            let meal = self.run_stage(StageInput::MealPlan(profile)).await?;
            let workout = self.run_stage(StageInput::WorkoutPlan(profile)).await?;
            let mindfulness = self.run_stage(StageInput::MindfulnessPlan(profile)).await?;

            let schedule = self
                .run_stage(StageInput::IntegratedSchedule {
                    meal_plan: &meal.text,
                    workout_plan: &workout.text,
                    mindfulness_plan: &mindfulness.text,
                })
                .await?;

            let history = synthetic_history(today);
            let report = self
                .run_stage(StageInput::ProgressReport {
                    history: &history,
                    schedule: &schedule.text,
                })
                .await?;

            info!("Plan complete");

            Ok::<_, anyhow::Error>(PlanReport {
                run_id,
                generated_at: Utc::now(),
                profile: profile.clone(),
                history,
                stages: vec![meal, workout, mindfulness, schedule, report],
            })
        }
        .instrument(span)
        .await
    }

    async fn run_stage(&self, input: StageInput<'_>) -> Result<StageResult> {
        let stage = input.stage();
        let request = CompletionRequest::new(&self.config, self.assembler.assemble(&input));

        self.observer.on_stage_start(stage);
        info!(
            stage = %stage,
            role = %stage.role(),
            prompt_chars = request.prompt_chars(),
            "Stage started"
        );

        let started = Instant::now();
        let text = self
            .oracle
            .complete(&request)
            .await
            .with_context(|| format!("{} stage failed", stage))?;

        let result = StageResult {
            stage,
            role: stage.role(),
            prompt: request.prompt,
            text,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            stage = %stage,
            elapsed_ms = result.elapsed_ms,
            output_chars = result.text.chars().count(),
            "Stage finished"
        );
        self.observer.on_stage_complete(&result);

        Ok(result)
    }
}
