use super::*;
use crate::llm::{CompletionOracle, CompletionRequest, Config, OracleError};
use crate::personalities::Role;
use crate::profile::{FitnessLevel, Goal, StressLevel, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// Answers each call with the next scripted reply and remembers every prompt.
struct ScriptedOracle {
    replies: Vec<String>,
    fail_at: Option<usize>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedOracle {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            fail_at: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    fn prompts(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.prompt.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionOracle for ScriptedOracle {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError> {
        let mut seen = self.seen.lock().unwrap();
        let call = seen.len();
        seen.push(request.clone());

        if self.fail_at == Some(call) {
            return Err(OracleError::RateLimited);
        }
        Ok(self
            .replies
            .get(call)
            .cloned()
            .unwrap_or_else(|| format!("reply #{}", call)))
    }
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl StageObserver for Arc<RecordingObserver> {
    fn on_stage_start(&self, stage: Stage) {
        self.events.lock().unwrap().push(format!("start {}", stage));
    }

    fn on_stage_complete(&self, result: &StageResult) {
        self.events.lock().unwrap().push(format!("done {}", result.stage));
    }
}

const REPLIES: [&str; 5] = [
    "MEAL: oats at 07:00",
    "WORKOUT: squats at 18:00",
    "MINDFULNESS: breathe at 21:00",
    "SCHEDULE: 07:00 oats, 18:00 squats, 21:00 breathe",
    "REPORT: great week",
];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn profile() -> UserProfile {
    UserProfile::builder()
        .goal(Goal::MuscleGain)
        .fitness_level(FitnessLevel::Intermediate)
        .mood(StressLevel::Neutral)
        .build()
}

fn sequencer(oracle: &Arc<ScriptedOracle>) -> StageSequencer {
    StageSequencer::new(oracle.clone(), Config::default())
}

#[tokio::test]
async fn five_calls_in_fixed_order() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES));
    let report = sequencer(&oracle).run(&profile(), today()).await.unwrap();

    let prompts = oracle.prompts();
    assert_eq!(prompts.len(), 5);
    assert!(prompts[0].starts_with("As a nutritionist"));
    assert!(prompts[1].starts_with("As a fitness trainer"));
    assert!(prompts[2].starts_with("As a mindfulness expert"));
    assert!(prompts[3].starts_with("As a schedule coordinator"));
    assert!(prompts[4].starts_with("As a health coach"));

    let stages: Vec<Stage> = report.stages.iter().map(|r| r.stage).collect();
    assert_eq!(stages, Stage::ORDER.to_vec());
    assert_eq!(report.stage(Stage::ProgressReport).unwrap().role, Role::ProgressReporter);
    assert_eq!(report.stage(Stage::MealPlan).unwrap().text, REPLIES[0]);
}

#[tokio::test]
async fn integration_prompt_contains_all_planning_outputs() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES));
    sequencer(&oracle).run(&profile(), today()).await.unwrap();

    let integration = &oracle.prompts()[3];
    for reply in &REPLIES[..3] {
        assert!(integration.contains(reply), "missing {reply:?}");
    }
}

#[tokio::test]
async fn report_prompt_contains_schedule_and_week_of_history() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES));
    let report = sequencer(&oracle).run(&profile(), today()).await.unwrap();

    let prompt = &oracle.prompts()[4];
    assert!(prompt.contains(REPLIES[3]));
    assert_eq!(prompt.matches("{\"date\": ").count(), 7);
    assert!(prompt.contains("2026-10-14"));
    assert!(prompt.contains("2026-10-08"));
    assert!(!prompt.contains("2026-10-07"));
    assert_eq!(report.history.len(), 7);
}

#[tokio::test]
async fn requests_use_configured_model_and_temperature() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES));
    let config = Config {
        model: "gpt-4o".into(),
        temperature: 0.3,
        ..Config::default()
    };
    StageSequencer::new(oracle.clone(), config)
        .run(&profile(), today())
        .await
        .unwrap();

    let seen = oracle.seen.lock().unwrap();
    assert!(seen.iter().all(|r| r.model == "gpt-4o" && (r.temperature - 0.3).abs() < 1e-6));
}

#[tokio::test]
async fn oracle_failure_aborts_remaining_stages() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES).failing_at(1));
    let err = sequencer(&oracle)
        .run(&profile(), today())
        .await
        .unwrap_err();

    assert_eq!(oracle.prompts().len(), 2);
    assert!(err.to_string().contains("workout plan"));
    assert!(matches!(
        err.downcast_ref::<OracleError>(),
        Some(OracleError::RateLimited)
    ));
}

#[tokio::test]
async fn empty_profile_runs_to_completion() {
    let oracle = Arc::new(ScriptedOracle::new(&[]));
    let report = sequencer(&oracle)
        .run(&UserProfile::default(), today())
        .await
        .unwrap();

    assert_eq!(report.stages.len(), 5);
    assert!(oracle.prompts()[0].contains("User Goals: None"));
    // Unscripted replies flow forward like any other text.
    assert!(oracle.prompts()[3].contains("reply #0"));
}

#[tokio::test]
async fn observer_brackets_every_stage() {
    let oracle = Arc::new(ScriptedOracle::new(&REPLIES));
    let observer = Arc::new(RecordingObserver::default());
    sequencer(&oracle)
        .with_observer(Box::new(observer.clone()))
        .run(&profile(), today())
        .await
        .unwrap();

    let events = observer.events.lock().unwrap();
    assert_eq!(events.len(), 10);
    assert_eq!(events[0], "start meal plan");
    assert_eq!(events[1], "done meal plan");
    assert_eq!(events[9], "done progress report");
}
