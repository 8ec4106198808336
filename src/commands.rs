use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::engine::{PromptAssembler, StageSequencer};
use crate::llm::{ChatCompletionClient, Config};
use crate::personalities::Roster;
use crate::postprocessing::{Presenter, TerminalObserver};
use crate::profile::{
    DietaryPreference, Equipment, FitnessLevel, Goal, RawSelections, Restriction, SelectOption,
    SliderOption, StressLevel, UserProfile,
};

/* ---------- 1.  INPUTS ---------- */

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// JSON file with `goals`, `diet`, `restrictions`, `fitness_level`,
    /// `equipment` and `mood`. Flags below add to or replace its values.
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Health goal, e.g. "Weight Loss" (repeatable)
    #[arg(long = "goal", value_name = "GOAL")]
    pub goals: Vec<String>,

    /// Dietary preference, e.g. "Vegetarian"
    #[arg(long)]
    pub diet: Option<String>,

    /// Dietary restriction, e.g. "No Nuts" (repeatable)
    #[arg(long = "exclude", value_name = "RESTRICTION")]
    pub restrictions: Vec<String>,

    /// Fitness level label or slider position (0 = Beginner)
    #[arg(long = "fitness")]
    pub fitness_level: Option<String>,

    /// Available equipment, e.g. "Yoga Mat" (repeatable)
    #[arg(long = "equipment", value_name = "ITEM")]
    pub equipment: Vec<String>,

    /// Stress level label or slider position (0 = Very Stressed)
    #[arg(long)]
    pub mood: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// TOML file with `model`, `api_url`, `temperature`, `request_timeout_seconds`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the illustrative thought-process notes
    #[arg(long)]
    pub show_thoughts: bool,
}

impl ProfileArgs {
    fn selections(&self) -> Result<RawSelections> {
        let mut raw = match &self.profile {
            Some(path) => RawSelections::from_json_file(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?,
            None => RawSelections::default(),
        };

        raw.goals.extend(self.goals.iter().cloned());
        raw.restrictions.extend(self.restrictions.iter().cloned());
        raw.equipment.extend(self.equipment.iter().cloned());
        if let Some(diet) = &self.diet {
            raw.diet = Some(diet.clone());
        }
        if let Some(level) = &self.fitness_level {
            raw.fitness_level = Some(slider_label::<FitnessLevel>(level)?);
        }
        if let Some(mood) = &self.mood {
            raw.mood = Some(slider_label::<StressLevel>(mood)?);
        }

        Ok(raw)
    }

    pub fn build(&self) -> Result<UserProfile> {
        let profile = UserProfile::from_selections(&self.selections()?)?;
        info!(empty = profile.is_empty(), "Profile built");
        Ok(profile)
    }
}

/// Slider flags take either a label or a position.
fn slider_label<T: SliderOption>(value: &str) -> Result<String> {
    match value.trim().parse::<usize>() {
        Ok(position) => Ok(T::from_position(position)?.label().to_string()),
        Err(_) => Ok(value.to_string()),
    }
}

/* ---------- 2.  MAIN PIPELINE ---------- */

pub async fn plan(args: PlanArgs) -> Result<()> {
    let profile = args.profile.build()?;
    let config = Config::load(args.config.as_deref())?;
    let roster = Roster::load()?;

    let client = ChatCompletionClient::new(&config)?;
    let sequencer = StageSequencer::new(Arc::new(client), config)
        .with_observer(Box::new(TerminalObserver::new(roster.clone())));

    let report = sequencer.run(&profile, Local::now().date_naive()).await?;

    let presenter = Presenter::new(roster).show_thoughts(args.show_thoughts);
    match args.format {
        OutputFormat::Text => print!("{}", presenter.render(&report)),
        OutputFormat::Json => println!("{}", presenter.render_json(&report)?),
    }

    Ok(())
}

/* ---------- 3.  INSPECTION ---------- */

/// Prints the three planning prompts without contacting the oracle.
pub fn prompts(args: ProfileArgs) -> Result<()> {
    let profile = args.build()?;
    for (stage, prompt) in PromptAssembler.planning_prompts(&profile) {
        println!("--- {} ({}) ---", stage, stage.role());
        println!("{}\n", prompt);
    }
    Ok(())
}

pub fn options() {
    print_options::<Goal>("--goal", &Goal::DEFAULTS);
    print_options::<DietaryPreference>("--diet", &[]);
    print_options::<Restriction>("--exclude", &[]);
    print_options::<FitnessLevel>("--fitness", &[]);
    print_options::<Equipment>("--equipment", &[]);
    print_options::<StressLevel>("--mood", &[]);
}

fn print_options<T: SelectOption + PartialEq>(flag: &str, defaults: &[T]) {
    println!("{} ({})", flag, T::FIELD);
    for (position, option) in T::ALL.iter().enumerate() {
        let marker = if defaults.contains(option) { " (default)" } else { "" };
        println!("  {}. {}{}", position, option.label(), marker);
    }
}
