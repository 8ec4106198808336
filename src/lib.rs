// Command-line entry point lives in main.rs; everything else is here so the
// pipeline can be driven from tests.

mod commands;
pub mod engine;
pub mod llm;
pub mod personalities;
pub mod postprocessing;
pub mod profile;

use crate::commands::*;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wellness", version, about = "Personalized wellness plans from a crew of AI specialists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a full plan: meals, workouts, mindfulness, schedule and weekly report
    Plan(PlanArgs),
    /// Print the planning prompts for a profile without calling the API
    Prompts(ProfileArgs),
    /// List every accepted profile option
    Options,
}

/// Logs go to stderr; `RUST_LOG` overrides the default `wellness_lib=info`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wellness_lib=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Plan(args) => plan(args).await,
        Command::Prompts(args) => prompts(args),
        Command::Options => {
            options();
            Ok(())
        }
    }
}
