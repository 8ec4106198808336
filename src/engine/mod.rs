//! Plan engine: prompt assembly and the stage sequencer.

pub mod history;
pub mod orchestrator;
pub mod prompts;
pub mod types;

pub use orchestrator::{SilentObserver, StageObserver, StageSequencer};
pub use prompts::{PromptAssembler, StageInput};
pub use types::{HistoryEntry, PlanReport, Stage, StageResult};

#[cfg(test)]
mod tests;
