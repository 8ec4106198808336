use std::io::Write;

use crate::engine::{Stage, StageObserver, StageResult};
use crate::personalities::Roster;

/// Prints a working line before each call and a tick after, on stderr so a
/// JSON report on stdout stays parseable.
pub struct TerminalObserver {
    roster: Roster,
}

impl TerminalObserver {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    fn working_line(&self, stage: Stage) -> String {
        let role = stage.role();
        match self.roster.get(role) {
            Some(agent) => format!("{} {}", agent.icon, agent.working_message),
            None => format!("{} is working on your {}...", role, stage),
        }
    }
}

impl StageObserver for TerminalObserver {
    fn on_stage_start(&self, stage: Stage) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "⏳ {}", self.working_line(stage));
    }

    fn on_stage_complete(&self, result: &StageResult) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "✅ {} ready ({:.1}s)",
            result.stage,
            result.elapsed_ms as f64 / 1000.0
        );
    }
}
