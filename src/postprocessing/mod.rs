//! Final polish of the plan before it reaches the user.

pub mod demo;
pub mod formatter;
pub mod progress;

pub use formatter::{clean, format_agent_output};
pub use progress::TerminalObserver;

use std::fmt::Write;

use crate::engine::{PlanReport, Stage, StageResult};
use crate::personalities::Roster;
use demo::{thoughts_for, DemoThought};

const SECTIONS: [(&str, &str, &[Stage]); 3] = [
    (
        "Initial Planning",
        "Your specialists are creating their initial recommendations...",
        &Stage::PLANNING,
    ),
    (
        "Schedule Integration",
        "Your Schedule Coordinator is creating a cohesive daily schedule...",
        &[Stage::IntegratedSchedule],
    ),
    (
        "Weekly Report",
        "Your Progress Reporter is analyzing your schedule and preparing recommendations...",
        &[Stage::ProgressReport],
    ),
];

const ARROW: &str = "        ⬇";

pub struct Presenter {
    roster: Roster,
    show_thoughts: bool,
}

impl Presenter {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            show_thoughts: false,
        }
    }

    pub fn show_thoughts(mut self, show: bool) -> Self {
        self.show_thoughts = show;
        self
    }

    /// The crew introduction followed by terminal panels grouped into the
    /// three plan sections.
    pub fn render(&self, report: &PlanReport) -> String {
        let mut out = String::new();
        self.render_crew(&mut out);

        for (title, intro, stages) in SECTIONS {
            let results: Vec<&StageResult> =
                stages.iter().filter_map(|stage| report.stage(*stage)).collect();
            if results.is_empty() {
                continue;
            }

            let _ = writeln!(out, "=== {} ===", title);
            let _ = writeln!(out, "{}\n", intro);

            for (index, result) in results.iter().enumerate() {
                if index > 0 {
                    let _ = writeln!(out, "{}\n", ARROW);
                }
                self.render_panel(&mut out, result);
            }
        }

        out
    }

    pub fn render_json(&self, report: &PlanReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    fn render_crew(&self, out: &mut String) {
        let _ = writeln!(out, "Meet your team of experts:");
        for agent in self.roster.agents() {
            let _ = writeln!(out, "- {} {}: {}", agent.icon, agent.name, agent.goal);
        }
        out.push('\n');
    }

    fn render_panel(&self, out: &mut String, result: &StageResult) {
        let _ = writeln!(out, "## {}\n", self.roster.header(result.role));
        let _ = writeln!(out, "{}\n", clean(&format_agent_output(&result.text)));

        if self.show_thoughts {
            for thought in thoughts_for(result.stage) {
                self.render_thought(out, &thought);
            }
        }
    }

    fn render_thought(&self, out: &mut String, thought: &DemoThought) {
        let _ = writeln!(out, "  {}: {}", self.roster.header(thought.role), thought.message);
        let _ = writeln!(out, "  🤔 Thought Process: {}", thought.thought_process);
        for step in &thought.chain {
            let _ = writeln!(out, "    {}", step.title);
            if let Some(text) = step.text {
                let _ = writeln!(out, "    {}", text);
            }
            if let Some(input) = step.tool_input {
                let _ = writeln!(out, "    Tool Input: {}", input);
            }
            if let Some(output) = step.tool_output {
                let _ = writeln!(out, "    Tool Output: {}", output);
            }
        }
        out.push('\n');
    }
}
