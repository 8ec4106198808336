//! Illustrative "thought process" content shown next to some panels.
//!
//! These strings are fixed demo material. They are never produced by the
//! oracle and say nothing about what actually happened during a run.

use crate::engine::Stage;
use crate::personalities::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtStep {
    pub title: &'static str,
    pub text: Option<&'static str>,
    pub tool_input: Option<&'static str>,
    pub tool_output: Option<&'static str>,
}

/// One illustrative aside: who "speaks", a short summary, and optional steps.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoThought {
    pub role: Role,
    pub message: &'static str,
    pub thought_process: &'static str,
    pub chain: Vec<ThoughtStep>,
}

pub fn thoughts_for(stage: Stage) -> Vec<DemoThought> {
    match stage {
        Stage::MealPlan => vec![DemoThought {
            role: Role::Nutritionist,
            message: "I'll create a meal plan that supports your workout schedule...",
            thought_process: "Considering workout timing for pre and post-workout nutrition, \
                              and how meals affect energy for meditation.",
            chain: Vec::new(),
        }],
        Stage::WorkoutPlan => vec![DemoThought {
            role: Role::FitnessPlanner,
            message: "I'll design workouts that align with your meal timing...",
            thought_process: "Placing sessions where energy from meals peaks and leaving \
                              recovery time before evening meditation.",
            chain: Vec::new(),
        }],
        Stage::MindfulnessPlan => vec![DemoThought {
            role: Role::MindfulnessGuide,
            message: "I'll fit meditation around your meals and workouts...",
            thought_process: "Finding calm windows away from meals and right after training.",
            chain: Vec::new(),
        }],
        Stage::IntegratedSchedule => vec![DemoThought {
            role: Role::ScheduleCoordinator,
            message: "Let me combine all three plans into one day...",
            thought_process: "Reviewing timing conflicts, spacing activities and balancing \
                              energy levels across the day.",
            chain: vec![
                ThoughtStep {
                    title: "# Agent: Schedule Coordinator",
                    text: Some("## Thought: I need to merge the meal, workout and mindfulness plans."),
                    tool_input: None,
                    tool_output: None,
                },
                ThoughtStep {
                    title: "## Using tool: Check conflicts",
                    text: None,
                    tool_input: Some(r#"{"workout": "18:00", "dinner": "18:30"}"#),
                    tool_output: Some("Move dinner to 19:30 to allow recovery."),
                },
            ],
        }],
        Stage::ProgressReport => vec![
            DemoThought {
                role: Role::ProgressReporter,
                message: "Here's your weekly progress report:",
                thought_process: "Compiling insights and recommendations to support continued \
                                  progress and motivation.",
                chain: vec![
                    ThoughtStep {
                        title: "# Agent: Progress Reporter",
                        text: Some("## Thought: I need to analyze how well the integrated schedule is working."),
                        tool_input: None,
                        tool_output: None,
                    },
                    ThoughtStep {
                        title: "## Using tool: Review history",
                        text: None,
                        tool_input: Some(r#"{"history": "User completed 90% of scheduled activities."}"#),
                        tool_output: Some("User showed strong commitment and consistency."),
                    },
                    ThoughtStep {
                        title: "## Using tool: Suggest improvements",
                        text: None,
                        tool_input: Some(
                            r#"{"analysis": "Some mindfulness sessions were missed in the afternoon."}"#,
                        ),
                        tool_output: Some("Recommend scheduling mindfulness earlier in the day."),
                    },
                ],
            },
            DemoThought {
                role: Role::ScheduleCoordinator,
                message: "Here are my insights on schedule effectiveness.",
                thought_process: "Analyzing the practical implementation of the schedule and \
                                  identifying optimization opportunities.",
                chain: vec![
                    ThoughtStep {
                        title: "# Agent: Schedule Coordinator",
                        text: Some("## Thought: I need to provide insights on schedule effectiveness."),
                        tool_input: None,
                        tool_output: None,
                    },
                    ThoughtStep {
                        title: "## Using tool: Review report",
                        text: None,
                        tool_input: Some(r#"{"report": "Weekly progress report with recommendations."}"#),
                        tool_output: Some(
                            "Schedule was effective, but flexibility is needed for mindfulness.",
                        ),
                    },
                ],
            },
        ],
    }
}
