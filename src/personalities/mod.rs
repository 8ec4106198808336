//! The five specialist roles and their display profiles (name, icon and goal).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

const ROSTER: &str = include_str!("./roster.toml");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Nutritionist,
    FitnessPlanner,
    MindfulnessGuide,
    ScheduleCoordinator,
    ProgressReporter,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Nutritionist,
        Role::FitnessPlanner,
        Role::MindfulnessGuide,
        Role::ScheduleCoordinator,
        Role::ProgressReporter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Nutritionist => "Nutritionist",
            Role::FitnessPlanner => "Fitness Planner",
            Role::MindfulnessGuide => "Mindfulness Guide",
            Role::ScheduleCoordinator => "Schedule Coordinator",
            Role::ProgressReporter => "Progress Reporter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to parse agent roster: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Agent roster has no entry for {0}")]
    MissingRole(Role),
    #[error("Agent roster lists {0} more than once")]
    DuplicateRole(Role),
}

#[derive(Deserialize, Debug)]
struct RosterFile {
    agent: Vec<AgentProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentProfile {
    pub id: Role,
    pub name: String,
    pub icon: String,
    pub goal: String,
    pub working_message: String,
}

#[derive(Debug, Clone)]
pub struct Roster {
    agents: BTreeMap<Role, AgentProfile>,
}

impl Roster {
    /// Loads the roster bundled with the binary.
    pub fn load() -> Result<Self, RosterError> {
        Self::from_toml(ROSTER)
    }

    pub fn from_toml(content: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(content)?;

        let mut agents = BTreeMap::new();
        for agent in file.agent {
            let role = agent.id;
            if agents.insert(role, agent).is_some() {
                return Err(RosterError::DuplicateRole(role));
            }
        }

        if let Some(missing) = Role::ALL.iter().find(|role| !agents.contains_key(*role)) {
            return Err(RosterError::MissingRole(*missing));
        }

        Ok(Self { agents })
    }

    /// Agents in stage order.
    pub fn agents(&self) -> impl Iterator<Item = &AgentProfile> {
        Role::ALL.iter().filter_map(|role| self.agents.get(role))
    }

    pub fn get(&self, role: Role) -> Option<&AgentProfile> {
        self.agents.get(&role)
    }

    /// Icon and name for a panel header, falling back to the bare role name.
    pub fn header(&self, role: Role) -> String {
        match self.get(role) {
            Some(agent) => format!("{} {}", agent.icon, agent.name),
            None => role.name().to_string(),
        }
    }
}
