//! Team roster configuration.
//!
//! The roster is the static Teams → Members → Role input consumed by the
//! member rollup and the headcount summaries. It is loaded from a TOML file
//! and passed explicitly into aggregation; there is no ambient global. An
//! empty roster switches the member rollup into fallback mode, where every
//! name found in the data is accepted.

use crate::core::{Error, Result, Role};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Roster {
    /// Load a roster from a TOML file (`[[teams]]` tables).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::file_read(path, source))?;
        toml::from_str(&content).map_err(|e| {
            Error::config(format!("invalid roster file {}: {e}", path.display()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.teams.iter().all(|team| team.members.is_empty())
    }

    pub fn members(&self) -> impl Iterator<Item = &TeamMember> {
        self.teams.iter().flat_map(|team| team.members.iter())
    }

    pub fn developers(&self) -> impl Iterator<Item = &TeamMember> {
        self.members().filter(|m| m.role == Role::Developer)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members().any(|m| m.name == name)
    }

    /// Role lookup; unmatched names default to `Other`.
    pub fn role_of(&self, name: &str) -> Role {
        self.members()
            .find(|m| m.name == name)
            .map(|m| m.role)
            .unwrap_or_default()
    }
}

/// Starter roster written by `trackmap init`.
pub const SAMPLE_ROSTER: &str = r#"# Trackmap team roster
#
# Member names must match the Assignee / Done by values in the export.
# Recognized roles: Developer, Designer, PM, Tester, Other.

[[teams]]
name = "Platform"
members = [
    { name = "Ada Lovelace", role = "Developer" },
    { name = "Grace Hopper", role = "Developer" },
    { name = "Barbara Liskov", role = "PM" },
]

[[teams]]
name = "QA"
members = [
    { name = "Margaret Hamilton", role = "Tester" },
]
"#;
