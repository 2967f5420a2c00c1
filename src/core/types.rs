//! Domain model for tracker CSV exports.
//!
//! One parsed row is an [`Issue`]; [`CombinedIssue`] adds the fields derived
//! during ingestion (owning project, slug, due status). The hierarchy types
//! ([`Story`], [`Feature`]) and the rollup types ([`Project`], [`Solution`],
//! [`Member`]) are built from the flat pool by the aggregation passes and are
//! plain data consumed by the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Issue-type discriminator from the `Tracker` column.
///
/// Unrecognized tracker names are preserved verbatim in `Other` rather than
/// collapsed, so round-tripping an export never loses the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tracker {
    Epic,
    Story,
    Bug,
    Task,
    Suggestion,
    Other(String),
}

impl Tracker {
    pub fn as_str(&self) -> &str {
        match self {
            Tracker::Epic => "Epic",
            Tracker::Story => "Story",
            Tracker::Bug => "Bug",
            Tracker::Task => "Task",
            Tracker::Suggestion => "Suggestion",
            Tracker::Other(raw) => raw,
        }
    }
}

impl From<String> for Tracker {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Epic" => Tracker::Epic,
            "Story" => Tracker::Story,
            "Bug" => Tracker::Bug,
            "Task" => Tracker::Task,
            "Suggestion" => Tracker::Suggestion,
            _ => Tracker::Other(raw),
        }
    }
}

impl From<Tracker> for String {
    fn from(tracker: Tracker) -> Self {
        tracker.as_str().to_string()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Tracker::Other(String::new())
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-time classification derived from (status, due date, closed date).
///
/// Computed once at parse time and never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DueStatus {
    InProgress,
    OnTime,
    Late,
}

impl DueStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DueStatus::InProgress => "In Progress",
            DueStatus::OnTime => "On Time",
            DueStatus::Late => "Late",
        }
    }
}

/// Member role as configured in the team roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    Developer,
    Designer,
    #[serde(rename = "PM")]
    Pm,
    Tester,
    #[default]
    Other,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Pm => "PM",
            Role::Tester => "Tester",
            Role::Other => "Other",
        }
    }
}

/// One row of a tracker CSV export.
///
/// Date and timestamp columns are kept as the raw export strings; they are
/// parsed into real dates only where the due-status derivation needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u64,
    pub tracker: Tracker,
    pub status: String,
    pub subject: String,
    pub author: String,
    pub assignee: String,
    pub priority: String,
    pub found_version: String,
    pub due_date: String,
    pub target_version: String,
    pub related_app_version: String,
    pub sprint: String,
    pub project: String,
    pub parent_task: Option<u64>,
    pub parent_task_subject: String,
    pub updated: String,
    pub category: String,
    pub start_date: String,
    pub estimated_time: f64,
    pub total_estimated_time: f64,
    pub spent_time: f64,
    pub total_spent_time: f64,
    pub percent_done: f64,
    pub created: String,
    pub closed: String,
    pub last_updated_by: String,
    pub related_issues: String,
    pub files: String,
    pub tags: Vec<String>,
    pub done_by: String,
    pub position: String,
    pub issue_categories: String,
    pub private: bool,
    pub story_points: f64,
    pub triggered_by: String,
}

/// An [`Issue`] tagged with the project it came from and its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedIssue {
    #[serde(flatten)]
    pub issue: Issue,
    pub project_name: String,
    pub project_slug: String,
    pub due_status: DueStatus,
}

impl Deref for CombinedIssue {
    type Target = Issue;

    fn deref(&self) -> &Issue {
        &self.issue
    }
}

/// A Story-tracker issue with its direct children and per-story bug rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(flatten)]
    pub issue: CombinedIssue,
    /// Id of the owning Feature (the row's parent task, 0 when absent).
    pub parent: u64,
    pub issues: Vec<CombinedIssue>,
    pub critical_bugs: usize,
    pub high_bugs: usize,
    pub post_release_bugs: usize,
}

impl Deref for Story {
    type Target = CombinedIssue;

    fn deref(&self) -> &CombinedIssue {
        &self.issue
    }
}

/// An Epic-tracker issue with its attached stories, stray children and the
/// bug counts rolled up from both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(flatten)]
    pub issue: CombinedIssue,
    pub slug: String,
    pub stories: Vec<Story>,
    /// Non-Epic, non-Story children parented directly to this Feature.
    pub others: Vec<CombinedIssue>,
    pub critical_bugs: usize,
    pub high_bugs: usize,
    pub post_release_bugs: usize,
}

impl Deref for Feature {
    type Target = CombinedIssue;

    fn deref(&self) -> &CombinedIssue {
        &self.issue
    }
}

/// Rollup of one project's rows: its features plus headcount summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub slug: String,
    pub total_items: usize,
    pub total_members: usize,
    pub total_devs: usize,
    pub features: Vec<Feature>,
}

/// Tag-keyed grouping with the same shape as a project rollup. A Feature
/// carrying several tags appears under each of those solutions.
pub type Solution = Project;

/// Per-person rollup across the whole pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub slug: String,
    pub name: String,
    pub role: Role,
    pub issues: Vec<CombinedIssue>,
    /// Distinct project names this person touched, in first-seen order.
    pub projects: Vec<String>,
}

/// A non-fatal field coercion noticed while parsing a row.
///
/// Malformed cells are defaulted, never rejected; the warning is the
/// observable side channel for that leniency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoercionWarning {
    pub file: String,
    pub line: u64,
    pub column: String,
    pub value: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: cannot coerce {:?} in column {:?}, defaulted",
            self.file, self.line, self.value, self.column
        )
    }
}

/// Immutable result of one aggregation run over an uploaded file set.
///
/// A new import replaces the snapshot wholesale; nothing is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub issues: Vec<CombinedIssue>,
    pub projects: Vec<Project>,
    pub solutions: Vec<Solution>,
    pub members: Vec<Member>,
    pub warnings: Vec<CoercionWarning>,
}

/// Split a comma-joined cell into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase a value and collapse non-alphanumeric runs into single hyphens.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_preserves_unknown_names() {
        let tracker = Tracker::from("Support Request".to_string());
        assert_eq!(tracker, Tracker::Other("Support Request".to_string()));
        assert_eq!(tracker.as_str(), "Support Request");
    }

    #[test]
    fn tracker_maps_known_names() {
        assert_eq!(Tracker::from("Epic".to_string()), Tracker::Epic);
        assert_eq!(Tracker::from("Bug".to_string()), Tracker::Bug);
    }

    #[test]
    fn slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("CMS Dashboard 2.0"), "cms-dashboard-2-0");
        assert_eq!(slugify("  --Alpha--  "), "alpha");
        assert_eq!(slugify("ERP"), "erp");
        assert_eq!(slugify(""), "");
    }
}
