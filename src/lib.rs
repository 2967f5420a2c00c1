// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod parse;

// Re-export commonly used types
pub use crate::core::{
    slugify, CoercionWarning, CombinedIssue, DashboardSnapshot, DueStatus, Error, Feature, Issue,
    Member, Project, Result, Role, Solution, Story, Tracker,
};

pub use crate::aggregate::{
    build_features, build_members, build_projects, build_snapshot, build_solutions, classify_bug,
    count_bugs, flattened_issues, matching_issues, BugBucket, BugFilter,
};

pub use crate::config::{Roster, Team, TeamMember};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::parse::{combine_sources, parse_rows, NamedSource, ParseOutcome};
