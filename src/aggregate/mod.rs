//! Pure aggregation passes over the flat issue pool.
//!
//! Each pass is a function of (pool, roster) with no state across calls; a
//! new import rebuilds everything from scratch.

pub mod bugs;
pub mod hierarchy;
pub mod members;
pub mod projects;
pub mod solutions;

pub use bugs::{classify_bug, count_bugs, matching_issues, BugBucket, BugFilter};
pub use hierarchy::{build_features, flattened_issues};
pub use members::build_members;
pub use projects::build_projects;
pub use solutions::build_solutions;

use crate::config::Roster;
use crate::core::DashboardSnapshot;
use crate::parse::ParseOutcome;
use chrono::{DateTime, Utc};

/// Run all three rollups over a combined pool and package the result.
///
/// The snapshot is the whole session model; callers hand it to the
/// presentation layer instead of sharing mutable state.
pub fn build_snapshot(
    outcome: ParseOutcome,
    roster: &Roster,
    generated_at: DateTime<Utc>,
) -> DashboardSnapshot {
    let projects = build_projects(&outcome.issues, roster);
    let solutions = build_solutions(&outcome.issues, roster);
    let members = build_members(&outcome.issues, roster);
    DashboardSnapshot {
        generated_at,
        issues: outcome.issues,
        projects,
        solutions,
        members,
        warnings: outcome.warnings,
    }
}
