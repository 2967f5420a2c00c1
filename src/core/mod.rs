pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    slugify, split_list, CoercionWarning, CombinedIssue, DashboardSnapshot, DueStatus, Feature, Issue, Member,
    Project, Role, Solution, Story, Tracker,
};
