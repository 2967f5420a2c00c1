//! Bug counting rule engine.
//!
//! Classification is exclusion-first: attribution (`Triggered By`) and
//! category exclusions knock an issue out before any priority is looked at.
//! A bug carrying the post-release category moves to the post-release bucket
//! instead of the critical bucket it would otherwise occupy; the two buckets
//! are mutually exclusive for any single issue.

use crate::core::{split_list, CombinedIssue, Issue, Tracker};

/// Categories that mark a defect as not attributable to the delivery team.
pub const EXCLUDED_CATEGORIES: &[&str] = &["Requirement Error", "Test Environment Error"];

/// Exclusion set used by the aggregator variant that also discounts
/// externally-caused defects.
pub const EXTENDED_EXCLUDED_CATEGORIES: &[&str] = &[
    "Requirement Error",
    "Test Environment Error",
    "External Dependency Error",
];

/// Priorities treated as critical.
pub const CRITICAL_PRIORITIES: &[&str] = &["Urgent", "Immediate"];

/// Category marking a bug found after release.
pub const POST_RELEASE_CATEGORY: &str = "Post-Release Issue";

/// Bucket a bug lands in after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugBucket {
    Critical,
    High,
    PostRelease,
}

/// Canonical classification used by the hierarchy rollup.
///
/// Returns `None` for anything that is not a countable bug: wrong tracker,
/// an excluded category, a non-critical post-release carrier, or a priority
/// below High.
pub fn classify_bug(issue: &Issue, exclusions: &[&str]) -> Option<BugBucket> {
    if has_excluded_category(issue, exclusions) {
        return None;
    }
    if issue.tracker != Tracker::Bug {
        return None;
    }
    let critical = CRITICAL_PRIORITIES.contains(&issue.priority.as_str());
    if has_category(issue, POST_RELEASE_CATEGORY) {
        return critical.then_some(BugBucket::PostRelease);
    }
    if critical {
        Some(BugBucket::Critical)
    } else if issue.priority == "High" {
        Some(BugBucket::High)
    } else {
        None
    }
}

/// Interactive counting filter; drives both the aggregation-time counts and
/// the UI click-through subsets.
#[derive(Debug, Clone)]
pub struct BugFilter<'a> {
    /// Restrict to bugs attributable to this member. A bug whose
    /// `Triggered By` names someone else does not count against them.
    pub member: Option<&'a str>,
    /// Count the post-release partition instead of the pre-release one.
    pub post_release: bool,
    /// Explicit priority set; when present it replaces the critical/high
    /// classification with a plain membership test.
    pub priorities: Option<&'a [&'a str]>,
    pub exclusions: &'a [&'a str],
}

impl Default for BugFilter<'_> {
    fn default() -> Self {
        Self {
            member: None,
            post_release: false,
            priorities: None,
            exclusions: EXCLUDED_CATEGORIES,
        }
    }
}

impl<'a> BugFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_member(member: &'a str) -> Self {
        Self {
            member: Some(member),
            ..Self::default()
        }
    }

    pub fn post_release(mut self, post_release: bool) -> Self {
        self.post_release = post_release;
        self
    }

    pub fn with_priorities(mut self, priorities: &'a [&'a str]) -> Self {
        self.priorities = Some(priorities);
        self
    }

    pub fn with_exclusions(mut self, exclusions: &'a [&'a str]) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Whether one issue passes this filter.
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(member) = self.member {
            if !issue.triggered_by.trim().is_empty()
                && !split_list(&issue.triggered_by).iter().any(|n| n == member)
            {
                return false;
            }
        }
        if has_excluded_category(issue, self.exclusions) {
            return false;
        }
        if issue.tracker != Tracker::Bug {
            return false;
        }
        if let Some(priorities) = self.priorities {
            return priorities.contains(&issue.priority.as_str());
        }
        if !CRITICAL_PRIORITIES.contains(&issue.priority.as_str()) {
            return false;
        }
        has_category(issue, POST_RELEASE_CATEGORY) == self.post_release
    }
}

/// Count the issues matching the filter.
pub fn count_bugs(issues: &[CombinedIssue], filter: &BugFilter<'_>) -> usize {
    issues.iter().filter(|issue| filter.matches(issue)).count()
}

/// The matching subset itself, for call sites that build drill-down views.
pub fn matching_issues<'i>(
    issues: &'i [CombinedIssue],
    filter: &BugFilter<'_>,
) -> Vec<&'i CombinedIssue> {
    issues.iter().filter(|issue| filter.matches(issue)).collect()
}

fn has_excluded_category(issue: &Issue, exclusions: &[&str]) -> bool {
    split_list(&issue.issue_categories)
        .iter()
        .any(|category| exclusions.contains(&category.as_str()))
}

fn has_category(issue: &Issue, category: &str) -> bool {
    split_list(&issue.issue_categories)
        .iter()
        .any(|c| c == category)
}
