//! Epic → Story → Issue reconstruction from the flat pool.
//!
//! The input is one grouping scope (one project's rows, or the whole pool
//! for tag rollups). Parent links are flat `Parent task` ids; a single pass
//! builds the child map and everything else follows encounter order, so the
//! output is stable for a fixed input order.

use crate::aggregate::bugs::{classify_bug, BugBucket, EXCLUDED_CATEGORIES};
use crate::core::{slugify, CombinedIssue, Feature, Story, Tracker};
use std::collections::HashMap;

/// Build the Feature tree for one scope.
///
/// Stories and stray children whose parent does not resolve to an in-scope
/// Feature are left out of the rollup; they remain in the flat pool and are
/// not an error.
pub fn build_features(issues: &[CombinedIssue]) -> Vec<Feature> {
    let mut children_of: HashMap<u64, Vec<&CombinedIssue>> = HashMap::new();
    for issue in issues {
        if let Some(parent) = issue.parent_task {
            children_of.entry(parent).or_default().push(issue);
        }
    }

    let mut features: Vec<Feature> = issues
        .iter()
        .filter(|issue| issue.tracker == Tracker::Epic)
        .map(|epic| Feature {
            slug: slugify(&epic.subject),
            issue: epic.clone(),
            stories: Vec::new(),
            others: Vec::new(),
            critical_bugs: 0,
            high_bugs: 0,
            post_release_bugs: 0,
        })
        .collect();
    let index: HashMap<u64, usize> = features
        .iter()
        .enumerate()
        .map(|(position, feature)| (feature.issue.id, position))
        .collect();

    for issue in issues.iter().filter(|i| i.tracker == Tracker::Story) {
        let children: Vec<CombinedIssue> = children_of
            .get(&issue.id)
            .map(|kids| kids.iter().map(|child| (*child).clone()).collect())
            .unwrap_or_default();

        let mut story = Story {
            parent: issue.parent_task.unwrap_or(0),
            issues: children,
            critical_bugs: 0,
            high_bugs: 0,
            post_release_bugs: 0,
            issue: issue.clone(),
        };
        for child in &story.issues {
            match classify_bug(child, EXCLUDED_CATEGORIES) {
                Some(BugBucket::Critical) => story.critical_bugs += 1,
                Some(BugBucket::High) => story.high_bugs += 1,
                Some(BugBucket::PostRelease) => story.post_release_bugs += 1,
                None => {}
            }
        }

        match index.get(&story.parent) {
            Some(&position) => {
                let feature = &mut features[position];
                feature.critical_bugs += story.critical_bugs;
                feature.high_bugs += story.high_bugs;
                feature.post_release_bugs += story.post_release_bugs;
                feature.stories.push(story);
            }
            None => log::debug!(
                "story #{} parent {} is not an in-scope feature, skipping",
                issue.id,
                story.parent
            ),
        }
    }

    // Non-Epic, non-Story children parented straight to an Epic count with
    // the same rule as story children; a child of anything else is skipped.
    for issue in issues {
        if issue.tracker == Tracker::Epic || issue.tracker == Tracker::Story {
            continue;
        }
        let Some(parent) = issue.parent_task else {
            continue;
        };
        let Some(&position) = index.get(&parent) else {
            continue;
        };
        let feature = &mut features[position];
        match classify_bug(issue, EXCLUDED_CATEGORIES) {
            Some(BugBucket::Critical) => feature.critical_bugs += 1,
            Some(BugBucket::High) => feature.high_bugs += 1,
            Some(BugBucket::PostRelease) => feature.post_release_bugs += 1,
            None => {}
        }
        feature.others.push(issue.clone());
    }

    features
}

/// Flatten a feature set to the issues it owns: every attached story, the
/// stories' direct children and the stray `others`.
pub fn flattened_issues(features: &[Feature]) -> Vec<CombinedIssue> {
    let mut all = Vec::new();
    for feature in features {
        for story in &feature.stories {
            all.push(story.issue.clone());
            all.extend(story.issues.iter().cloned());
        }
        all.extend(feature.others.iter().cloned());
    }
    all
}
