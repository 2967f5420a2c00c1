//! Solution rollup: tag-keyed groupings over the whole pool.
//!
//! The hierarchy is reconstructed once globally and the resulting features
//! are indexed by tag; a feature tagged n ways appears under n solutions.

use crate::aggregate::hierarchy::{build_features, flattened_issues};
use crate::aggregate::projects::roster_presence;
use crate::config::Roster;
use crate::core::{slugify, CombinedIssue, Solution};
use std::collections::{HashMap, HashSet};

/// Build one Solution per distinct tag, in first-seen tag order.
pub fn build_solutions(pool: &[CombinedIssue], roster: &Roster) -> Vec<Solution> {
    let features = build_features(pool);

    let mut tags: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for issue in pool {
        for tag in &issue.tags {
            let tag = tag.trim();
            if !tag.is_empty() && seen.insert(tag) {
                tags.push(tag);
            }
        }
    }

    let mut by_tag: HashMap<&str, Vec<usize>> = HashMap::new();
    for (position, feature) in features.iter().enumerate() {
        for tag in &feature.issue.tags {
            let tag = tag.trim();
            if !tag.is_empty() {
                by_tag.entry(tag).or_default().push(position);
            }
        }
    }

    tags.into_iter()
        .map(|tag| {
            let tagged: Vec<_> = by_tag
                .get(tag)
                .into_iter()
                .flatten()
                .map(|&position| features[position].clone())
                .collect();
            let issues = flattened_issues(&tagged);
            let (total_members, total_devs) = roster_presence(&issues, roster);
            Solution {
                name: tag.to_string(),
                slug: slugify(tag),
                total_items: issues.len(),
                total_members,
                total_devs,
                features: tagged,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DueStatus, Issue, Tracker};

    fn tagged_epic(id: u64, tags: &[&str]) -> CombinedIssue {
        CombinedIssue {
            issue: Issue {
                id,
                tracker: Tracker::Epic,
                subject: format!("Epic {id}"),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Issue::default()
            },
            project_name: "Alpha".to_string(),
            project_slug: "alpha".to_string(),
            due_status: DueStatus::InProgress,
        }
    }

    #[test]
    fn multi_tag_feature_appears_under_every_tag() {
        let pool = vec![tagged_epic(1, &["UI", "Backend"]), tagged_epic(2, &["UI"])];
        let solutions = build_solutions(&pool, &Roster::default());
        let names: Vec<&str> = solutions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["UI", "Backend"]);
        assert_eq!(solutions[0].features.len(), 2);
        assert_eq!(solutions[1].features.len(), 1);
        assert_eq!(solutions[1].features[0].issue.id, 1);
    }

    #[test]
    fn untagged_pool_yields_no_solutions() {
        let pool = vec![tagged_epic(1, &[])];
        assert!(build_solutions(&pool, &Roster::default()).is_empty());
    }
}
