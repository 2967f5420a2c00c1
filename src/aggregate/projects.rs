//! Project rollup: one entry per distinct project name in the pool.

use crate::aggregate::hierarchy::build_features;
use crate::config::Roster;
use crate::core::{slugify, split_list, CombinedIssue, Project};
use std::collections::{HashMap, HashSet};

/// Group the pool by project name (first-seen order) and roll each group up.
pub fn build_projects(pool: &[CombinedIssue], roster: &Roster) -> Vec<Project> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<CombinedIssue>> = HashMap::new();
    for issue in pool {
        let name = issue.project_name.as_str();
        if !groups.contains_key(name) {
            order.push(name);
        }
        groups.entry(name).or_default().push(issue.clone());
    }

    order
        .into_iter()
        .map(|name| {
            let rows = &groups[name];
            let (total_members, total_devs) = roster_presence(rows, roster);
            Project {
                name: name.to_string(),
                slug: slugify(name),
                total_items: rows.len(),
                total_members,
                total_devs,
                features: build_features(rows),
            }
        })
        .collect()
}

/// Count how many roster members (and developers among them) show up in the
/// rows' assignee / done-by fields.
pub(crate) fn roster_presence(rows: &[CombinedIssue], roster: &Roster) -> (usize, usize) {
    let names = attributed_names(rows);
    let total_members = roster
        .members()
        .filter(|member| names.contains(member.name.as_str()))
        .count();
    let total_devs = roster
        .developers()
        .filter(|member| names.contains(member.name.as_str()))
        .count();
    (total_members, total_devs)
}

fn attributed_names(rows: &[CombinedIssue]) -> HashSet<String> {
    let mut names = HashSet::new();
    for issue in rows {
        let assignee = issue.assignee.trim();
        if !assignee.is_empty() {
            names.insert(assignee.to_string());
        }
        for name in split_list(&issue.done_by) {
            names.insert(name);
        }
    }
    names
}
