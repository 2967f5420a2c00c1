//! Member rollup: one entry per person found in assignee / done-by fields.

use crate::config::Roster;
use crate::core::{slugify, split_list, CombinedIssue, Member};
use std::collections::{HashMap, HashSet};

/// Attribute every pool row to its assignee and each done-by name.
///
/// Names must exist in the roster; with an empty roster every name found in
/// the data is accepted (fallback mode). A row is attributed to the same
/// member at most once even when they are both assignee and done-by.
pub fn build_members(pool: &[CombinedIssue], roster: &Roster) -> Vec<Member> {
    let fallback = roster.is_empty();
    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Member> = HashMap::new();
    let mut attributed: HashMap<String, HashSet<usize>> = HashMap::new();

    for (row, issue) in pool.iter().enumerate() {
        attribute(
            issue.assignee.trim(),
            row,
            issue,
            fallback,
            roster,
            &mut order,
            &mut by_name,
            &mut attributed,
        );
        for name in split_list(&issue.done_by) {
            attribute(
                &name,
                row,
                issue,
                fallback,
                roster,
                &mut order,
                &mut by_name,
                &mut attributed,
            );
        }
    }

    order
        .into_iter()
        .filter_map(|name| by_name.remove(&name))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn attribute(
    name: &str,
    row: usize,
    issue: &CombinedIssue,
    fallback: bool,
    roster: &Roster,
    order: &mut Vec<String>,
    by_name: &mut HashMap<String, Member>,
    attributed: &mut HashMap<String, HashSet<usize>>,
) {
    if name.is_empty() || !(fallback || roster.contains(name)) {
        return;
    }
    let member = by_name.entry(name.to_string()).or_insert_with(|| {
        order.push(name.to_string());
        Member {
            slug: slugify(name),
            name: name.to_string(),
            role: roster.role_of(name),
            issues: Vec::new(),
            projects: Vec::new(),
        }
    });
    if attributed.entry(name.to_string()).or_default().insert(row) {
        member.issues.push(issue.clone());
        if !member.projects.iter().any(|p| p == &issue.project_name) {
            member.projects.push(issue.project_name.clone());
        }
    }
}
