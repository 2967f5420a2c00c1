//! Row parser: one CSV export blob in, typed issues out.
//!
//! The export schema is fixed (Redmine-style column names). Missing columns
//! degrade to empty values and malformed cells are defaulted with a warning
//! on the side channel; the only fatal conditions are unreadable or empty
//! content. Rows whose status is `Rejected` are dropped before anything
//! downstream sees them.

use crate::core::{
    slugify, split_list, CoercionWarning, CombinedIssue, DueStatus, Error, Issue, Result, Tracker,
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;

/// Parsed rows plus the coercion warnings collected along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub issues: Vec<CombinedIssue>,
    pub warnings: Vec<CoercionWarning>,
}

/// Parse one file's content into issues, in file row order.
///
/// `today` anchors the due-status derivation for rows that have a due date
/// but no closed date; callers pass the current date, tests pin a fixed one.
pub fn parse_rows(file_name: &str, content: &str, today: NaiveDate) -> Result<ParseOutcome> {
    if content.trim().is_empty() {
        return Err(Error::EmptyFile {
            name: file_name.to_string(),
        });
    }

    let file_project_name = project_name_from_file(file_name);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| Error::Csv {
            name: file_name.to_string(),
            source,
        })?
        .clone();
    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();

    let mut outcome = ParseOutcome::default();

    for record in reader.records() {
        let record = record.map_err(|source| Error::Csv {
            name: file_name.to_string(),
            source,
        })?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let mut row = RowReader {
            file_name,
            columns: &columns,
            record: &record,
            line,
            warnings: &mut outcome.warnings,
        };

        let issue = Issue {
            id: row.int("#").unwrap_or(0),
            tracker: Tracker::from(row.text("Tracker")),
            status: row.text("Status"),
            subject: row.text("Subject"),
            author: row.text("Author"),
            assignee: row.text("Assignee"),
            priority: row.text("Priority"),
            found_version: row.text("Found Version"),
            due_date: row.text("Due date"),
            target_version: row.text("Target version"),
            related_app_version: row.text("Related app version"),
            sprint: row.text("Sprint"),
            project: row.text("Project"),
            parent_task: row.int("Parent task"),
            parent_task_subject: row.text("Parent task subject"),
            updated: row.text("Updated"),
            category: row.text("Category"),
            start_date: row.text("Start date"),
            estimated_time: row.float("Estimated time"),
            total_estimated_time: row.float("Total estimated time"),
            spent_time: row.float("Spent time"),
            total_spent_time: row.float("Total spent time"),
            percent_done: row.float("% Done"),
            created: row.text("Created"),
            closed: row.text("Closed"),
            last_updated_by: row.text("Last updated by"),
            related_issues: row.text("Related issues"),
            files: row.text("Files"),
            tags: split_list(&row.text("Tags")),
            done_by: row.text("Done by"),
            position: row.text("Position"),
            issue_categories: row.text("Issue Categories"),
            private: row.text("Private") == "1",
            story_points: row.float("Story points"),
            triggered_by: row.text("Triggered By"),
        };

        if issue.status == "Rejected" {
            continue;
        }

        let explicit_name = row.text("Project Name");
        let project_name = if explicit_name.is_empty() {
            file_project_name.clone()
        } else {
            explicit_name
        };
        let due_status = due_status_for(&issue.status, &issue.due_date, &issue.closed, today);

        outcome.issues.push(CombinedIssue {
            project_slug: slugify(&project_name),
            project_name,
            due_status,
            issue,
        });
    }

    Ok(outcome)
}

/// Strip the `.csv` extension and decode `%20` escapes left over from
/// browser uploads.
fn project_name_from_file(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(".csv")
        .or_else(|| file_name.strip_suffix(".CSV"))
        .unwrap_or(file_name);
    stem.replace("%20", " ")
}

/// Classify a row as on time, late or still in progress.
///
/// Closed rows are on time by definition. With both dates present the
/// comparison is date-only (time of day stripped); with only a due date the
/// row is late once `today` passes it.
fn due_status_for(status: &str, due_date: &str, closed_date: &str, today: NaiveDate) -> DueStatus {
    if status == "Closed" {
        return DueStatus::OnTime;
    }
    let due = parse_export_date(due_date);
    let closed = parse_export_date(closed_date);
    match (due, closed) {
        (Some(due), Some(closed)) => {
            if closed > due {
                DueStatus::Late
            } else {
                DueStatus::OnTime
            }
        }
        (Some(due), None) => {
            if today > due {
                DueStatus::Late
            } else {
                DueStatus::InProgress
            }
        }
        _ => DueStatus::InProgress,
    }
}

/// Parse the date part of an export cell, tolerating a trailing time
/// component. Accepts `YYYY-MM-DD` and `MM/DD/YYYY`.
fn parse_export_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    if date_part.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%m/%d/%Y"))
        .ok()
}

/// Cursor over one record that records a warning for every cell it has to
/// default.
struct RowReader<'a> {
    file_name: &'a str,
    columns: &'a HashMap<&'a str, usize>,
    record: &'a StringRecord,
    line: u64,
    warnings: &'a mut Vec<CoercionWarning>,
}

impl RowReader<'_> {
    fn raw(&self, column: &str) -> &str {
        self.columns
            .get(column)
            .and_then(|&idx| self.record.get(idx))
            .unwrap_or("")
    }

    fn text(&self, column: &str) -> String {
        self.raw(column).to_string()
    }

    fn int(&mut self, column: &str) -> Option<u64> {
        let raw = self.raw(column).trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.warn(column);
                None
            }
        }
    }

    fn float(&mut self, column: &str) -> f64 {
        let raw = self.raw(column).trim();
        if raw.is_empty() {
            return 0.0;
        }
        match raw.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.warn(column);
                0.0
            }
        }
    }

    fn warn(&mut self, column: &str) {
        let value = self.raw(column).to_string();
        self.warnings.push(CoercionWarning {
            file: self.file_name.to_string(),
            line: self.line,
            column: column.to_string(),
            value,
        });
    }
}
