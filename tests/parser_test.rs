use chrono::NaiveDate;
use indoc::indoc;
use pretty_assertions::assert_eq;
use trackmap::{parse_rows, DueStatus, Tracker};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

const EXPORT: &str = indoc! {r#"
    #,Tracker,Status,Subject,Assignee,Priority,Due date,Closed,Parent task,Estimated time,% Done,Tags,Private
    10,Epic,In Progress,Checkout flow,Ada Lovelace,Normal,2025-02-01,,,40,25,"UI, Payments",0
    11,Story,Closed,Cart page,Grace Hopper,High,2025-01-10,2025-01-20,10,16,100,UI,0
    12,Bug,New,Cart crash,Grace Hopper,Urgent,,,11,2,0,,1
    13,Task,Rejected,Dead idea,,Normal,,,10,0,0,,0
"#};

#[test]
fn parses_rows_in_file_order_with_derived_fields() {
    let outcome = parse_rows("Web%20Shop.csv", EXPORT, today()).unwrap();
    assert_eq!(outcome.issues.len(), 3);

    let epic = &outcome.issues[0];
    assert_eq!(epic.id, 10);
    assert_eq!(epic.tracker, Tracker::Epic);
    assert_eq!(epic.project_name, "Web Shop");
    assert_eq!(epic.project_slug, "web-shop");
    assert_eq!(epic.estimated_time, 40.0);
    assert_eq!(epic.percent_done, 25.0);
    assert_eq!(epic.tags, vec!["UI".to_string(), "Payments".to_string()]);
    assert_eq!(epic.parent_task, None);
    // Due in the future, not closed: still in progress.
    assert_eq!(epic.due_status, DueStatus::InProgress);

    let story = &outcome.issues[1];
    assert_eq!(story.parent_task, Some(10));
    // Closed status wins even though the closed date is past the due date.
    assert_eq!(story.due_status, DueStatus::OnTime);

    let bug = &outcome.issues[2];
    assert!(bug.private);
    assert_eq!(bug.due_status, DueStatus::InProgress);
}

#[test]
fn rejected_rows_never_reach_the_output() {
    let outcome = parse_rows("Web Shop.csv", EXPORT, today()).unwrap();
    assert!(outcome.issues.iter().all(|i| i.status != "Rejected"));
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_rows("Web Shop.csv", EXPORT, today()).unwrap();
    let second = parse_rows("Web Shop.csv", EXPORT, today()).unwrap();
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn missing_columns_default_to_empty_values() {
    let content = indoc! {"
        Subject,Status
        Bare row,New
    "};
    let outcome = parse_rows("Minimal.csv", content, today()).unwrap();
    let issue = &outcome.issues[0];
    assert_eq!(issue.id, 0);
    assert_eq!(issue.tracker, Tracker::Other(String::new()));
    assert_eq!(issue.assignee, "");
    assert_eq!(issue.spent_time, 0.0);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn malformed_numerics_warn_but_keep_the_row() {
    let content = indoc! {"
        #,Tracker,Status,Subject,Parent task,% Done
        abc,Bug,New,Messy,def,many
    "};
    let outcome = parse_rows("Messy.csv", content, today()).unwrap();
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].id, 0);
    assert_eq!(outcome.issues[0].parent_task, None);
    assert_eq!(outcome.issues[0].percent_done, 0.0);
    assert_eq!(outcome.warnings.len(), 3);
    assert_eq!(outcome.warnings[0].file, "Messy.csv");
    assert_eq!(outcome.warnings[0].line, 2);
}

#[test]
fn late_when_today_passes_an_open_due_date() {
    let content = indoc! {"
        #,Tracker,Status,Subject,Due date
        1,Task,Waiting,Overdue,2025-01-01
    "};
    let outcome = parse_rows("Alpha.csv", content, today()).unwrap();
    assert_eq!(outcome.issues[0].due_status, DueStatus::Late);
}
