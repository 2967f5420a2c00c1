use assert_cmd::Command;
use std::fs;

fn write_export(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn analyze_two_files_emits_json_rollups() {
    let dir = tempfile::tempdir().unwrap();
    let alpha = write_export(
        dir.path(),
        "Alpha.csv",
        "#,Tracker,Status,Subject,Parent task,Priority\n1,Epic,New,Checkout,,Normal\n2,Story,New,Cart,1,Normal\n3,Bug,New,Crash,2,Urgent\n",
    );
    let beta = write_export(
        dir.path(),
        "Beta.csv",
        "#,Tracker,Status,Subject,Parent task,Priority\n4,Epic,New,Search,,Normal\n",
    );

    let output = Command::cargo_bin("trackmap")
        .unwrap()
        .arg("analyze")
        .arg(&alpha)
        .arg(&beta)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["projects"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["projects"][0]["name"], "Alpha");
    assert_eq!(snapshot["projects"][0]["features"][0]["criticalBugs"], 1);
}

#[test]
fn analyze_fails_on_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    Command::cargo_bin("trackmap")
        .unwrap()
        .arg("analyze")
        .arg(&missing)
        .assert()
        .failure();
}

#[test]
fn init_roster_round_trips_through_analyze() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("trackmap")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    let roster_path = dir.path().join("trackmap.toml");
    assert!(roster_path.exists());

    let export = write_export(
        dir.path(),
        "Alpha.csv",
        "#,Tracker,Status,Subject,Assignee\n1,Task,New,One,Ada Lovelace\n",
    );
    let output = Command::cargo_bin("trackmap")
        .unwrap()
        .arg("analyze")
        .arg(&export)
        .args(["--roster"])
        .arg(&roster_path)
        .args(["--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["members"][0]["name"], "Ada Lovelace");
    assert_eq!(snapshot["members"][0]["role"], "Developer");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("trackmap.toml"), "teams = []\n").unwrap();
    Command::cargo_bin("trackmap")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();
}
