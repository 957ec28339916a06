//! End-to-end tests driving the `jlog` binary against a temporary journal.

#![allow(missing_docs)]

use std::{
    fs,
    path::Path,
    process::{Command, Output, Stdio},
};

fn jlog(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jlog"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn posts_file(root: &Path) -> std::path::PathBuf {
    root.join("journal.posts.v1.json")
}

fn stored_ids(root: &Path) -> Vec<String> {
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(posts_file(root)).unwrap()).unwrap();
    raw["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_without_journal_shows_seed_entries() {
    let tmp = tempfile::tempdir().unwrap();

    let output = jlog(tmp.path(), &["list"]);

    assert!(output.status.success());
    let text = stdout(&output);
    let first = text.find("Planning the week").unwrap();
    let second = text.find("First practice session").unwrap();
    assert!(first < second);
    assert!(!posts_file(tmp.path()).exists());
}

#[test]
fn added_entry_is_persisted_and_searchable() {
    let tmp = tempfile::tempdir().unwrap();

    let output = jlog(
        tmp.path(),
        &[
            "add",
            "--title",
            "Garden notes",
            "--content",
            "Planted tomatoes",
            "--date",
            "2027-04-01",
            "--tags",
            "garden, , spring,",
        ],
    );
    assert!(output.status.success());
    assert_eq!(stored_ids(tmp.path()).len(), 3);

    let output = jlog(tmp.path(), &["list", "--output", "json", "SPRING"]);
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Garden notes");
    assert_eq!(rows[0]["tags"], serde_json::json!(["garden", "spring"]));
}

#[test]
fn entry_without_title_is_not_added() {
    let tmp = tempfile::tempdir().unwrap();

    let output = jlog(tmp.path(), &["add", "--content", "Body only"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("a title is required"));
    assert!(!posts_file(tmp.path()).exists());
}

#[test]
fn delete_with_yes_removes_entry() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(jlog(tmp.path(), &["init"]).status.success());

    let output = jlog(tmp.path(), &["delete", "seed-2026-01-27", "--yes"]);

    assert!(output.status.success());
    assert_eq!(stored_ids(tmp.path()), ["seed-2026-01-28"]);
}

#[test]
fn deleting_unknown_entry_fails() {
    let tmp = tempfile::tempdir().unwrap();

    let output = jlog(tmp.path(), &["delete", "nope", "--yes"]);

    assert!(!output.status.success());
}

#[test]
fn unconfirmed_reset_leaves_file_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(jlog(tmp.path(), &["init", "--empty"]).status.success());
    jlog(tmp.path(), &["add", "-t", "Keep me", "-c", "Body"]);
    let before = fs::read(posts_file(tmp.path())).unwrap();

    let output = jlog(tmp.path(), &["reset"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Cancelled"));
    assert_eq!(fs::read(posts_file(tmp.path())).unwrap(), before);
}

#[test]
fn confirmed_reset_restores_seed_entries() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(jlog(tmp.path(), &["init", "--empty"]).status.success());
    jlog(tmp.path(), &["add", "-t", "Gone soon", "-c", "Body"]);

    let output = jlog(tmp.path(), &["reset", "--yes"]);

    assert!(output.status.success());
    assert_eq!(
        stored_ids(tmp.path()),
        ["seed-2026-01-28", "seed-2026-01-27"]
    );
}

#[test]
fn init_twice_fails() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(jlog(tmp.path(), &["init"]).status.success());
    assert!(!jlog(tmp.path(), &["init"]).status.success());
}
