#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jot(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("jot"));
    cmd.env("JOT_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("JOT_LOG");
    cmd
}

fn list_output(home: &TempDir) -> String {
    let out = jot(home).arg("list").output().unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap()
}

/// Id of the first listed note whose title line contains `title`.
fn id_of(home: &TempDir, title: &str) -> String {
    list_output(home)
        .lines()
        .find(|l| l.contains(title))
        .and_then(|l| l.split_whitespace().next())
        .map(str::to_string)
        .unwrap_or_else(|| panic!("no note titled {title}"))
}

fn titles_in_order(home: &TempDir, titles: &[&str]) -> Vec<usize> {
    let out = list_output(home);
    titles
        .iter()
        .map(|t| out.find(t).unwrap_or_else(|| panic!("{t} not listed")))
        .collect()
}

#[test]
fn empty_list_shows_empty_state() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"))
        .stdout(predicate::str::contains("0 notes"));
}

#[test]
fn add_then_list() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["add", "Groceries", "milk\neggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: Groceries"));

    jot(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Created Today"))
        .stdout(predicate::str::contains("milk eggs"))
        .stdout(predicate::str::contains("1 note"));

    assert!(home.path().join("notes.json").exists());
}

#[test]
fn blank_note_is_rejected() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a title or content for your note.",
        ));
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn blank_title_becomes_untitled() {
    let home = TempDir::new().unwrap();
    jot(&home).args(["add", "", "body only"]).assert().success();
    jot(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled"));
}

#[test]
fn newest_first_and_edit_keeps_position() {
    let home = TempDir::new().unwrap();
    jot(&home).args(["add", "Alpha", "b"]).assert().success();
    jot(&home).args(["add", "Gamma", "d"]).assert().success();

    let pos = titles_in_order(&home, &["Gamma", "Alpha"]);
    assert!(pos[0] < pos[1]);

    let id = id_of(&home, "Alpha");
    jot(&home)
        .args(["edit", &id, "--title", "Alpha2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated: Alpha2"));

    let pos = titles_in_order(&home, &["Gamma", "Alpha2"]);
    assert!(pos[0] < pos[1]);
    assert!(list_output(&home).contains("Updated Today"));
}

#[test]
fn edit_unknown_note_fails() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["edit", "nope", "--content", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: nope"));
}

#[test]
fn delete_asks_for_confirmation() {
    let home = TempDir::new().unwrap();
    jot(&home).args(["add", "Keep me"]).assert().success();
    let id = id_of(&home, "Keep me");

    jot(&home)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"));
    assert!(list_output(&home).contains("Keep me"));

    jot(&home)
        .args(["rm", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: Keep me"));
    assert!(list_output(&home).contains("0 notes"));
}

#[test]
fn delete_with_yes_skips_prompt() {
    let home = TempDir::new().unwrap();
    jot(&home).args(["add", "Gone"]).assert().success();
    let id = id_of(&home, "Gone");

    jot(&home)
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: Gone"));
}

#[test]
fn config_disables_confirmation() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["config", "confirm-deletes", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm-deletes = false"));

    jot(&home).args(["add", "Quick"]).assert().success();
    let id = id_of(&home, "Quick");
    jot(&home).args(["delete", &id]).assert().success();
    assert!(list_output(&home).contains("0 notes"));
}

#[test]
fn storage_key_selects_file() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["config", "storage-key", "work"])
        .assert()
        .success();
    jot(&home).args(["add", "Standup"]).assert().success();

    assert!(home.path().join("work.json").exists());
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn corrupt_store_is_a_warning_not_a_crash() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.json"), "not json at all").unwrap();

    jot(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 notes"))
        .stderr(predicate::str::contains("could not be read"));
}

#[test]
fn unknown_log_level_is_an_error() {
    let home = TempDir::new().unwrap();
    jot(&home)
        .args(["--log-level", "verbos", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("initialising logging at level verbos"));

    jot(&home)
        .env("JOT_LOG", "nope")
        .assert()
        .failure();
}
