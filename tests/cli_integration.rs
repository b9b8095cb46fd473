//! Integration tests for the pwdmanager CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The interactive menu needs a terminal, so we drive the scripted
//! subcommands, each against its own temporary home directory.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command pointing at the pwdmanager binary, isolated in `home`.
fn pwdmanager(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pwdmanager").expect("binary should exist");
    cmd.env_remove("PWDMANAGER_DB")
        .env_remove("PWDMANAGER_LOG")
        .arg("--home")
        .arg(home.path());
    cmd
}

fn save(home: &TempDir, keyword: &str, value: &str) {
    pwdmanager(home)
        .args(["save", keyword, value])
        .assert()
        .success();
}

#[test]
fn help_flag_shows_usage() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local password manager"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn version_flag_shows_version() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwdmanager"));
}

#[test]
fn save_then_view_renders_table() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");

    home.child("passwords.db").assert(predicate::path::exists());

    pwdmanager(&home)
        .args(["view", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| Serial No. | Keyword | Secret | Last Updated",
        ))
        .stdout(predicate::str::contains("|         1. | github  | p4ss   | on "));
}

#[test]
fn save_reads_piped_stdin() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["save", "email"])
        .write_stdin("hunter22\n")
        .assert()
        .success();

    pwdmanager(&home)
        .args(["view", "email"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter22"));
}

#[test]
fn view_all_lists_in_insertion_order() {
    let home = TempDir::new().unwrap();
    save(&home, "zeta", "z-pass");
    save(&home, "alpha", "a-pass");

    let output = pwdmanager(&home).args(["view", "all"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let zeta = stdout.find("zeta").unwrap();
    let alpha = stdout.find("alpha").unwrap();
    assert!(zeta < alpha);
    assert!(stdout.contains("|         2. | alpha "));
}

#[test]
fn save_rejects_wildcard_keyword() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["save", "all", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't be 'all'"));
}

#[test]
fn save_rejects_duplicate_keyword() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");

    pwdmanager(&home)
        .args(["save", "github", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already been saved"));

    pwdmanager(&home)
        .args(["view", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p4ss"));
}

#[test]
fn update_replaces_password() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");
    save(&home, "email", "hunter22");

    pwdmanager(&home)
        .args(["update", "github", "n3w-p4ss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated successfully"));

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n3w-p4ss"))
        .stdout(predicate::str::contains("hunter22"))
        .stdout(predicate::str::contains("| p4ss ").not());
}

#[test]
fn update_missing_keyword_fails() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["update", "nope", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password has been saved"));
}

#[test]
fn view_on_empty_store_says_so() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No password has been saved."));
}

#[test]
fn view_missing_keyword_fails() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");
    pwdmanager(&home)
        .args(["view", "gitlab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gitlab"));
}

#[test]
fn delete_one_keeps_the_rest() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");
    save(&home, "email", "hunter22");

    pwdmanager(&home)
        .args(["delete", "github", "--force"])
        .assert()
        .success();

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("github").not());
}

#[test]
fn delete_all_empties_store() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");
    save(&home, "email", "hunter22");

    pwdmanager(&home)
        .args(["delete", "all", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 removed"));

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No password has been saved."));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let home = TempDir::new().unwrap();
    let output = pwdmanager(&home)
        .args(["generate", "--length", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 12);
}

#[test]
fn generate_rejects_bad_length() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["generate", "--length", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 8 and 32"));
}

#[test]
fn generate_and_save() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["generate", "--length", "20", "--save", "wifi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved successfully"));

    pwdmanager(&home)
        .args(["view", "wifi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| wifi "));
}

#[test]
fn corrupt_database_is_reset() {
    let home = TempDir::new().unwrap();
    home.child("passwords.db").write_binary(b"PWDB\x01garbage").unwrap();

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reset"))
        .stdout(predicate::str::contains("No password has been saved."));
}

#[test]
fn config_file_controls_db_name_and_offset() {
    let home = TempDir::new().unwrap();
    home.child("pwdmanager.toml")
        .write_str("db_file_name = \"custom.db\"\nutc_offset_minutes = 0\n")
        .unwrap();

    save(&home, "github", "p4ss");
    home.child("custom.db").assert(predicate::path::exists());
    home.child("passwords.db").assert(predicate::path::missing());
}

#[test]
fn explicit_db_flag_wins() {
    let home = TempDir::new().unwrap();
    let db = home.child("elsewhere.db");

    pwdmanager(&home)
        .arg("--db")
        .arg(db.path())
        .args(["save", "github", "p4ss"])
        .assert()
        .success();

    db.assert(predicate::path::exists());
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    home.child("pwdmanager.toml").write_str("not valid {{toml").unwrap();

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pwdmanager"));
}

#[test]
fn menu_without_terminal_fails_cleanly() {
    let home = TempDir::new().unwrap();
    pwdmanager(&home)
        .write_stdin("1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("1. Generate Password"))
        .stdout(predicate::str::contains("6. Quit"))
        .stderr(predicate::str::contains("Prompt failed"));
}

#[test]
fn padded_wildcard_keyword_is_rejected() {
    let home = TempDir::new().unwrap();
    save(&home, "github", "p4ss");

    pwdmanager(&home)
        .args(["save", " all", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't be 'all'"));

    pwdmanager(&home)
        .args(["generate", "--save", "all "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't be 'all'"));

    pwdmanager(&home)
        .args(["view", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| github "));
}

#[test]
fn padded_keyword_is_stored_trimmed() {
    let home = TempDir::new().unwrap();
    save(&home, "github ", "p4ss");

    pwdmanager(&home)
        .args(["view", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|         1. | github  | p4ss   | on "));

    pwdmanager(&home)
        .args(["update", " github", "n3w-p4ss"])
        .assert()
        .success();

    pwdmanager(&home)
        .args(["view", "github "])
        .assert()
        .success()
        .stdout(predicate::str::contains("n3w-p4ss"));

    pwdmanager(&home)
        .args(["delete", "github ", "--force"])
        .assert()
        .success();

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No password has been saved."));
}

#[test]
fn first_run_reports_database_location() {
    let home = TempDir::new().unwrap();
    let db = home.child("passwords.db");

    pwdmanager(&home)
        .args(["view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a new password database at"))
        .stdout(predicate::str::contains(db.path().display().to_string()));
}
