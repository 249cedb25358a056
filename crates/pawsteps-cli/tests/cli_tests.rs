use assert_cmd::Command;
use jiff::{Timestamp, tz::TimeZone};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn paws_cmd() -> Command {
    let mut cmd = Command::cargo_bin("paws").expect("Failed to find paws binary");
    cmd.arg("--no-color");
    cmd
}

/// Today's UTC date, the day key the plan store uses.
fn today_utc() -> String {
    Timestamp::now().to_zoned(TimeZone::UTC).date().to_string()
}

/// Sets up a profile with today's date of birth, so the puppy is in week 1.
fn set_week_one_profile(db_path: &str) {
    paws_cmd()
        .args([
            "--database-file",
            db_path,
            "profile",
            "set",
            "Biscuit",
            &today_utc(),
            "--sex",
            "female",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved for Biscuit"));
}

#[test]
fn test_cli_profile_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    paws_cmd()
        .args(["--database-file", db_path, "profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Biscuit"))
        .stdout(predicate::str::contains("- Sex: female"));

    paws_cmd()
        .args(["--database-file", db_path, "profile", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile removed"));

    paws_cmd()
        .args(["--database-file", db_path, "profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile set."));
}

#[test]
fn test_cli_profile_set_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    paws_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "profile",
            "set",
            "Biscuit",
            "yesterday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_of_birth"));
}

#[test]
fn test_cli_today_requires_profile() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    paws_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile yet"));
}

#[test]
fn test_cli_today_shows_week_one_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    // Week 1 has four lessons, all of which fit in a single plan.
    paws_cmd()
        .args(["--database-file", db_path, "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week 1:"))
        .stdout(predicate::str::contains("name-response"))
        .stdout(predicate::str::contains("0/4 practiced"));
}

#[test]
fn test_cli_today_without_subcommand() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    paws_cmd()
        .args(["--database-file", db_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week 1:"));
}

#[test]
fn test_cli_today_with_week_override() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    paws_cmd()
        .args(["--database-file", db_path, "today", "--week", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week 3:"));
}

#[test]
fn test_cli_practice_toggles_lesson() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    paws_cmd()
        .args([
            "--database-file",
            db_path,
            "practice",
            "name-response",
            "--note",
            "Came running twice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ `name-response` practiced today"));

    paws_cmd()
        .args(["--database-file", db_path, "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/4 practiced"));

    // Toggling again unmarks it.
    paws_cmd()
        .args(["--database-file", db_path, "practice", "name-response"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "○ `name-response` no longer practiced today",
        ));
}

#[test]
fn test_cli_practice_rejects_unknown_lesson() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    paws_cmd()
        .args(["--database-file", db_path, "practice", "not-a-lesson"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in the curriculum"));
}

#[test]
fn test_cli_practice_outside_plan_logs_anyway() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    set_week_one_profile(db_path);

    // A week-5 lesson is not in the week-1 plan.
    paws_cmd()
        .args(["--database-file", db_path, "practice", "place-cue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in today's plan"))
        .stdout(predicate::str::contains("✓ `place-cue` practiced today"));
}

#[test]
fn test_cli_journal_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    paws_cmd()
        .args([
            "--database-file",
            db_path,
            "journal",
            "add",
            "First night went better than expected",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal entry 1 added"));

    paws_cmd()
        .args(["--database-file", db_path, "journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "First night went better than expected",
        ));
}

#[test]
fn test_cli_journal_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    paws_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "journal",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet."));
}

#[test]
fn test_cli_tips_search() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_path = db_path.to_str().unwrap();

    paws_cmd()
        .args(["--database-file", db_path, "tips"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House Training"))
        .stdout(predicate::str::contains("Biting"));

    paws_cmd()
        .args(["--database-file", db_path, "tips", "accidents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House Training"))
        .stdout(predicate::str::contains("Biting").not());

    paws_cmd()
        .args(["--database-file", db_path, "tips", "zzz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tips matched"));
}

#[test]
fn test_cli_weeks_lists_curriculum() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Works without a profile; curriculum content is static.
    paws_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "weeks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Week 1: Welcome Home"))
        .stdout(predicate::str::contains("## Week 8: Graduation Week"))
        .stdout(predicate::str::contains("- Lessons: "));
}

#[test]
fn test_cli_content_validate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    paws_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "content",
            "validate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content OK"));
}
