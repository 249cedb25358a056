use std::collections::HashMap;

use jiff::Timestamp;
use pawsteps_core::{
    Database, EngagementSignal, PuppyProfile,
    models::PROGRESS_SCHEMA_VERSION,
    store::kv::{DAILY_PLANS_NAMESPACE, PRACTICE_LOG_NAMESPACE, TRAINING_PROGRESS_NAMESPACE},
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

fn pool(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    assert!(_temp_file.path().exists());
}

#[test]
fn test_reopening_database_is_idempotent() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        db.write_blob("pup.scratch", 1, "{}").expect("Failed to write blob");
    }

    // Schema creation and migration probing must tolerate an existing file.
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let blob = db
        .read_blob("pup.scratch")
        .expect("Failed to read blob")
        .expect("Blob should survive reopen");
    assert_eq!(blob.version, 1);
    assert_eq!(blob.payload, "{}");
}

#[test]
fn test_blob_upsert_replaces_payload_and_version() {
    let (_temp_file, mut db) = create_test_db();

    db.write_blob("pup.scratch", 1, "\"old\"").expect("Failed to write blob");
    db.write_blob("pup.scratch", 2, "\"new\"").expect("Failed to write blob");

    let blob = db
        .read_blob("pup.scratch")
        .expect("Failed to read blob")
        .expect("Blob should exist");
    assert_eq!(blob.version, 2);
    assert_eq!(blob.payload, "\"new\"");
}

#[test]
fn test_missing_and_malformed_blobs_load_as_default() {
    let (_temp_file, mut db) = create_test_db();

    let absent: Vec<String> = db
        .load_state("pup.never_written")
        .expect("Missing blob should load as default");
    assert!(absent.is_empty());

    db.write_blob(PRACTICE_LOG_NAMESPACE, 1, "not json at all")
        .expect("Failed to write blob");
    let log = db
        .load_practice_log()
        .expect("Malformed blob should load as default");
    assert!(log.entries().is_empty());
}

#[test]
fn test_profile_round_trip_and_delete() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.load_profile().expect("Failed to load profile").is_none());

    let profile =
        PuppyProfile::from_input("Biscuit", "2026-06-01", "female").expect("valid profile");
    db.save_profile(&profile).expect("Failed to save profile");

    let loaded = db
        .load_profile()
        .expect("Failed to load profile")
        .expect("Profile should exist");
    assert_eq!(loaded, profile);

    db.delete_profile().expect("Failed to delete profile");
    assert!(db.load_profile().expect("Failed to load profile").is_none());
}

#[test]
fn test_ensure_plan_caches_and_regenerates() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");
    let full = pool(&["sit", "down", "leave-it-intro", "trade-game", "door-manners"]);

    let (first, generated) = db
        .ensure_plan("week-4", "2026-08-30", &full, &engagement, now)
        .expect("Failed to ensure plan");
    assert!(generated);
    assert!(!first.lesson_ids.is_empty());

    // Same pool: the cached plan is reused untouched.
    let (second, generated) = db
        .ensure_plan("week-4", "2026-08-30", &full, &engagement, now)
        .expect("Failed to ensure plan");
    assert!(!generated);
    assert_eq!(second, first);

    // A pool missing a selected lesson forces regeneration.
    let narrowed: Vec<String> = full
        .iter()
        .filter(|id| id.as_str() != first.lesson_ids[0])
        .cloned()
        .collect();
    let (third, generated) = db
        .ensure_plan("week-4", "2026-08-30", &narrowed, &engagement, now)
        .expect("Failed to ensure plan");
    assert!(generated);
    assert!(!third.lesson_ids.contains(&first.lesson_ids[0]));
}

#[test]
fn test_regeneration_carries_practiced_forward() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");
    let full = pool(&["sit", "down", "leave-it-intro", "trade-game", "door-manners"]);

    let (plan, _) = db
        .ensure_plan("week-4", "2026-08-30", &full, &engagement, now)
        .expect("Failed to ensure plan");
    let kept = plan.lesson_ids[1].clone();
    let dropped = plan.lesson_ids[0].clone();

    db.toggle_practiced_lesson("week-4", "2026-08-30", &kept)
        .expect("Failed to toggle")
        .expect("Lesson should be in plan");
    db.toggle_practiced_lesson("week-4", "2026-08-30", &dropped)
        .expect("Failed to toggle")
        .expect("Lesson should be in plan");

    let narrowed: Vec<String> = full.iter().filter(|id| **id != dropped).cloned().collect();
    let (regenerated, generated) = db
        .ensure_plan("week-4", "2026-08-30", &narrowed, &engagement, now)
        .expect("Failed to ensure plan");
    assert!(generated);

    // Practiced state survives for lessons still selected; the dropped
    // lesson's state goes with it.
    if regenerated.contains(&kept) {
        assert!(regenerated.is_practiced(&kept));
    }
    assert!(!regenerated.practiced.contains(&dropped));
}

#[test]
fn test_toggle_practiced_lesson_is_noop_outside_plan() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");

    // No plan at all for the key.
    assert_eq!(
        db.toggle_practiced_lesson("week-4", "2026-08-30", "sit")
            .expect("Failed to toggle"),
        None
    );

    db.ensure_plan("week-4", "2026-08-30", &pool(&["sit", "down"]), &engagement, now)
        .expect("Failed to ensure plan");
    assert_eq!(
        db.toggle_practiced_lesson("week-4", "2026-08-30", "not-in-plan")
            .expect("Failed to toggle"),
        None
    );
}

#[test]
fn test_plans_are_scoped_per_week_and_day() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");

    db.ensure_plan("week-4", "2026-08-30", &pool(&["sit", "down"]), &engagement, now)
        .expect("Failed to ensure plan");

    assert!(db.plan_for("week-4", "2026-08-30").expect("read failed").is_some());
    assert!(db.plan_for("week-5", "2026-08-30").expect("read failed").is_none());
    assert!(db.plan_for("week-4", "2026-08-31").expect("read failed").is_none());
}

#[test]
fn test_clear_daily_plans_leaves_other_stores() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");

    db.ensure_plan("week-4", "2026-08-30", &pool(&["sit", "down"]), &engagement, now)
        .expect("Failed to ensure plan");
    let profile =
        PuppyProfile::from_input("Biscuit", "2026-06-01", "male").expect("valid profile");
    db.save_profile(&profile).expect("Failed to save profile");

    db.clear_daily_plans().expect("Failed to clear plans");

    assert!(db.read_blob(DAILY_PLANS_NAMESPACE).expect("read failed").is_none());
    assert!(db.load_profile().expect("Failed to load profile").is_some());
}

#[test]
fn test_journal_assigns_increasing_ids() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .add_journal_entry("First day home", None, ts("2026-08-29T18:00:00Z"))
        .expect("Failed to add entry");
    let second = db
        .add_journal_entry("Slept through the night", None, ts("2026-08-30T08:00:00Z"))
        .expect("Failed to add entry");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let entries = db.journal_entries().expect("Failed to list entries");
    assert_eq!(entries.len(), 2);
    // Newest first.
    assert_eq!(entries[0].id, 2);
}

#[test]
fn test_checklist_toggle_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.toggle_checklist_step("2026-08-30", "water").expect("toggle failed"));
    assert!(db.toggle_checklist_step("2026-08-30", "walk").expect("toggle failed"));
    assert!(!db.toggle_checklist_step("2026-08-30", "water").expect("toggle failed"));

    let checked = db.checklist_for("2026-08-30").expect("Failed to read checklist");
    assert_eq!(checked, vec!["walk".to_string()]);
    assert!(db.checklist_for("2026-08-29").expect("read failed").is_empty());
}

#[test]
fn test_training_progress_migrates_v1_blob() {
    let (_temp_file, mut db) = create_test_db();

    let v1_payload = r#"{"id":"progress","completedLessons":["sit","down"],"notes":"Doing well"}"#;
    db.write_blob(TRAINING_PROGRESS_NAMESPACE, 1, v1_payload)
        .expect("Failed to write blob");

    let progress = db
        .load_training_progress()
        .expect("Failed to load progress");
    assert_eq!(progress.completed_lessons, vec!["sit", "down"]);
    assert_eq!(progress.notes.as_deref(), Some("Doing well"));
    assert!(progress.lesson_notes.is_empty());

    // The migrated shape is rewritten at the current version.
    let blob = db
        .read_blob(TRAINING_PROGRESS_NAMESPACE)
        .expect("Failed to read blob")
        .expect("Blob should exist");
    assert_eq!(blob.version, PROGRESS_SCHEMA_VERSION);
}

#[test]
fn test_training_progress_malformed_blob_resets() {
    let (_temp_file, mut db) = create_test_db();

    db.write_blob(TRAINING_PROGRESS_NAMESPACE, 2, "{{{")
        .expect("Failed to write blob");

    let progress = db
        .load_training_progress()
        .expect("Malformed blob should reset to default");
    assert!(progress.completed_lessons.is_empty());

    let progress = db.complete_lesson("sit").expect("Failed to complete lesson");
    assert_eq!(progress.completed_lessons, vec!["sit"]);
}

#[test]
fn test_practice_log_snapshot_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let mut log = db.load_practice_log().expect("Failed to load log");
    log.log_practice("sit", Some("Good focus".to_string()), None, ts("2026-08-30T12:00:00Z"));
    log.mark_shown(&pool(&["sit", "down"]), "2026-08-30");
    db.save_practice_log(&log.snapshot()).expect("Failed to save log");

    let reloaded = db.load_practice_log().expect("Failed to reload log");
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].lesson_id, "sit");

    let engagement = reloaded.engagement_snapshot();
    assert_eq!(
        engagement["down"].last_shown_by_date.as_deref(),
        Some("2026-08-30")
    );
    assert!(engagement["sit"].last_practiced_at.is_some());
}

#[test]
fn test_clear_all_stores_wipes_everything() {
    let (_temp_file, mut db) = create_test_db();
    let engagement: HashMap<String, EngagementSignal> = HashMap::new();
    let now = ts("2026-08-30T12:00:00Z");

    db.ensure_plan("week-4", "2026-08-30", &pool(&["sit", "down"]), &engagement, now)
        .expect("Failed to ensure plan");
    db.add_journal_entry("Entry", None, now).expect("Failed to add entry");
    let profile =
        PuppyProfile::from_input("Biscuit", "2026-06-01", "unsure").expect("valid profile");
    db.save_profile(&profile).expect("Failed to save profile");

    db.clear_all_stores().expect("Failed to clear stores");

    assert!(db.load_profile().expect("read failed").is_none());
    assert!(db.journal_entries().expect("read failed").is_empty());
    assert!(db.plan_for("week-4", "2026-08-30").expect("read failed").is_none());
}
