//! The practice log: per-lesson, per-day engagement tracking.
//!
//! Entries live in memory, newest first, with at most one entry per
//! `(lesson, day)` pair; readers always see the latest in-memory state.
//! Durability lags behind by at most the debounce window: mutations mark
//! the log dirty and the owning facade schedules a flush through
//! [`super::Debouncer`]. An abrupt termination inside that window loses
//! only the most recent burst of writes.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::models::{EngagementSignal, PracticeEntry};
use crate::weeks;

use super::kv::PRACTICE_LOG_NAMESPACE;

const PRACTICE_LOG_VERSION: u32 = 1;

/// The serialized shape of the practice log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeLogState {
    /// Practice entries, newest first
    pub entries: Vec<PracticeEntry>,

    /// Per-lesson day key of the most recent plan the lesson appeared in
    #[serde(default)]
    pub last_shown: HashMap<String, String>,
}

impl PracticeLogState {
    /// Rebuilds state from a persisted payload, silently dropping entries
    /// that fail validation (missing lesson id, date key, or practice
    /// instant). A payload that is not even a JSON object resets to empty.
    fn from_payload(payload: &str) -> Self {
        let Ok(document) = serde_json::from_str::<Value>(payload) else {
            return Self::default();
        };

        let entries = document
            .get("entries")
            .and_then(Value::as_array)
            .map(|raw| {
                raw.iter()
                    .filter_map(|value| serde_json::from_value::<PracticeEntry>(value.clone()).ok())
                    .filter(|entry| !entry.lesson_id.is_empty() && !entry.date_key.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let last_shown = document
            .get("lastShown")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        Self { entries, last_shown }
    }
}

/// In-memory practice log with snapshot-based persistence.
#[derive(Debug, Default)]
pub struct PracticeLog {
    state: PracticeLogState,
}

impl PracticeLog {
    /// Records a practice for today, upserting on `(lesson, day)`.
    ///
    /// An existing same-day entry merges note and media (new values win,
    /// falling back to previous) and keeps its original timestamp. A new
    /// entry is prepended at the head of the log.
    pub fn log_practice(
        &mut self,
        lesson_id: &str,
        note: Option<String>,
        media_ref: Option<String>,
        now: Timestamp,
    ) {
        let today = weeks::day_key(now);

        if let Some(existing) = self
            .state
            .entries
            .iter_mut()
            .find(|entry| entry.lesson_id == lesson_id && entry.date_key == today)
        {
            existing.note = note.or(existing.note.take());
            existing.media_ref = media_ref.or(existing.media_ref.take());
            return;
        }

        self.state.entries.insert(
            0,
            PracticeEntry {
                lesson_id: lesson_id.to_string(),
                date_key: today,
                practiced_at: now,
                note,
                media_ref,
            },
        );
    }

    /// Whether an entry exists for `(lesson, today)`.
    pub fn is_practiced_today(&self, lesson_id: &str, now: Timestamp) -> bool {
        let today = weeks::day_key(now);
        self.state
            .entries
            .iter()
            .any(|entry| entry.lesson_id == lesson_id && entry.date_key == today)
    }

    /// Removes today's entry if present, otherwise logs a bare practice.
    /// Returns whether the lesson is practiced after the toggle.
    pub fn toggle_practice(&mut self, lesson_id: &str, now: Timestamp) -> bool {
        let today = weeks::day_key(now);
        let before = self.state.entries.len();
        self.state
            .entries
            .retain(|entry| !(entry.lesson_id == lesson_id && entry.date_key == today));

        if self.state.entries.len() < before {
            return false;
        }
        self.log_practice(lesson_id, None, None, now);
        true
    }

    /// Updates an existing day's entry in place.
    ///
    /// Returns `false` when no entry exists for `(lesson, day)`; the
    /// caller is expected to create one via `log_practice` instead.
    pub fn attach_note(
        &mut self,
        lesson_id: &str,
        date_key: &str,
        text: &str,
        media_ref: Option<String>,
    ) -> bool {
        match self
            .state
            .entries
            .iter_mut()
            .find(|entry| entry.lesson_id == lesson_id && entry.date_key == date_key)
        {
            Some(entry) => {
                entry.note = Some(text.to_string());
                if media_ref.is_some() {
                    entry.media_ref = media_ref;
                }
                true
            }
            None => false,
        }
    }

    /// Stamps `last_shown` for every lesson included in a generated plan.
    pub fn mark_shown<'a>(&mut self, lesson_ids: impl IntoIterator<Item = &'a String>, date_key: &str) {
        for lesson_id in lesson_ids {
            self.state
                .last_shown
                .insert(lesson_id.clone(), date_key.to_string());
        }
    }

    /// The engagement view consumed by the daily plan selector.
    pub fn engagement_snapshot(&self) -> HashMap<String, EngagementSignal> {
        let mut snapshot: HashMap<String, EngagementSignal> = HashMap::new();

        for entry in &self.state.entries {
            let signal = snapshot.entry(entry.lesson_id.clone()).or_default();
            match signal.last_practiced_at {
                Some(at) if at >= entry.practiced_at => {}
                _ => signal.last_practiced_at = Some(entry.practiced_at),
            }
        }
        for (lesson_id, date_key) in &self.state.last_shown {
            snapshot
                .entry(lesson_id.clone())
                .or_default()
                .last_shown_by_date = Some(date_key.clone());
        }

        snapshot
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[PracticeEntry] {
        &self.state.entries
    }

    /// A serializable snapshot of the current state.
    pub fn snapshot(&self) -> PracticeLogState {
        self.state.clone()
    }
}

impl super::Database {
    /// Reconstructs the in-memory practice log from the last flushed
    /// snapshot, dropping malformed entries.
    pub fn load_practice_log(&self) -> Result<PracticeLog> {
        let state = match self.read_blob(PRACTICE_LOG_NAMESPACE)? {
            Some(blob) => PracticeLogState::from_payload(&blob.payload),
            None => PracticeLogState::default(),
        };
        Ok(PracticeLog { state })
    }

    /// Flushes a practice-log snapshot to durable storage.
    pub fn save_practice_log(&mut self, snapshot: &PracticeLogState) -> Result<()> {
        self.save_state(PRACTICE_LOG_NAMESPACE, PRACTICE_LOG_VERSION, snapshot)
    }
}
