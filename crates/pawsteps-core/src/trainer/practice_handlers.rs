//! Practice log operations for the Trainer.
//!
//! All mutations go through the in-memory log and arm a debounced flush;
//! reads serve straight from memory. The log is loaded once at build time
//! and is the source of truth until the process exits, when
//! [`Trainer::flush_practice_log`] should run to persist any pending
//! changes immediately.

use jiff::Timestamp;
use tokio::task;

use super::Trainer;
use crate::{
    error::Result,
    models::PracticeEntry,
    params::{AttachNote, LogPractice},
    store::Database,
    weeks,
};

impl Trainer {
    /// Records a practice event for a lesson.
    ///
    /// Practicing the same lesson twice in one day merges the note and
    /// media into the existing entry instead of creating a second one.
    pub fn log_practice(&self, params: &LogPractice, now: Timestamp) -> Result<()> {
        let mut log = self.lock_log()?;
        log.log_practice(
            &params.lesson_id,
            params.note.clone(),
            params.media_ref.clone(),
            now,
        );
        drop(log);
        self.schedule_practice_flush()
    }

    /// Flips today's practiced state for a lesson in the log alone.
    ///
    /// Returns whether the lesson is practiced after the flip. Plans keep
    /// their own practiced set; use
    /// [`Trainer::toggle_practiced_lesson`](Self::toggle_practiced_lesson)
    /// to flip both together.
    pub fn toggle_practice(&self, lesson_id: &str, now: Timestamp) -> Result<bool> {
        let mut log = self.lock_log()?;
        let practiced = log.toggle_practice(lesson_id, now);
        drop(log);
        self.schedule_practice_flush()?;
        Ok(practiced)
    }

    /// Attaches a note to today's existing practice entry.
    ///
    /// Returns `false` when no entry exists for the lesson today; the
    /// caller decides whether to create one via [`Self::log_practice`].
    pub fn attach_note(&self, params: &AttachNote, now: Timestamp) -> Result<bool> {
        let date_key = weeks::day_key(now);
        let mut log = self.lock_log()?;
        let attached = log.attach_note(
            &params.lesson_id,
            &date_key,
            &params.note,
            params.media_ref.clone(),
        );
        drop(log);

        if attached {
            self.schedule_practice_flush()?;
        }
        Ok(attached)
    }

    /// Whether a lesson has a practice entry for today.
    pub fn is_practiced_today(&self, lesson_id: &str, now: Timestamp) -> Result<bool> {
        Ok(self.lock_log()?.is_practiced_today(lesson_id, now))
    }

    /// All practice entries, most recent first.
    pub fn practice_entries(&self) -> Result<Vec<PracticeEntry>> {
        Ok(self.lock_log()?.entries().to_vec())
    }

    /// Flushes the practice log to durable storage immediately, cancelling
    /// any pending debounced flush.
    ///
    /// Call this before process exit so the debounce window never loses a
    /// trailing write.
    pub async fn flush_practice_log(&self) -> Result<()> {
        {
            let mut debouncer = self.debouncer.lock().map_err(|_| {
                crate::error::TrainerError::Configuration {
                    message: "Debouncer lock poisoned".to_string(),
                }
            })?;
            debouncer.cancel();
        }

        let snapshot = self.lock_log()?.snapshot();
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_practice_log(&snapshot)
        })
        .await
        .map_err(Self::join_error)?
    }
}
