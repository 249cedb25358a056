//! Journal, checklist, progress, and support-tip operations for the Trainer.

use jiff::Timestamp;
use tokio::task;

use super::Trainer;
use crate::{
    display::{JournalEntries, TipsList},
    error::Result,
    models::{JournalEntry, TrainingProgress},
    params::{AddJournalEntry, LessonNote, SearchTips},
    store::Database,
};

impl Trainer {
    /// Adds a free-form journal entry dated to the given instant.
    pub async fn add_journal_entry(
        &self,
        params: &AddJournalEntry,
        now: Timestamp,
    ) -> Result<JournalEntry> {
        let db_path = self.db_path.clone();
        let text = params.text.clone();
        let photo_ref = params.photo_ref.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_journal_entry(&text, photo_ref, now)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// All journal entries, most recent first.
    pub async fn journal(&self) -> Result<JournalEntries> {
        let db_path = self.db_path.clone();

        let entries = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.journal_entries()
        })
        .await
        .map_err(Self::join_error)??;

        Ok(JournalEntries(entries))
    }

    /// Flips a daily checklist step for a calendar day, returning whether
    /// it is checked afterwards.
    pub async fn toggle_checklist_step(&self, date_key: &str, step_id: &str) -> Result<bool> {
        let db_path = self.db_path.clone();
        let date_key = date_key.to_string();
        let step_id = step_id.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.toggle_checklist_step(&date_key, &step_id)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// The checked step ids for a calendar day.
    pub async fn checklist_for(&self, date_key: &str) -> Result<Vec<String>> {
        let db_path = self.db_path.clone();
        let date_key = date_key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.checklist_for(&date_key)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// The stored training progress, migrated to the current schema.
    pub async fn training_progress(&self) -> Result<TrainingProgress> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.load_training_progress()
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Marks a lesson completed in the training progress record.
    pub async fn complete_lesson(&self, lesson_id: &str) -> Result<TrainingProgress> {
        let db_path = self.db_path.clone();
        let lesson_id = lesson_id.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_lesson(&lesson_id)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Records a per-lesson note in the training progress record.
    pub async fn set_lesson_note(&self, params: &LessonNote) -> Result<TrainingProgress> {
        let db_path = self.db_path.clone();
        let lesson_id = params.lesson_id.clone();
        let note = params.note.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_lesson_note(&lesson_id, &note)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Searches bundled support tips.
    ///
    /// A blank or absent query returns every category; a matching category
    /// title, description, or keyword returns the whole category; otherwise
    /// the category narrows to its matching items.
    pub fn search_tips(&self, params: &SearchTips) -> TipsList {
        let query = params.query.as_deref().unwrap_or("");
        TipsList(self.catalog.search_support(query))
    }

    /// Deletes every persisted store and resets the in-memory practice log.
    ///
    /// The bundled content catalog is untouched; the next access starts
    /// from a blank slate, as on first launch.
    pub async fn clear_all_data(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_all_stores()
        })
        .await
        .map_err(Self::join_error)??;

        let mut log = self.lock_log()?;
        *log = crate::store::PracticeLog::default();
        Ok(())
    }
}
