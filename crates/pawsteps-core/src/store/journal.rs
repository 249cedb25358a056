//! Journal persistence.

use jiff::Timestamp;

use crate::error::Result;
use crate::models::JournalEntry;
use crate::weeks;

use super::kv::JOURNAL_NAMESPACE;

const JOURNAL_VERSION: u32 = 1;

impl super::Database {
    /// Appends a journal entry for the current day and returns it.
    pub fn add_journal_entry(
        &mut self,
        text: &str,
        photo_ref: Option<String>,
        now: Timestamp,
    ) -> Result<JournalEntry> {
        let mut entries: Vec<JournalEntry> = self.load_state(JOURNAL_NAMESPACE)?;

        let entry = JournalEntry {
            id: entries.iter().map(|e| e.id).max().unwrap_or(0) + 1,
            date_key: weeks::day_key(now),
            text: text.to_string(),
            photo_ref,
            created_at: now,
        };

        entries.insert(0, entry.clone());
        self.save_state(JOURNAL_NAMESPACE, JOURNAL_VERSION, &entries)?;
        Ok(entry)
    }

    /// All journal entries, newest first.
    pub fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        self.load_state(JOURNAL_NAMESPACE)
    }
}
