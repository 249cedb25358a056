//! Training-progress persistence with schema migration on read.
//!
//! Progress blobs are decoded at whichever schema version they were
//! written, run through the pure migration chain in
//! [`crate::models::progress`], and rewritten at the current version so
//! the migration happens at most once per upgrade.

use log::{info, warn};

use crate::error::Result;
use crate::models::{TrainingProgress, VersionedProgress, PROGRESS_SCHEMA_VERSION};

use super::kv::TRAINING_PROGRESS_NAMESPACE;

impl super::Database {
    /// Loads training progress, migrating prior-version blobs in place.
    pub fn load_training_progress(&mut self) -> Result<TrainingProgress> {
        let Some(blob) = self.read_blob(TRAINING_PROGRESS_NAMESPACE)? else {
            return Ok(TrainingProgress::default());
        };

        let progress = match VersionedProgress::decode(blob.version, &blob.payload) {
            Ok(decoded) => decoded.migrate(),
            Err(e) => {
                warn!("malformed training progress, resetting to default: {e}");
                return Ok(TrainingProgress::default());
            }
        };

        if blob.version < PROGRESS_SCHEMA_VERSION {
            info!(
                "migrated training progress from schema v{} to v{PROGRESS_SCHEMA_VERSION}",
                blob.version
            );
            self.save_training_progress(&progress)?;
        }

        Ok(progress)
    }

    /// Writes training progress at the current schema version.
    pub fn save_training_progress(&mut self, progress: &TrainingProgress) -> Result<()> {
        self.save_state(TRAINING_PROGRESS_NAMESPACE, PROGRESS_SCHEMA_VERSION, progress)
    }

    /// Marks a lesson completed overall, once.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> Result<TrainingProgress> {
        let mut progress = self.load_training_progress()?;
        if !progress.completed_lessons.iter().any(|id| id == lesson_id) {
            progress.completed_lessons.push(lesson_id.to_string());
            self.save_training_progress(&progress)?;
        }
        Ok(progress)
    }

    /// Sets or replaces the per-lesson note.
    pub fn set_lesson_note(&mut self, lesson_id: &str, note: &str) -> Result<TrainingProgress> {
        let mut progress = self.load_training_progress()?;
        progress
            .lesson_notes
            .insert(lesson_id.to_string(), note.to_string());
        self.save_training_progress(&progress)?;
        Ok(progress)
    }
}
