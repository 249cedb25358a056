//! Namespaced blob reads and writes.
//!
//! Every higher-level store goes through these primitives. Reads are
//! forgiving by policy: a missing or malformed blob comes back as the
//! store's default state, never as an error to the caller.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DatabaseResultExt, Result};

// Namespace keys, one per store.
pub const PROFILE_NAMESPACE: &str = "pup.profile";
pub const JOURNAL_NAMESPACE: &str = "pup.journal";
pub const DAILY_PLANS_NAMESPACE: &str = "pup.daily_plans";
pub const PRACTICE_LOG_NAMESPACE: &str = "pup.practice_log";
pub const CHECKLIST_NAMESPACE: &str = "pup.checklist";
pub const TRAINING_PROGRESS_NAMESPACE: &str = "pup.training_progress";

const SELECT_BLOB_SQL: &str = "SELECT version, payload FROM stores WHERE namespace = ?1";
const UPSERT_BLOB_SQL: &str = "INSERT INTO stores (namespace, version, payload, updated_at) \
     VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(namespace) DO UPDATE SET version = ?2, payload = ?3, updated_at = ?4";
const DELETE_BLOB_SQL: &str = "DELETE FROM stores WHERE namespace = ?1";
const CLEAR_ALL_SQL: &str = "DELETE FROM stores";

/// A raw stored blob with the schema version it was written at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub version: u32,
    pub payload: String,
}

impl super::Database {
    /// Reads the raw blob for a namespace, if one exists.
    pub fn read_blob(&self, namespace: &str) -> Result<Option<StoredBlob>> {
        self.connection
            .query_row(SELECT_BLOB_SQL, params![namespace], |row| {
                Ok(StoredBlob {
                    version: row.get::<_, i64>(0)? as u32,
                    payload: row.get(1)?,
                })
            })
            .optional()
            .db_context("Failed to read store blob")
    }

    /// Writes the blob for a namespace, replacing any previous state.
    pub fn write_blob(&mut self, namespace: &str, version: u32, payload: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_BLOB_SQL, params![namespace, version as i64, payload, now])
            .db_context("Failed to write store blob")?;
        Ok(())
    }

    /// Deletes the blob for a namespace. Missing blobs are fine.
    pub fn delete_blob(&mut self, namespace: &str) -> Result<()> {
        self.connection
            .execute(DELETE_BLOB_SQL, params![namespace])
            .db_context("Failed to delete store blob")?;
        Ok(())
    }

    /// Explicit data clear: removes every store's state.
    pub fn clear_all_stores(&mut self) -> Result<()> {
        self.connection
            .execute(CLEAR_ALL_SQL, [])
            .db_context("Failed to clear stores")?;
        Ok(())
    }

    /// Loads a store's typed state, falling back to the default on a
    /// missing or malformed blob.
    pub fn load_state<T>(&self, namespace: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(blob) = self.read_blob(namespace)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&blob.payload) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!("malformed state in '{namespace}', resetting to default: {e}");
                Ok(T::default())
            }
        }
    }

    /// Serializes and writes a store's typed state.
    pub fn save_state<T>(&mut self, namespace: &str, version: u32, state: &T) -> Result<()>
    where
        T: Serialize,
    {
        let payload = serde_json::to_string(state)?;
        self.write_blob(namespace, version, &payload)
    }
}
