//! Local durable storage for the trainer.
//!
//! This module owns the SQLite connection and the per-store operations.
//! Storage is a key-value model: each store (profile, journal, daily
//! plans, practice log, checklist, training progress) persists its full
//! state as one serialized JSON blob under a distinct namespaced key,
//! together with the schema version it was written at.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod checklist;
pub mod debounce;
pub mod journal;
pub mod kv;
pub mod plan_store;
pub mod practice_log;
pub mod profile_store;
pub mod progress_store;

pub use debounce::Debouncer;
pub use practice_log::PracticeLog;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply in-place migrations for databases created by older releases.
    fn apply_migrations(&self) -> Result<()> {
        // The version column arrived after the first release; older stores
        // tables lack it.
        let has_version_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('stores') WHERE name = 'version'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_version_column {
            self.connection
                .execute(
                    "ALTER TABLE stores ADD COLUMN version INTEGER NOT NULL DEFAULT 1",
                    [],
                )
                .db_context("Failed to add version column to stores table")?;
        }

        Ok(())
    }
}
