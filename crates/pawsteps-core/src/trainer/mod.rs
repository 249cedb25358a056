//! High-level trainer API for the puppy training core.
//!
//! This module provides the main [`Trainer`] interface. The trainer acts as
//! the central coordinator between the interface layers and the stores,
//! implementing all business logic for profiles, daily plans, practice
//! tracking, the journal, and support tips.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Stores      │    │    Database     │
//! │ (plan_handlers, │───▶│ (plan_store,    │───▶│   (via store/)  │
//! │  practice, ...) │    │  kv, ...)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Trainer`] instances with configuration
//! - [`plan_handlers`]: Daily plan operations (today's plan, toggling, rollover)
//! - [`practice_handlers`]: Practice log operations with debounced persistence
//! - [`profile_handlers`]: Puppy profile and week derivation
//! - [`journal_handlers`]: Journal, checklist, progress, and tips operations
//!
//! ## Concurrency Model
//!
//! Database work runs on blocking worker threads; each operation opens a
//! fresh connection against the shared database file. The practice log is
//! the one piece of mutable in-memory state: it lives behind a mutex and is
//! flushed to storage through a debouncer so bursts of practice taps
//! coalesce into a single write.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use pawsteps_core::{TrainerBuilder, params::SetProfile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with default database path
//! let trainer = TrainerBuilder::new().build().await?;
//!
//! // Or specify a custom database path
//! let trainer = TrainerBuilder::new()
//!     .with_database_path(Some("/custom/path/pawsteps.db"))
//!     .build()
//!     .await?;
//!
//! trainer
//!     .save_profile(&SetProfile {
//!         name: "Biscuit".to_string(),
//!         date_of_birth: "2026-06-01".to_string(),
//!         sex: "female".to_string(),
//!         photo_ref: None,
//!     })
//!     .await?;
//!
//! let view = trainer.today(Timestamp::now()).await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use crate::{
    catalog::ContentCatalog,
    error::{Result, TrainerError},
    store::{Database, Debouncer, PracticeLog},
};

// Module declarations
pub mod builder;
pub mod journal_handlers;
pub mod plan_handlers;
pub mod practice_handlers;
pub mod profile_handlers;


// Re-export the main types
pub use builder::TrainerBuilder;

/// Main trainer interface for the puppy training core.
pub struct Trainer {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: ContentCatalog,
    pub(crate) practice_log: Arc<Mutex<PracticeLog>>,
    pub(crate) debouncer: Arc<Mutex<Debouncer>>,
}

impl Trainer {
    /// Creates a new trainer over an initialized database and catalog.
    pub(crate) fn new(db_path: PathBuf, catalog: ContentCatalog, practice_log: PracticeLog) -> Self {
        Self {
            db_path,
            catalog,
            practice_log: Arc::new(Mutex::new(practice_log)),
            debouncer: Arc::new(Mutex::new(Debouncer::default())),
        }
    }

    /// The static content catalog backing this trainer.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Locks the in-memory practice log.
    pub(crate) fn lock_log(&self) -> Result<MutexGuard<'_, PracticeLog>> {
        self.practice_log.lock().map_err(|_| TrainerError::Configuration {
            message: "Practice log lock poisoned".to_string(),
        })
    }

    /// Arms a debounced flush of the practice log to durable storage.
    ///
    /// The snapshot is taken when the timer fires, not when it is armed, so
    /// rapid consecutive mutations collapse into one write of the final
    /// state.
    pub(crate) fn schedule_practice_flush(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        let log = Arc::clone(&self.practice_log);

        let mut debouncer = self.debouncer.lock().map_err(|_| TrainerError::Configuration {
            message: "Debouncer lock poisoned".to_string(),
        })?;
        debouncer.schedule(move || {
            let snapshot = match log.lock() {
                Ok(log) => log.snapshot(),
                Err(_) => return,
            };
            if let Err(e) =
                Database::new(&db_path).and_then(|mut db| db.save_practice_log(&snapshot))
            {
                warn!("Failed to flush practice log: {e}");
            }
        });
        Ok(())
    }

    /// Maps a blocking-task join failure into a trainer error.
    pub(crate) fn join_error(e: tokio::task::JoinError) -> TrainerError {
        TrainerError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}
