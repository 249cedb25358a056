//! Builder for creating and configuring Trainer instances.

use std::path::{Path, PathBuf};

use log::warn;
use tokio::task;

use super::Trainer;
use crate::{
    catalog::ContentCatalog,
    error::{Result, TrainerError},
    store::Database,
};

/// Builder for creating and configuring Trainer instances.
#[derive(Debug, Clone)]
pub struct TrainerBuilder {
    database_path: Option<PathBuf>,
}

impl TrainerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pawsteps/pawsteps.db` or
    /// `~/.local/share/pawsteps/pawsteps.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured trainer instance.
    ///
    /// Initializes the database schema, loads the practice log into memory,
    /// and validates the bundled content. Content validation errors are
    /// logged and never fail the build; the catalog serves whatever survived
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::FileSystem` if the database path is invalid
    /// Returns `TrainerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Trainer> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrainerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let practice_log = task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            db.load_practice_log()
        })
        .await
        .map_err(Trainer::join_error)??;

        let mut catalog = ContentCatalog::new();
        let status = catalog.initialize();
        if !status.valid {
            warn!(
                "Bundled content loaded with {} validation issue(s)",
                status.errors.len()
            );
        }

        Ok(Trainer::new(db_path, catalog, practice_log))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pawsteps")
            .place_data_file("pawsteps.db")
            .map_err(|e| TrainerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
