//! Puppy profile operations and week derivation for the Trainer.

use jiff::Timestamp;
use tokio::task;

use super::Trainer;
use crate::{
    error::{Result, TrainerError},
    models::PuppyProfile,
    params::SetProfile,
    store::Database,
};

impl Trainer {
    /// Validates and saves the puppy profile, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::InvalidInput` naming the first offending
    /// field when validation fails; nothing is written in that case.
    pub async fn save_profile(&self, params: &SetProfile) -> Result<PuppyProfile> {
        let mut profile =
            PuppyProfile::from_input(&params.name, &params.date_of_birth, &params.sex)?;
        profile.photo_ref = params.photo_ref.clone();

        let db_path = self.db_path.clone();
        let to_save = profile.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_profile(&to_save)
        })
        .await
        .map_err(Self::join_error)??;

        Ok(profile)
    }

    /// The stored puppy profile, if one has been set up.
    pub async fn profile(&self) -> Result<Option<PuppyProfile>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_profile()
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Removes the stored profile.
    pub async fn delete_profile(&self) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_profile()
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Derives the current training week number from the profile's date of
    /// birth and the reference instant's UTC date.
    ///
    /// Week 1 covers the first seven days of life; a reference before the
    /// date of birth yields 0, which plan resolution clamps to week 1.
    pub async fn current_week_number(&self, now: Timestamp) -> Result<u32> {
        let profile = self.profile().await?.ok_or(TrainerError::ProfileMissing)?;
        Ok(profile.current_week(Self::utc_date(now)))
    }
}
