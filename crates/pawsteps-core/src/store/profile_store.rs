//! Puppy profile persistence.

use crate::error::Result;
use crate::models::PuppyProfile;

use super::kv::PROFILE_NAMESPACE;

const PROFILE_VERSION: u32 = 1;

impl super::Database {
    /// The saved profile, if one exists. A malformed blob reads as none.
    pub fn load_profile(&self) -> Result<Option<PuppyProfile>> {
        self.load_state(PROFILE_NAMESPACE)
    }

    /// Saves the profile, replacing any previous one.
    pub fn save_profile(&mut self, profile: &PuppyProfile) -> Result<()> {
        self.save_state(PROFILE_NAMESPACE, PROFILE_VERSION, &Some(profile.clone()))
    }

    /// Removes the saved profile.
    pub fn delete_profile(&mut self) -> Result<()> {
        self.delete_blob(PROFILE_NAMESPACE)
    }
}
