//! Puppy profile model and validation.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainerError};
use crate::weeks;

/// Sex of the puppy as entered during profile setup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    #[default]
    Unsure,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            "unsure" => Ok(Sex::Unsure),
            _ => Err(format!("Invalid sex: {s}")),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Unsure => "unsure",
        };
        write!(f, "{s}")
    }
}

/// The puppy profile, owned exclusively by the profile store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PuppyProfile {
    /// The puppy's name
    pub name: String,

    /// Date of birth as an ISO calendar date
    pub date_of_birth: Date,

    /// Sex of the puppy
    #[serde(default)]
    pub sex: Sex,

    /// Opaque reference to a profile photo (never inspected by the core)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,
}

impl PuppyProfile {
    /// Builds a profile from raw user input, validating field by field.
    ///
    /// # Errors
    ///
    /// Returns `TrainerError::InvalidInput` naming the offending field; the
    /// caller surfaces this as a field-level message and keeps the input
    /// step active until corrected.
    pub fn from_input(name: &str, date_of_birth: &str, sex: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrainerError::invalid_input("name", "Name must not be empty"));
        }

        let date_of_birth: Date = date_of_birth.parse().map_err(|_| {
            TrainerError::invalid_input(
                "date_of_birth",
                format!("'{date_of_birth}' is not a valid ISO date (expected YYYY-MM-DD)"),
            )
        })?;

        let sex: Sex = sex
            .parse()
            .map_err(|reason: String| TrainerError::invalid_input("sex", reason))?;

        Ok(Self {
            name: name.to_string(),
            date_of_birth,
            sex,
            photo_ref: None,
        })
    }

    /// Derives the current training week for a reference date.
    ///
    /// Returns 0 when the reference date precedes the date of birth.
    pub fn current_week(&self, reference: Date) -> u32 {
        weeks::week_number_from_dates(self.date_of_birth, reference)
    }
}
