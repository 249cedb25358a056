//! Data models for the puppy training core.
//!
//! This module contains the domain models shared across the stores and the
//! daily plan selector: static curriculum content (lessons, weeks, support
//! tips), the puppy profile, practice-log entries and their engagement view,
//! the generated daily plan, journal entries, and the versioned
//! training-progress record.
//!
//! Static content models ([`Lesson`], [`Week`], [`SupportCategory`]) are
//! loaded once by the content catalog and never mutated at runtime. All
//! persisted models serialize with `serde` and carry `jiff::Timestamp`
//! instants; calendar days are always the UTC-normalized `YYYY-MM-DD` day
//! key strings produced by [`crate::weeks::day_key`].
//!
//! Display implementations live in [`crate::display`] to keep data and
//! presentation separate.

pub mod engagement;
pub mod journal;
pub mod lesson;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod support;


pub use engagement::{EngagementSignal, PracticeEntry};
pub use journal::JournalEntry;
pub use lesson::{Lesson, Week};
pub use plan::DailyPlan;
pub use profile::{PuppyProfile, Sex};
pub use progress::{
    TrainingProgress, TrainingProgressV1, VersionedProgress, PROGRESS_SCHEMA_VERSION,
};
pub use support::{SupportCategory, SupportItem};
