//! Parameter structures for trainer operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, a future app shell) without
//! framework-specific derives or dependencies. These structures provide a
//! clean interface for passing data between different layers of the
//! application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers create wrapper structs that add framework-specific
//! derives and convert into these core types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Core parameter structures carry raw user input (dates and enums as
//! strings); validation happens in the trainer so every interface gets the
//! same field-level error messages.

use serde::{Deserialize, Serialize};

/// Parameters for creating or replacing the puppy profile.
///
/// Dates and sex arrive as raw strings; validation happens in
/// [`crate::models::PuppyProfile::from_input`] so the interface layer can
/// surface field-level errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetProfile {
    /// The puppy's name (required, must not be blank)
    pub name: String,
    /// Date of birth as an ISO `YYYY-MM-DD` string
    pub date_of_birth: String,
    /// Sex as entered ('female', 'male', 'f', 'm', or 'unsure')
    pub sex: String,
    /// Optional opaque reference to a profile photo
    pub photo_ref: Option<String>,
}

/// Parameters for logging a practice event for a lesson.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogPractice {
    /// ID of the lesson that was practiced
    pub lesson_id: String,
    /// Optional note about how the session went
    pub note: Option<String>,
    /// Optional opaque reference to an attached photo or video
    pub media_ref: Option<String>,
}

/// Parameters for attaching a note to today's existing practice entry.
///
/// If no entry exists for the lesson today, the operation reports that
/// instead of creating one; the caller decides whether to log a fresh
/// practice carrying the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachNote {
    /// ID of the lesson whose entry receives the note
    pub lesson_id: String,
    /// Note text
    pub note: String,
    /// Optional opaque media reference to attach alongside the note
    pub media_ref: Option<String>,
}

/// Parameters for toggling a lesson's practiced state within a daily plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleLesson {
    /// Week the plan belongs to
    pub week_id: String,
    /// Lesson to toggle
    pub lesson_id: String,
}

/// Parameters for adding a free-form journal entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddJournalEntry {
    /// Entry text (required)
    pub text: String,
    /// Optional opaque reference to an attached photo
    pub photo_ref: Option<String>,
}

/// Parameters for searching support tips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchTips {
    /// Free-text query; blank or absent returns all categories
    pub query: Option<String>,
}

/// Parameters for recording a note against a lesson in training progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonNote {
    /// Lesson the note belongs to
    pub lesson_id: String,
    /// Note text
    pub note: String,
}
