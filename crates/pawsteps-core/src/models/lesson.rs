//! Lesson and week model definitions.

use serde::{Deserialize, Serialize};

/// A single training lesson from the static curriculum.
///
/// Lessons are loaded once at startup from the embedded curriculum documents
/// and never mutated at runtime. Only `id` and `title` are required; all
/// other fields are optional content the UI may or may not render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Unique identifier for the lesson
    pub id: String,

    /// Display title of the lesson
    pub title: String,

    /// What the puppy should be able to do after this lesson
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,

    /// Suggested session length, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Materials needed for the session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,

    /// Ordered training steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,

    /// Supporting guideline text for the handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guideline: Option<String>,

    /// Safety note, displayed prominently when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_note: Option<String>,
}

/// A curriculum week: an ordered bundle of lessons with a focus.
///
/// The `lesson_ids` list declares the week's lesson pool in presentation
/// order; every id must resolve within the week's own lesson bundle
/// (validated at load, dangling ids are reported but not fatal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// Unique identifier for the week
    pub id: String,

    /// Ordinal week number, starting at 1
    pub number: u32,

    /// Display title of the week
    pub title: String,

    /// Focus description for the week
    pub focus: String,

    /// Ordered lesson ids making up this week's pool
    pub lesson_ids: Vec<String>,
}
