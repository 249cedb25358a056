//! Practice log entries and the engagement view consumed by the selector.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One practice event: lesson X was practiced on calendar day D.
///
/// At most one entry exists per `(lesson_id, date_key)` pair; repeated
/// practice on the same day merges note and media into the existing entry
/// without advancing its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PracticeEntry {
    /// Lesson that was practiced
    pub lesson_id: String,

    /// UTC-normalized `YYYY-MM-DD` day key of the practice
    pub date_key: String,

    /// When the practice was first logged (UTC)
    pub practiced_at: Timestamp,

    /// Optional journal note attached to the practice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Opaque reference to an attached photo or video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
}

/// Per-lesson engagement history, the selector's only view of the past.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementSignal {
    /// Most recent practice instant; `None` means never practiced
    pub last_practiced_at: Option<Timestamp>,

    /// Day key of the most recent plan this lesson appeared in
    pub last_shown_by_date: Option<String>,
}
