//! Journal entry model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A dated journal entry with an optional photo reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Monotonic identifier within the journal
    pub id: u64,

    /// UTC-normalized `YYYY-MM-DD` day key of the entry
    pub date_key: String,

    /// The entry text
    pub text: String,

    /// Opaque reference to an attached photo (never inspected by the core)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,

    /// When the entry was written (UTC)
    pub created_at: Timestamp,
}
