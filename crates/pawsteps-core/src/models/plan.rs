//! Daily plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The cached, date-scoped output of the daily lesson selector plus its
/// completion state.
///
/// A plan is identified by the composite key `(week_id, date_key)`. It is
/// created on first access for that key and replaced wholesale when the
/// underlying lesson pool changes incompatibly; the practiced subset is
/// carried forward across regeneration for lessons that re-appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Week the plan was generated for
    pub week_id: String,

    /// UTC-normalized `YYYY-MM-DD` day key the plan belongs to
    pub date_key: String,

    /// Selected lesson ids, in selection priority order
    pub lesson_ids: Vec<String>,

    /// Lesson ids marked practiced within this plan
    #[serde(default)]
    pub practiced: Vec<String>,

    /// When this plan was generated (UTC)
    pub generated_at: Timestamp,
}

impl DailyPlan {
    /// The persistence key for a `(week_id, date_key)` pair.
    pub fn key_for(week_id: &str, date_key: &str) -> String {
        format!("{week_id}|{date_key}")
    }

    /// The persistence key of this plan.
    pub fn key(&self) -> String {
        Self::key_for(&self.week_id, &self.date_key)
    }

    /// Whether the given lesson is part of this plan.
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.lesson_ids.iter().any(|id| id == lesson_id)
    }

    /// Whether the given lesson is marked practiced in this plan.
    pub fn is_practiced(&self, lesson_id: &str) -> bool {
        self.practiced.iter().any(|id| id == lesson_id)
    }

    /// Whether every lesson in this plan is still present in `pool`.
    pub fn is_compatible_with(&self, pool: &[String]) -> bool {
        !self.lesson_ids.is_empty()
            && self
                .lesson_ids
                .iter()
                .all(|id| pool.iter().any(|p| p == id))
    }
}
