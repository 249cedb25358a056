//! Support-tip library models.

use serde::{Deserialize, Serialize};

/// A category in the support-tip library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportCategory {
    /// Unique identifier for the category
    pub id: String,

    /// Display title of the category
    pub title: String,

    /// One-line description of what the category covers
    pub description: String,

    /// Search keywords for the category
    pub keywords: Vec<String>,

    /// Items within the category
    pub items: Vec<SupportItem>,
}

/// A single support item: a titled bundle of tips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportItem {
    /// Unique identifier for the item
    pub id: String,

    /// Display title of the item
    pub title: String,

    /// Short summary shown in lists
    pub summary: String,

    /// The tips themselves
    pub tips: Vec<String>,
}

impl SupportCategory {
    /// Returns a copy of this category narrowed to the given items.
    pub fn with_items(&self, items: Vec<SupportItem>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            items,
        }
    }
}
