//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling, plus
//! the composite [`TodayView`] that joins a plan with its week and lesson
//! content for the main daily screen.

use std::fmt;

use crate::models::{DailyPlan, JournalEntry, Lesson, SupportCategory, Week};

/// The fully resolved view of today's plan.
///
/// The plan itself only stores lesson ids; this view carries the week and
/// the resolved lesson content alongside it so the display layer never has
/// to reach back into the catalog. Lessons appear in plan order with a
/// practiced icon per lesson.
#[derive(Debug)]
pub struct TodayView {
    /// Week the plan belongs to
    pub week: Week,

    /// The cached or freshly generated plan
    pub plan: DailyPlan,

    /// Lesson content for the plan's ids, in plan order
    pub lessons: Vec<Lesson>,
}

impl TodayView {
    /// How many of today's lessons are marked practiced.
    pub fn practiced_count(&self) -> usize {
        self.plan.practiced.len()
    }

    /// Whether every lesson in the plan is marked practiced.
    pub fn is_complete(&self) -> bool {
        !self.plan.lesson_ids.is_empty()
            && self.plan.lesson_ids.len() == self.plan.practiced.len()
    }
}

impl fmt::Display for TodayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Week {}: {} ({})",
            self.week.number, self.week.title, self.plan.date_key
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.week.focus)?;
        writeln!(f)?;

        if self.lessons.is_empty() {
            writeln!(f, "No lessons in today's plan.")?;
            return Ok(());
        }

        for lesson in &self.lessons {
            let icon = if self.plan.is_practiced(&lesson.id) {
                "✓"
            } else {
                "○"
            };
            write!(f, "- {icon} **{}** (`{}`)", lesson.title, lesson.id)?;
            if let Some(duration) = &lesson.duration {
                write!(f, " {duration}")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}/{} practiced",
            self.practiced_count(),
            self.plan.lesson_ids.len()
        )?;

        Ok(())
    }
}

/// Newtype wrapper for displaying collections of support categories.
///
/// Handles the empty case (no categories matched a search) gracefully.
pub struct TipsList(pub Vec<SupportCategory>);

impl TipsList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of categories in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the categories.
    pub fn iter(&self) -> std::slice::Iter<'_, SupportCategory> {
        self.0.iter()
    }
}

impl fmt::Display for TipsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tips matched your search.")
        } else {
            for category in &self.0 {
                write!(f, "{category}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of journal entries.
pub struct JournalEntries(pub Vec<JournalEntry>);

impl JournalEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.0.iter()
    }
}

impl fmt::Display for JournalEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No journal entries yet.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the full week list of the curriculum.
pub struct WeekList(pub Vec<Week>);

impl fmt::Display for WeekList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No curriculum weeks available.")
        } else {
            for week in &self.0 {
                write!(f, "{week}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}
