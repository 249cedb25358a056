//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{JournalEntry, Lesson, PracticeEntry, PuppyProfile, SupportCategory, Week};

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if let Some(objective) = &self.objective {
            writeln!(f, "{objective}")?;
            writeln!(f)?;
        }

        if let Some(duration) = &self.duration {
            writeln!(f, "- Duration: {duration}")?;
        }
        if !self.materials.is_empty() {
            writeln!(f, "- Materials: {}", self.materials.join(", "))?;
        }

        if !self.steps.is_empty() {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for (index, step) in self.steps.iter().enumerate() {
                writeln!(f, "{}. {step}", index + 1)?;
            }
        }

        if let Some(guideline) = &self.guideline {
            writeln!(f, "\n## Guideline")?;
            writeln!(f)?;
            writeln!(f, "{guideline}")?;
        }

        if let Some(note) = &self.safety_note {
            writeln!(f, "\n> **Safety**: {note}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Week {}: {}", self.number, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.focus)?;
        writeln!(f)?;
        writeln!(f, "- Lessons: {}", self.lesson_ids.len())?;
        Ok(())
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        for item in &self.items {
            writeln!(f, "### {}", item.title)?;
            writeln!(f)?;
            writeln!(f, "{}", item.summary)?;
            writeln!(f)?;
            for tip in &item.tips {
                writeln!(f, "- {tip}")?;
            }
            if !item.tips.is_empty() {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.date_key,
            LocalDateTime(&self.created_at)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        if let Some(photo) = &self.photo_ref {
            writeln!(f)?;
            writeln!(f, "- Photo: {photo}")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for PracticeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} on {} at {}",
            self.lesson_id,
            self.date_key,
            LocalDateTime(&self.practiced_at)
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PuppyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Born: {}", self.date_of_birth)?;
        writeln!(f, "- Sex: {}", self.sex)?;
        if let Some(photo) = &self.photo_ref {
            writeln!(f, "- Photo: {photo}")?;
        }
        Ok(())
    }
}
