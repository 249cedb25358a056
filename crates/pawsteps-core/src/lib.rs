//! Core library for the Pawsteps puppy training application.
//!
//! This crate provides the core business logic for an age-based puppy
//! training program: the bundled curriculum and support-tip catalog, the
//! daily lesson selector, practice and journal tracking, and durable
//! storage with schema migration.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently
//! depending on context (today's plan vs. a full lesson page) while
//! maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use pawsteps_core::{TrainerBuilder, params::SetProfile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a trainer instance
//! let trainer = TrainerBuilder::new()
//!     .with_database_path(Some("pawsteps.db"))
//!     .build()
//!     .await?;
//!
//! // Set up the puppy profile
//! trainer
//!     .save_profile(&SetProfile {
//!         name: "Biscuit".to_string(),
//!         date_of_birth: "2026-06-01".to_string(),
//!         sex: "female".to_string(),
//!         photo_ref: None,
//!     })
//!     .await?;
//!
//! // Today's plan for the puppy's current training week
//! let view = trainer.today(Timestamp::now()).await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod categories;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod rollover;
pub mod selector;
pub mod store;
pub mod trainer;
pub mod weeks;

// Re-export commonly used types
pub use catalog::{ContentCatalog, ContentStatus};
pub use display::{JournalEntries, LocalDateTime, OperationStatus, TipsList, TodayView, WeekList};
pub use error::{Result, TrainerError};
pub use models::{
    DailyPlan, EngagementSignal, JournalEntry, Lesson, PracticeEntry, PuppyProfile, Sex,
    SupportCategory, SupportItem, TrainingProgress, Week,
};
pub use params::{
    AddJournalEntry, AttachNote, LessonNote, LogPractice, SearchTips, SetProfile, ToggleLesson,
};
pub use rollover::MidnightTrigger;
pub use store::Database;
pub use trainer::{Trainer, TrainerBuilder};
