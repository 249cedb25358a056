//! Display formatting for terminal and log output.
//!
//! Domain models stay presentation-free; this module provides newtype
//! wrappers and composite views that format them as markdown. The same
//! data can therefore render differently in context (a lesson inside
//! today's plan vs. a full lesson page) while every consumer goes through
//! one formatting path.
//!
//! ## Module Organization
//!
//! - [`collections`]: composite views (today's plan, tip lists, journal)
//! - [`models`]: Display implementations for single domain models
//! - [`datetime`]: timestamp formatting helpers
//! - [`status`]: operation status and confirmation messages

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{JournalEntries, TipsList, TodayView, WeekList};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
