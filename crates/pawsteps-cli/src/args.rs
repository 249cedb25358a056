//! Command-line argument definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each argument struct carries clap-specific attributes (flags, help text)
//! and converts into its core parameter type via `From`, so the core stays
//! free of CLI framework derives.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use pawsteps_core::params::{AddJournalEntry, SearchTips, SetProfile};

/// Main command-line interface for the Pawsteps puppy trainer
///
/// Pawsteps guides a puppy's first months with an age-based training
/// curriculum: a daily plan of lessons picked for the puppy's current week,
/// practice tracking, a journal, and a searchable support library.
#[derive(Parser)]
#[command(version, about, name = "paws")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pawsteps/pawsteps.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pawsteps CLI
///
/// Running with no command renders today's plan, the screen the app opens
/// on.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the puppy profile
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Show today's training plan
    #[command(alias = "t")]
    Today(TodayArgs),
    /// Toggle a lesson's practiced state for today
    Practice(PracticeArgs),
    /// List the curriculum weeks
    #[command(alias = "w")]
    Weeks,
    /// Keep a puppy journal
    #[command(alias = "j")]
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
    /// Browse or search the support library
    Tips(TipsArgs),
    /// Inspect bundled content
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },
}

/// Profile management subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create or replace the puppy profile
    Set(SetProfileArgs),
    /// Show the stored profile
    Show,
    /// Remove the stored profile
    Clear,
}

/// Journal subcommands
#[derive(Subcommand)]
pub enum JournalCommands {
    /// Add a journal entry
    Add(AddJournalArgs),
    /// List journal entries, newest first
    List,
}

/// Content inspection subcommands
#[derive(Subcommand)]
pub enum ContentCommands {
    /// Validate the bundled curriculum and support content
    Validate,
}

/// Create or replace the puppy profile
#[derive(ClapArgs)]
pub struct SetProfileArgs {
    /// The puppy's name
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: String,
    /// Sex: female, male, or unsure
    #[arg(short, long, default_value = "unsure")]
    pub sex: String,
    /// Path or reference to a profile photo
    #[arg(long)]
    pub photo: Option<String>,
}

impl From<SetProfileArgs> for SetProfile {
    fn from(val: SetProfileArgs) -> Self {
        SetProfile {
            name: val.name,
            date_of_birth: val.date_of_birth,
            sex: val.sex,
            photo_ref: val.photo,
        }
    }
}

/// Show today's training plan
#[derive(ClapArgs)]
pub struct TodayArgs {
    /// Show the plan for an explicit curriculum week instead of the
    /// puppy's current one
    #[arg(short, long)]
    pub week: Option<u32>,
}

/// Toggle a lesson's practiced state for today
#[derive(ClapArgs)]
pub struct PracticeArgs {
    /// Lesson id to toggle (as shown by `paws today`)
    pub lesson_id: String,
    /// Note about how the session went
    #[arg(short, long)]
    pub note: Option<String>,
    /// Path or reference to a photo or video of the session
    #[arg(long)]
    pub media: Option<String>,
}

/// Add a journal entry
#[derive(ClapArgs)]
pub struct AddJournalArgs {
    /// Entry text
    pub text: String,
    /// Path or reference to an attached photo
    #[arg(long)]
    pub photo: Option<String>,
}

impl From<AddJournalArgs> for AddJournalEntry {
    fn from(val: AddJournalArgs) -> Self {
        AddJournalEntry {
            text: val.text,
            photo_ref: val.photo,
        }
    }
}

/// Browse or search the support library
#[derive(ClapArgs)]
pub struct TipsArgs {
    /// Free-text query; omit to list every category
    pub query: Option<String>,
}

impl From<TipsArgs> for SearchTips {
    fn from(val: TipsArgs) -> Self {
        SearchTips { query: val.query }
    }
}
