//! Command handlers bridging parsed arguments and the trainer.
//!
//! Each handler converts its CLI arguments into core parameter types,
//! invokes the trainer, and renders the result through the terminal
//! renderer. Handlers own user-facing wording; the core never formats
//! CLI-specific messages.

use anyhow::{Context, Result, bail};
use jiff::Timestamp;
use pawsteps_core::{
    OperationStatus, Trainer, TrainerError, WeekList,
    params::{AttachNote, LogPractice, ToggleLesson},
};

use crate::args::{
    AddJournalArgs, ContentCommands, JournalCommands, PracticeArgs, ProfileCommands,
    SetProfileArgs, TipsArgs, TodayArgs,
};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the trainer and renderer.
pub struct Cli {
    trainer: Trainer,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(trainer: Trainer, renderer: TerminalRenderer) -> Self {
        Self { trainer, renderer }
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Set(args) => self.set_profile(args).await,
            ProfileCommands::Show => self.show_profile().await,
            ProfileCommands::Clear => self.clear_profile().await,
        }
    }

    pub async fn handle_journal_command(&self, command: JournalCommands) -> Result<()> {
        match command {
            JournalCommands::Add(args) => self.add_journal_entry(args).await,
            JournalCommands::List => self.list_journal().await,
        }
    }

    pub async fn handle_content_command(&self, command: ContentCommands) -> Result<()> {
        match command {
            ContentCommands::Validate => self.validate_content(),
        }
    }

    async fn set_profile(&self, args: SetProfileArgs) -> Result<()> {
        let profile = self
            .trainer
            .save_profile(&args.into())
            .await
            .context("Failed to save profile")?;

        let status = OperationStatus::success(format!("Profile saved for {}", profile.name));
        self.renderer.render(&format!("{status}"))?;
        self.renderer.render(&format!("{profile}"))
    }

    async fn show_profile(&self) -> Result<()> {
        match self.trainer.profile().await? {
            Some(profile) => self.renderer.render(&format!("{profile}")),
            None => self
                .renderer
                .render("No profile set. Run `paws profile set <name> <date-of-birth>`.\n"),
        }
    }

    async fn clear_profile(&self) -> Result<()> {
        self.trainer
            .delete_profile()
            .await
            .context("Failed to clear profile")?;
        let status = OperationStatus::success("Profile removed".to_string());
        self.renderer.render(&format!("{status}"))
    }

    pub async fn show_today(&self, args: TodayArgs) -> Result<()> {
        let now = Timestamp::now();
        let view = match args.week {
            Some(week) => self.trainer.plan_for_week(week, now).await,
            None => self.trainer.today(now).await,
        };

        match view {
            Ok(view) => self.renderer.render(&format!("{view}")),
            Err(TrainerError::ProfileMissing) => {
                bail!("No profile yet. Run `paws profile set <name> <date-of-birth>` first.")
            }
            Err(e) => Err(e).context("Failed to build today's plan"),
        }
    }

    pub async fn practice(&self, args: PracticeArgs) -> Result<()> {
        let now = Timestamp::now();

        if self.trainer.catalog().lesson_by_id(&args.lesson_id).is_none() {
            return Err(TrainerError::LessonNotFound {
                id: args.lesson_id.clone(),
            }
            .into());
        }

        // Resolving today's view also ensures the plan exists.
        let view = match self.trainer.today(now).await {
            Ok(view) => view,
            Err(TrainerError::ProfileMissing) => {
                bail!("No profile yet. Run `paws profile set <name> <date-of-birth>` first.")
            }
            Err(e) => return Err(e).context("Failed to build today's plan"),
        };

        let toggled = self
            .trainer
            .toggle_practiced_lesson(
                &ToggleLesson {
                    week_id: view.week.id.clone(),
                    lesson_id: args.lesson_id.clone(),
                },
                now,
            )
            .await?;

        let practiced = match toggled {
            Some(practiced) => practiced,
            // Outside today's plan the log still tracks the practice.
            None => {
                let practiced = self.trainer.toggle_practice(&args.lesson_id, now)?;
                self.renderer
                    .render(&format!("`{}` is not in today's plan.\n", args.lesson_id))?;
                practiced
            }
        };

        if practiced {
            if let Some(note) = &args.note {
                let attached = self.trainer.attach_note(
                    &AttachNote {
                        lesson_id: args.lesson_id.clone(),
                        note: note.clone(),
                        media_ref: args.media.clone(),
                    },
                    now,
                )?;
                if !attached {
                    self.trainer.log_practice(
                        &LogPractice {
                            lesson_id: args.lesson_id.clone(),
                            note: Some(note.clone()),
                            media_ref: args.media.clone(),
                        },
                        now,
                    )?;
                }
            }
            self.renderer
                .render(&format!("✓ `{}` practiced today\n", args.lesson_id))?;
        } else {
            self.renderer
                .render(&format!("○ `{}` no longer practiced today\n", args.lesson_id))?;
        }

        // The process exits right after; do not rely on the debounce window.
        self.trainer
            .flush_practice_log()
            .await
            .context("Failed to persist practice log")
    }

    async fn add_journal_entry(&self, args: AddJournalArgs) -> Result<()> {
        let entry = self
            .trainer
            .add_journal_entry(&args.into(), Timestamp::now())
            .await
            .context("Failed to add journal entry")?;

        let status = OperationStatus::success(format!("Journal entry {} added", entry.id));
        self.renderer.render(&format!("{status}"))
    }

    async fn list_journal(&self) -> Result<()> {
        let entries = self.trainer.journal().await?;
        self.renderer.render(&format!("{entries}"))
    }

    pub fn show_tips(&self, args: TipsArgs) -> Result<()> {
        let tips = self.trainer.search_tips(&args.into());
        self.renderer.render(&format!("{tips}"))
    }

    pub fn show_weeks(&self) -> Result<()> {
        let weeks = WeekList(self.trainer.catalog().weeks());
        self.renderer.render(&format!("{weeks}"))
    }

    fn validate_content(&self) -> Result<()> {
        let status = self.trainer.catalog().status();
        let weeks = self.trainer.catalog().weeks();
        let lesson_count: usize = weeks
            .iter()
            .map(|week| self.trainer.catalog().lessons_for_week(&week.id).len())
            .sum();

        if status.valid {
            self.renderer.render(&format!(
                "Content OK: {} week(s), {} lesson(s), {} support categorie(s)\n",
                weeks.len(),
                lesson_count,
                self.trainer.catalog().support_categories().len()
            ))
        } else {
            for error in &status.errors {
                eprintln!("content: {error}");
            }
            bail!("Content validation found {} issue(s)", status.errors.len())
        }
    }
}
