//! Pawsteps CLI Application
//!
//! Command-line interface for the Pawsteps puppy training companion.

mod args;
mod cli;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands, TodayArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use pawsteps_core::TrainerBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let trainer = TrainerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize trainer")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(trainer, renderer);

    info!("Pawsteps started");

    match command {
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Today(args)) => cli.show_today(args).await,
        Some(Practice(args)) => cli.practice(args).await,
        Some(Weeks) => cli.show_weeks(),
        Some(Journal { command }) => cli.handle_journal_command(command).await,
        Some(Tips(args)) => cli.show_tips(args),
        Some(Content { command }) => cli.handle_content_command(command).await,
        None => cli.show_today(TodayArgs { week: None }).await,
    }
}
