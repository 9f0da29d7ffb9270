#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Context;
use catv_core::review::ReviewSettings;
use clap::Parser;
use services::{AppServices, Clock};
use tracing::{error, info};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.overrides())?;

    // Open + migrate SQLite here so the library crates never touch the environment.
    config
        .ensure_data_dir()
        .with_context(|| format!("failed to create data directory {}", config.data_dir.display()))?;
    logging::init(&config.log_path(), &config.log_filter)?;
    info!(
        data_dir = %config.data_dir.display(),
        db_url = %config.database_url,
        "starting catv"
    );

    let services = AppServices::new_sqlite(&config.database_url, Clock::system())
        .await
        .context("failed to open the flashcard database")?;

    match cli.selected_command() {
        Command::Review => {
            let settings = ReviewSettings::default().with_question_time(config.question_time);
            commands::review::execute(&services, settings).await
        }
        Command::Files => commands::files::execute(&services).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!(error = %format!("{err:#}"), "catv exited with an error");
        ui::console::print_error("Error:", &format!("{err:#}"));
        std::process::exit(2);
    }
}
