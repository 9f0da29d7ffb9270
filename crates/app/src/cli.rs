use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "catv",
    about = "Cards Against The Void: review flashcards in the terminal",
    version
)]
pub struct Cli {
    /// Directory holding the database and log file (default: ~/.catv)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// SQLite URL or path of the flashcard database
    #[arg(long = "db", global = true, value_name = "URL")]
    pub database_url: Option<String>,

    /// Seconds before the answer is revealed automatically
    #[arg(long, global = true, value_name = "SECS")]
    pub question_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick source files and review the cards that are due (default)
    Review,

    /// List source files with their due and total card counts
    Files,
}

impl Cli {
    #[must_use]
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Review)
    }

    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_dir: self.data_dir.clone(),
            database_url: self.database_url.clone(),
            question_secs: self.question_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn review_is_the_default_command() {
        let cli = Cli::try_parse_from(["catv"]).unwrap();
        assert_eq!(cli.selected_command(), Command::Review);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["catv", "files", "--db", "x.db", "--question-secs", "12"])
            .unwrap();
        assert_eq!(cli.selected_command(), Command::Files);
        let overrides = cli.overrides();
        assert_eq!(overrides.database_url.as_deref(), Some("x.db"));
        assert_eq!(overrides.question_secs, Some(12));
    }
}
