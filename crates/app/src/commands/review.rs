//! The `review` command: pick files, quiz the due cards, store the outcomes.

use catv_core::review::{ReviewSession, ReviewSettings, WriteBackReason};
use services::{AppServices, WriteBackReport};
use tracing::{error, info};

pub const NO_FILES: &str = "No files found in the database. Generate flashcards first.";
pub const NOTHING_SELECTED: &str = "No files selected. See you next time!";
pub const NOTHING_DUE: &str = "No flashcards due for review in the selected file(s). Well done!";

/// The interactive parts of a review, kept behind a seam so the flow can be
/// exercised without a terminal.
pub trait ReviewFrontend {
    /// Let the user choose among `files`; an empty result means "nothing chosen".
    ///
    /// # Errors
    ///
    /// Returns an error if the selection screen cannot run.
    fn select_files(&mut self, files: Vec<String>) -> anyhow::Result<Vec<String>>;

    /// Drive `session` until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the review screen cannot run.
    fn review(&mut self, session: &mut ReviewSession) -> anyhow::Result<()>;
}

/// Full-screen terminal implementation.
pub struct TerminalFrontend;

impl ReviewFrontend for TerminalFrontend {
    fn select_files(&mut self, files: Vec<String>) -> anyhow::Result<Vec<String>> {
        Ok(ui::run_file_selector(files)?)
    }

    fn review(&mut self, session: &mut ReviewSession) -> anyhow::Result<()> {
        Ok(ui::run_review(session)?)
    }
}

#[derive(Debug)]
pub enum ReviewOutcome {
    NoFiles,
    NothingSelected,
    NothingDue,
    Reviewed {
        report: WriteBackReport,
        /// The review screen failed part-way; outcomes recorded so far were still stored.
        interrupted: Option<String>,
    },
}

impl ReviewOutcome {
    /// Informational message for the early exits.
    #[must_use]
    pub fn info_message(&self) -> Option<&'static str> {
        match self {
            ReviewOutcome::NoFiles => Some(NO_FILES),
            ReviewOutcome::NothingSelected => Some(NOTHING_SELECTED),
            ReviewOutcome::NothingDue => Some(NOTHING_DUE),
            ReviewOutcome::Reviewed { .. } => None,
        }
    }
}

/// One success line per stored card, in deck order.
#[must_use]
pub fn update_lines(report: &WriteBackReport) -> Vec<String> {
    report
        .updated
        .iter()
        .map(|entry| match entry.reason {
            WriteBackReason::Rescheduled => format!(
                "Updated flashcard {}: revisitin={}",
                entry.card_id, entry.revisit_in
            ),
            WriteBackReason::RevisitSoon => format!(
                "Marked flashcard {} incorrect: revisitin set to {}",
                entry.card_id, entry.revisit_in
            ),
        })
        .collect()
}

pub struct ReviewFlow<'a> {
    services: &'a AppServices,
    settings: ReviewSettings,
}

impl<'a> ReviewFlow<'a> {
    #[must_use]
    pub fn new(services: &'a AppServices, settings: ReviewSettings) -> Self {
        Self { services, settings }
    }

    /// Run the whole review command against `frontend`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage queries fail or the file selector cannot run.
    /// A failing review screen is reported through `ReviewOutcome::Reviewed`.
    pub async fn run(&self, frontend: &mut impl ReviewFrontend) -> anyhow::Result<ReviewOutcome> {
        let selection = self.services.selection();

        let files = selection.files().await?;
        if files.is_empty() {
            return Ok(ReviewOutcome::NoFiles);
        }

        let chosen = frontend.select_files(files)?;
        if chosen.is_empty() {
            return Ok(ReviewOutcome::NothingSelected);
        }

        let deck = selection.due_cards(&chosen).await?;
        if deck.is_empty() {
            return Ok(ReviewOutcome::NothingDue);
        }
        info!(files = chosen.len(), cards = deck.len(), "starting review");

        let mut session = ReviewSession::new(deck.clone(), self.settings);
        let interrupted = match frontend.review(&mut session) {
            Ok(()) => None,
            Err(err) => {
                error!(error = %err, "review screen failed");
                Some(err.to_string())
            }
        };

        let report = self
            .services
            .write_back()
            .apply(&deck, session.results())
            .await?;
        Ok(ReviewOutcome::Reviewed {
            report,
            interrupted,
        })
    }
}

/// Entry point for the `review` subcommand.
///
/// # Errors
///
/// Returns an error if the flow itself fails; per-card storage failures are printed.
pub async fn execute(services: &AppServices, settings: ReviewSettings) -> anyhow::Result<()> {
    let outcome = ReviewFlow::new(services, settings)
        .run(&mut TerminalFrontend)
        .await?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &ReviewOutcome) {
    if let Some(message) = outcome.info_message() {
        ui::console::print_info(message);
        return;
    }
    let ReviewOutcome::Reviewed {
        report,
        interrupted,
    } = outcome
    else {
        return;
    };

    if let Some(reason) = interrupted {
        ui::console::print_error("Error running review:", reason);
    }
    for line in update_lines(report) {
        ui::console::print_success(&line);
    }
    for failure in &report.failures {
        ui::console::print_error(
            &format!("Failed to update flashcard {}:", failure.card_id),
            &failure.error,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catv_core::model::{CardDraft, CardId, RevisitChoice};
    use catv_core::review::ReviewEvent;
    use catv_core::time::fixed_now;
    use services::{Clock, WriteBackEntry};
    use storage::repository::Storage;

    /// Picks a fixed set of files and replays a fixed event script.
    struct Scripted {
        pick: Vec<String>,
        events: Vec<ReviewEvent>,
        offered: Vec<String>,
        fail_review: bool,
    }

    impl Scripted {
        fn new(pick: &[&str], events: Vec<ReviewEvent>) -> Self {
            Self {
                pick: pick.iter().map(|s| (*s).to_owned()).collect(),
                events,
                offered: Vec::new(),
                fail_review: false,
            }
        }
    }

    impl ReviewFrontend for Scripted {
        fn select_files(&mut self, files: Vec<String>) -> anyhow::Result<Vec<String>> {
            self.offered = files;
            Ok(self.pick.clone())
        }

        fn review(&mut self, session: &mut ReviewSession) -> anyhow::Result<()> {
            for event in self.events.drain(..) {
                session.update(event);
            }
            if self.fail_review {
                anyhow::bail!("terminal went away");
            }
            Ok(())
        }
    }

    async fn services_with(entries: &[(&str, &str)]) -> AppServices {
        let storage = Storage::in_memory();
        for (file, question) in entries {
            let draft = CardDraft::new(*file, *question, "A").validate().unwrap();
            storage.cards.insert_card(&draft, fixed_now()).await.unwrap();
        }
        AppServices::new(&storage, Clock::fixed(fixed_now()))
    }

    fn flow(services: &AppServices) -> ReviewFlow<'_> {
        ReviewFlow::new(services, ReviewSettings::default())
    }

    #[tokio::test]
    async fn empty_database_short_circuits() {
        let services = services_with(&[]).await;
        let mut frontend = Scripted::new(&["a.md"], Vec::new());
        let outcome = flow(&services).run(&mut frontend).await.unwrap();
        assert_eq!(outcome.info_message(), Some(NO_FILES));
        assert!(frontend.offered.is_empty());
    }

    #[tokio::test]
    async fn empty_selection_short_circuits() {
        let services = services_with(&[("a.md", "Q")]).await;
        let mut frontend = Scripted::new(&[], Vec::new());
        let outcome = flow(&services).run(&mut frontend).await.unwrap();
        assert_eq!(outcome.info_message(), Some(NOTHING_SELECTED));
        assert_eq!(frontend.offered, vec!["a.md"]);
    }

    #[tokio::test]
    async fn nothing_due_short_circuits() {
        let services = services_with(&[("a.md", "Q")]).await;
        let mut frontend = Scripted::new(&["b.md"], Vec::new());
        let outcome = flow(&services).run(&mut frontend).await.unwrap();
        assert_eq!(outcome.info_message(), Some(NOTHING_DUE));
    }

    #[tokio::test]
    async fn reviewed_cards_are_written_back() {
        let services = services_with(&[("a.md", "Q1"), ("a.md", "Q2")]).await;
        let mut frontend = Scripted::new(
            &["a.md"],
            vec![
                ReviewEvent::Confirm,
                ReviewEvent::JudgeCorrect,
                ReviewEvent::ChooseInterval(RevisitChoice::Seven),
                ReviewEvent::Confirm,
                ReviewEvent::JudgeIncorrect,
                ReviewEvent::Quit,
            ],
        );
        let outcome = flow(&services).run(&mut frontend).await.unwrap();
        let ReviewOutcome::Reviewed {
            report,
            interrupted,
        } = outcome
        else {
            panic!("expected a review");
        };
        assert!(interrupted.is_none());
        assert_eq!(
            report.updated,
            vec![WriteBackEntry {
                card_id: CardId::new(1),
                revisit_in: 7,
                reason: WriteBackReason::Rescheduled,
            }]
        );
        assert_eq!(update_lines(&report), vec!["Updated flashcard 1: revisitin=7"]);
    }

    #[tokio::test]
    async fn failing_screen_still_stores_finished_cards() {
        let services = services_with(&[("a.md", "Q1"), ("a.md", "Q2")]).await;
        let mut frontend = Scripted::new(
            &["a.md"],
            vec![
                ReviewEvent::Confirm,
                ReviewEvent::JudgeCorrect,
                ReviewEvent::ChooseInterval(RevisitChoice::One),
            ],
        );
        frontend.fail_review = true;
        let outcome = flow(&services).run(&mut frontend).await.unwrap();
        let ReviewOutcome::Reviewed {
            report,
            interrupted,
        } = outcome
        else {
            panic!("expected a review");
        };
        assert_eq!(interrupted.as_deref(), Some("terminal went away"));
        assert_eq!(report.updated.len(), 1);
    }

    #[test]
    fn revisit_soon_lines_match_console_wording() {
        let report = WriteBackReport {
            updated: vec![WriteBackEntry {
                card_id: CardId::new(4),
                revisit_in: 1,
                reason: WriteBackReason::RevisitSoon,
            }],
            failures: Vec::new(),
        };
        assert_eq!(
            update_lines(&report),
            vec!["Marked flashcard 4 incorrect: revisitin set to 1"]
        );
    }
}
