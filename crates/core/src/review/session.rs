use std::fmt;
use std::time::Duration;

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::completion::pick_completion_message;
use super::countdown::{Countdown, ProgressBar};
use super::event::{CountdownId, ReviewCommand, ReviewEvent};
use super::outcome::{Judgment, ReviewResults, Tally};
use crate::model::{Card, RevisitChoice};

/// Status shown after a card is marked incorrect.
pub const INCORRECT_STATUS: &str = "Marked incorrect. Card will not be scheduled for repetition.";

/// Status shown after an interval is chosen.
#[must_use]
pub fn revisit_status(choice: RevisitChoice) -> String {
    match choice.days() {
        1 => "Revisit in 1 day".to_owned(),
        days => format!("Revisit in {days} days"),
    }
}

//
// ─── SETTINGS / VIEW ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSettings {
    /// Time allowed per question before the answer is revealed.
    pub question_time: Duration,
    /// Cadence of progress ticks while a question is shown.
    pub tick_interval: Duration,
}

impl ReviewSettings {
    pub const DEFAULT_QUESTION_TIME: Duration = Duration::from_secs(30);
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

    #[must_use]
    pub fn with_question_time(mut self, question_time: Duration) -> Self {
        self.question_time = question_time;
        self
    }
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            question_time: Self::DEFAULT_QUESTION_TIME,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Which screen of the review is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewView {
    Question,
    Answer,
    RevisitChoice,
    Done,
}

/// Last known terminal size. Only affects layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Single-threaded review state machine over a fixed deck.
///
/// All mutation goes through [`ReviewSession::update`], which consumes one
/// event and returns the commands the driving loop must carry out. Nothing
/// here blocks or keeps time on its own.
pub struct ReviewSession<R = OsRng> {
    deck: Vec<Card>,
    position: usize,
    view: ReviewView,
    results: ReviewResults,
    settings: ReviewSettings,
    countdown: Countdown,
    progress: ProgressBar,
    status: Option<String>,
    completion: Option<&'static str>,
    terminated: bool,
    viewport: Viewport,
    rng: R,
}

impl ReviewSession<OsRng> {
    /// Create a session that draws its completion message from the OS entropy source.
    #[must_use]
    pub fn new(deck: Vec<Card>, settings: ReviewSettings) -> Self {
        Self::with_rng(deck, settings, OsRng)
    }
}

impl<R: TryRngCore> ReviewSession<R> {
    /// Create a session with an explicit entropy source.
    ///
    /// An empty deck is finished immediately.
    #[must_use]
    pub fn with_rng(deck: Vec<Card>, settings: ReviewSettings, rng: R) -> Self {
        let results = ReviewResults::new(deck.len());
        let countdown = Countdown::new(
            CountdownId::new(0),
            settings.question_time,
            settings.tick_interval,
        );
        let mut session = Self {
            deck,
            position: 0,
            view: ReviewView::Question,
            results,
            settings,
            countdown,
            progress: ProgressBar::new(),
            status: None,
            completion: None,
            terminated: false,
            viewport: Viewport::default(),
            rng,
        };
        if session.deck.is_empty() {
            session.finish();
        }
        session
    }

    /// Commands needed to get the first card going.
    #[must_use]
    pub fn init(&self) -> Vec<ReviewCommand> {
        if self.terminated || self.view != ReviewView::Question {
            return Vec::new();
        }
        vec![self.start_countdown_command()]
    }

    /// Apply one event. A terminated session ignores everything.
    pub fn update(&mut self, event: ReviewEvent) -> Vec<ReviewCommand> {
        if self.terminated {
            return Vec::new();
        }

        match event {
            ReviewEvent::Quit => self.quit(),
            ReviewEvent::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                Vec::new()
            }
            ReviewEvent::Tick { countdown, elapsed } => self.on_tick(countdown, elapsed),
            ReviewEvent::ProgressFrame(countdown) => self.on_progress_frame(countdown),
            ReviewEvent::CountdownExpired(countdown) => self.on_countdown_expired(countdown),
            ReviewEvent::Confirm => {
                if self.view == ReviewView::Question {
                    self.view = ReviewView::Answer;
                }
                Vec::new()
            }
            ReviewEvent::JudgeCorrect => {
                if self.view == ReviewView::Answer {
                    self.results.judge(self.position, Judgment::Correct);
                    self.view = ReviewView::RevisitChoice;
                }
                Vec::new()
            }
            ReviewEvent::JudgeIncorrect => {
                if self.view != ReviewView::Answer {
                    return Vec::new();
                }
                self.results.judge(self.position, Judgment::Incorrect);
                self.status = Some(INCORRECT_STATUS.to_owned());
                self.advance()
            }
            ReviewEvent::ChooseInterval(choice) => {
                if self.view != ReviewView::RevisitChoice {
                    return Vec::new();
                }
                self.results.choose_interval(self.position, choice.days());
                self.status = Some(revisit_status(choice));
                self.advance()
            }
        }
    }

    fn is_live(&self, countdown: CountdownId) -> bool {
        countdown == self.countdown.id() && self.view == ReviewView::Question
    }

    fn on_tick(&mut self, countdown: CountdownId, elapsed: Duration) -> Vec<ReviewCommand> {
        if !self.is_live(countdown) {
            return Vec::new();
        }
        self.countdown.observe(elapsed);
        if self.progress.set_target(self.countdown.fraction()) {
            vec![ReviewCommand::AnimateProgress(countdown)]
        } else {
            Vec::new()
        }
    }

    fn on_progress_frame(&mut self, countdown: CountdownId) -> Vec<ReviewCommand> {
        if countdown != self.countdown.id() {
            return Vec::new();
        }
        if self.progress.step() {
            vec![ReviewCommand::AnimateProgress(countdown)]
        } else {
            Vec::new()
        }
    }

    fn on_countdown_expired(&mut self, countdown: CountdownId) -> Vec<ReviewCommand> {
        if self.is_live(countdown) {
            self.countdown.mark_expired();
            self.view = ReviewView::Answer;
        }
        Vec::new()
    }

    fn advance(&mut self) -> Vec<ReviewCommand> {
        self.position = (self.position + 1).min(self.deck.len());
        if self.position == self.deck.len() {
            self.finish();
            return Vec::new();
        }

        self.view = ReviewView::Question;
        self.status = None;
        self.countdown = Countdown::new(
            self.countdown.id().next(),
            self.settings.question_time,
            self.settings.tick_interval,
        );
        self.progress = ProgressBar::new();
        vec![self.start_countdown_command()]
    }

    fn finish(&mut self) {
        self.view = ReviewView::Done;
        self.completion = Some(pick_completion_message(&mut self.rng));
    }

    fn quit(&mut self) -> Vec<ReviewCommand> {
        self.terminated = true;
        self.results.discard_from(self.position);
        self.results.mark_terminated();
        vec![ReviewCommand::Exit]
    }

    fn start_countdown_command(&self) -> ReviewCommand {
        ReviewCommand::StartCountdown {
            countdown: self.countdown.id(),
            duration: self.countdown.duration(),
            tick_interval: self.countdown.tick_interval(),
        }
    }
}

impl<R> ReviewSession<R> {
    #[must_use]
    pub fn view(&self) -> ReviewView {
        self.view
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.position)
    }

    #[must_use]
    pub fn settings(&self) -> ReviewSettings {
        self.settings
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Raw `elapsed / total` for the current question, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.countdown.fraction()
    }

    /// Correct/incorrect counts over the cards already passed.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.results.tally(self.position)
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn completion_message(&self) -> Option<&'static str> {
        self.completion
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// True once the user quit. Distinct from finishing the deck.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.view == ReviewView::Done
    }

    #[must_use]
    pub fn results(&self) -> &ReviewResults {
        &self.results
    }

    #[must_use]
    pub fn into_results(self) -> ReviewResults {
        self.results
    }

    #[must_use]
    pub fn was_correct<I: TryInto<usize>>(&self, index: I) -> bool {
        self.results.was_correct(index)
    }

    #[must_use]
    pub fn revisit_interval<I: TryInto<usize>>(&self, index: I) -> u32 {
        self.results.revisit_interval(index)
    }
}

impl<R> fmt::Debug for ReviewSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewSession")
            .field("deck_len", &self.deck.len())
            .field("position", &self.position)
            .field("view", &self.view)
            .field("countdown", &self.countdown.id())
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
