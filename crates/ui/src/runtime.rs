//! Terminal setup, teardown and the event loops for each screen.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use catv_core::review::{ReviewEvent, ReviewSession};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use rand::TryRngCore;
use tracing::{debug, info};

use crate::driver::TimerQueue;
use crate::error::UiError;
use crate::file_selector::{FileSelector, SelectorStatus};
use crate::keys;
use crate::views;
use crate::vm::ReviewVm;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(100);

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn enter() -> Result<Tui, UiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave(terminal: &mut Tui) -> Result<(), UiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Let the user pick source files. Cancelling yields an empty list.
///
/// # Errors
///
/// Returns `UiError::Io` if the terminal cannot be driven.
pub fn run_file_selector(files: Vec<String>) -> Result<Vec<String>, UiError> {
    let mut selector = FileSelector::new(files);
    let mut terminal = enter()?;
    let result = selector_loop(&mut terminal, &mut selector);
    leave(&mut terminal)?;
    result?;

    let selection = selector.into_selection();
    info!(selected = selection.len(), "file selection finished");
    Ok(selection)
}

fn selector_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    selector: &mut FileSelector,
) -> Result<(), UiError> {
    selector.resize(terminal.size()?.height);
    loop {
        terminal.draw(|f| views::file_selector::draw(f, selector))?;
        if *selector.status() != SelectorStatus::Pending {
            return Ok(());
        }
        if event::poll(IDLE_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = keys::selector_action(&key) {
                        selector.apply(action);
                    }
                }
                Event::Resize(_, height) => selector.resize(height),
                _ => {}
            }
        }
    }
}

/// Run `session` in the terminal until the user quits.
///
/// # Errors
///
/// Returns `UiError::Io` if the terminal cannot be driven.
pub fn run_review<R: TryRngCore>(session: &mut ReviewSession<R>) -> Result<(), UiError> {
    info!(cards = session.len(), "review session started");
    let mut terminal = enter()?;
    let result = review_loop(&mut terminal, session);
    leave(&mut terminal)?;
    result?;

    let tally = session.tally();
    info!(
        correct = tally.correct,
        incorrect = tally.incorrect,
        finished = session.is_finished(),
        "review session ended"
    );
    Ok(())
}

fn review_loop<B: Backend, R: TryRngCore>(
    terminal: &mut Terminal<B>,
    session: &mut ReviewSession<R>,
) -> Result<(), UiError> {
    let mut timers = TimerQueue::new();
    let size = terminal.size()?;
    session.update(ReviewEvent::Resize {
        width: size.width,
        height: size.height,
    });
    timers.apply(&session.init(), Instant::now());

    loop {
        terminal.draw(|f| views::review::draw(f, &ReviewVm::from_session(session)))?;
        if session.is_terminated() {
            return Ok(());
        }

        let now = Instant::now();
        let timeout = timers
            .next_deadline()
            .map_or(IDLE_POLL, |at| at.saturating_duration_since(now))
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            let input = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => keys::review_event(&key),
                Event::Resize(width, height) => Some(ReviewEvent::Resize { width, height }),
                _ => None,
            };
            if let Some(input) = input {
                dispatch(session, &mut timers, input);
            }
        }

        let due = timers.poll(Instant::now());
        if !due.is_empty() {
            debug!(events = due.len(), "delivering timer events");
        }
        for timed in due {
            dispatch(session, &mut timers, timed);
        }
    }
}

fn dispatch<R: TryRngCore>(
    session: &mut ReviewSession<R>,
    timers: &mut TimerQueue,
    event: ReviewEvent,
) {
    let commands = session.update(event);
    timers.apply(&commands, Instant::now());
}
