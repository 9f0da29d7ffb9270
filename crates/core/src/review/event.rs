use std::fmt;
use std::time::Duration;

use crate::model::RevisitChoice;

/// Tags a single countdown so stale timer events can be told apart from live ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountdownId(u64);

impl CountdownId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for CountdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountdownId({})", self.0)
    }
}

/// Everything the driving loop can deliver to a `ReviewSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    /// Reveal the answer.
    Confirm,
    JudgeCorrect,
    JudgeIncorrect,
    ChooseInterval(RevisitChoice),
    Quit,
    CountdownExpired(CountdownId),
    /// Periodic tick for a running countdown; `elapsed` is measured from its start.
    Tick {
        countdown: CountdownId,
        elapsed: Duration,
    },
    /// One animation frame for the progress indicator.
    ProgressFrame(CountdownId),
    Resize {
        width: u16,
        height: u16,
    },
}

/// Follow-up work the driving loop must perform after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Start a fresh countdown, replacing any running one.
    StartCountdown {
        countdown: CountdownId,
        duration: Duration,
        tick_interval: Duration,
    },
    /// Deliver another `ProgressFrame` for this countdown.
    AnimateProgress(CountdownId),
    /// Stop the loop and drop any pending timers.
    Exit,
}
