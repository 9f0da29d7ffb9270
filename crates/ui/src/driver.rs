//! Turns session commands into timed events.
//!
//! The session never keeps time itself. `TimerQueue` remembers which
//! countdown is running and when the next tick, expiry and progress frame
//! are due; the terminal loop polls it with the current `Instant`.

use std::time::{Duration, Instant};

use catv_core::review::{CountdownId, ReviewCommand, ReviewEvent};

/// Spacing between progress animation frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Stand-in for a deadline that does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn after(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

#[derive(Debug, Clone, Copy)]
struct ActiveCountdown {
    id: CountdownId,
    started: Instant,
    deadline: Instant,
    tick_interval: Duration,
    next_tick: Instant,
    expired: bool,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    countdown: Option<ActiveCountdown>,
    frame: Option<(CountdownId, Instant)>,
    exited: bool,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the work described by `commands`.
    ///
    /// Returns `true` once an `Exit` command has been seen.
    pub fn apply(&mut self, commands: &[ReviewCommand], now: Instant) -> bool {
        for command in commands {
            match *command {
                ReviewCommand::StartCountdown {
                    countdown,
                    duration,
                    tick_interval,
                } => {
                    self.countdown = Some(ActiveCountdown {
                        id: countdown,
                        started: now,
                        deadline: after(now, duration),
                        tick_interval,
                        next_tick: after(now, tick_interval),
                        expired: false,
                    });
                    self.frame = None;
                }
                ReviewCommand::AnimateProgress(countdown) => {
                    let current = self.countdown.map(|c| c.id);
                    if current == Some(countdown) && self.frame.is_none() {
                        self.frame = Some((countdown, after(now, FRAME_INTERVAL)));
                    }
                }
                ReviewCommand::Exit => {
                    self.countdown = None;
                    self.frame = None;
                    self.exited = true;
                }
            }
        }
        self.exited
    }

    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Earliest instant at which `poll` will have something to report.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let countdown = self
            .countdown
            .filter(|c| !c.expired)
            .map(|c| c.next_tick.min(c.deadline));
        let frame = self.frame.map(|(_, at)| at);
        match (countdown, frame) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Events due at `now`, in delivery order.
    ///
    /// At most one tick is emitted per call even if several intervals were
    /// missed; its `elapsed` is measured from the countdown start.
    pub fn poll(&mut self, now: Instant) -> Vec<ReviewEvent> {
        let mut events = Vec::new();

        if let Some(countdown) = self.countdown.as_mut().filter(|c| !c.expired) {
            if now >= countdown.next_tick {
                events.push(ReviewEvent::Tick {
                    countdown: countdown.id,
                    elapsed: now.saturating_duration_since(countdown.started),
                });
                while countdown.next_tick <= now && !countdown.tick_interval.is_zero() {
                    let next = after(countdown.next_tick, countdown.tick_interval);
                    if next == countdown.next_tick {
                        break;
                    }
                    countdown.next_tick = next;
                }
                if countdown.tick_interval.is_zero() {
                    countdown.next_tick = countdown.deadline;
                }
            }
            if now >= countdown.deadline {
                countdown.expired = true;
                events.push(ReviewEvent::CountdownExpired(countdown.id));
            }
        }

        if let Some((id, at)) = self.frame {
            if now >= at {
                self.frame = None;
                events.push(ReviewEvent::ProgressFrame(id));
            }
        }

        events
    }
}
