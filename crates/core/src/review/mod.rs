//! Interactive review: the per-card state machine, its countdown, and the
//! outcome/write-back contract consumed by callers once a session ends.

mod completion;
mod countdown;
mod event;
mod outcome;
mod session;
mod writeback;

pub use completion::{COMPLETION_MESSAGES, pick_completion_message};
pub use countdown::{Countdown, ProgressBar};
pub use event::{CountdownId, ReviewCommand, ReviewEvent};
pub use outcome::{CardOutcome, Judgment, ReviewResults, Tally};
pub use session::{
    INCORRECT_STATUS, ReviewSession, ReviewSettings, ReviewView, Viewport, revisit_status,
};
pub use writeback::{REVISIT_SOON_DAYS, WriteBackPlan, WriteBackReason, plan_write_back};
