#![forbid(unsafe_code)]

pub mod model;
pub mod review;
pub mod time;

pub use model::{Card, CardDraft, CardError, CardId, RevisitChoice, RevisitError, ValidatedCard};
pub use review::{
    CardOutcome, Countdown, CountdownId, Judgment, ProgressBar, ReviewCommand, ReviewEvent,
    ReviewResults, ReviewSession, ReviewSettings, ReviewView, Tally, Viewport, WriteBackPlan,
    WriteBackReason, plan_write_back,
};
pub use time::Clock;
