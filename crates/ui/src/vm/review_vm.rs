use catv_core::review::{ReviewSession, ReviewView};

/// What the review screen shows for the current session state.
#[derive(Clone, Debug, PartialEq)]
pub enum ReviewScreen {
    Question {
        text: String,
        progress: f64,
        remaining_secs: u64,
    },
    Answer { text: String },
    RevisitChoice { status: Option<String> },
    Done { message: String, status: Option<String> },
    Goodbye,
}

/// Counters shown under every card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BottomBarVm {
    pub correct: usize,
    pub incorrect: usize,
    pub position: usize,
    pub total: usize,
}

impl BottomBarVm {
    #[must_use]
    pub fn left(&self) -> String {
        format!("✅ {}", self.correct)
    }

    #[must_use]
    pub fn center(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }

    #[must_use]
    pub fn right(&self) -> String {
        format!("❌ {}", self.incorrect)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewVm {
    pub screen: ReviewScreen,
    pub bar: BottomBarVm,
}

impl ReviewVm {
    #[must_use]
    pub fn from_session<R>(session: &ReviewSession<R>) -> Self {
        let tally = session.tally();
        let total = session.len();
        let position = if session.view() == ReviewView::Done {
            total
        } else {
            session.position() + 1
        };
        let bar = BottomBarVm {
            correct: tally.correct,
            incorrect: tally.incorrect,
            position,
            total,
        };

        let status = session.status_message().map(str::to_owned);
        let screen = if session.is_terminated() {
            ReviewScreen::Goodbye
        } else {
            match (session.view(), session.current_card()) {
                (ReviewView::Question, Some(card)) => ReviewScreen::Question {
                    text: card.question().to_owned(),
                    progress: session.progress().fraction(),
                    remaining_secs: whole_seconds_left(session),
                },
                (ReviewView::Answer, Some(card)) => ReviewScreen::Answer {
                    text: card.answer().to_owned(),
                },
                (ReviewView::RevisitChoice, Some(_)) => ReviewScreen::RevisitChoice { status },
                _ => ReviewScreen::Done {
                    message: session.completion_message().unwrap_or_default().to_owned(),
                    status,
                },
            }
        };

        Self { screen, bar }
    }
}

fn whole_seconds_left<R>(session: &ReviewSession<R>) -> u64 {
    let remaining = session.countdown().remaining();
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}

/// Text progress bar `width` cells wide.
#[must_use]
pub fn progress_bar(fraction: f64, width: u16) -> (String, String) {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let width = usize::from(width);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((width as f64) * fraction).round() as usize;
    let filled = filled.min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}
