//! Maps a finished session's outcomes onto card updates.
//!
//! The rule is kept exactly as the review command has always applied it:
//!
//! | judged correct | recorded interval | action                        |
//! |----------------|-------------------|-------------------------------|
//! | yes            | > 0               | store the chosen interval     |
//! | no             | > 0               | store interval 1              |
//! | any            | 0                 | leave the card untouched      |
//!
//! A card marked incorrect through the normal flow never records an interval,
//! so it lands in the last row and keeps its current (due) interval.

use super::outcome::ReviewResults;
use crate::model::Card;

/// Why a card is being written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBackReason {
    /// Judged correct; the chosen interval is stored.
    Rescheduled,
    /// Judged incorrect with an interval on record; revisit as soon as possible.
    RevisitSoon,
}

/// A single pending store update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteBackPlan {
    pub index: usize,
    pub card: Card,
    pub reason: WriteBackReason,
}

/// Interval stored for cards routed through `WriteBackReason::RevisitSoon`.
pub const REVISIT_SOON_DAYS: i64 = 1;

/// Plan updates for `deck` in deck order.
///
/// `results` shorter than `deck` simply leaves the tail untouched.
#[must_use]
pub fn plan_write_back(deck: &[Card], results: &ReviewResults) -> Vec<WriteBackPlan> {
    deck.iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let interval = results.revisit_interval(index);
            if interval == 0 {
                return None;
            }
            let (days, reason) = if results.was_correct(index) {
                (i64::from(interval), WriteBackReason::Rescheduled)
            } else {
                (REVISIT_SOON_DAYS, WriteBackReason::RevisitSoon)
            };
            Some(WriteBackPlan {
                index,
                card: card.with_revisit_in(days),
                reason,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardId, RevisitChoice};
    use crate::review::{Judgment, ReviewEvent, ReviewSession, ReviewSettings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck(len: u64) -> Vec<Card> {
        (1..=len)
            .map(|id| {
                Card::from_persisted(CardId::new(id), "f.md".into(), "Q".into(), "A".into(), -2)
            })
            .collect()
    }

    #[test]
    fn correct_with_interval_is_rescheduled() {
        let deck = deck(2);
        let mut results = ReviewResults::new(2);
        results.judge(0, Judgment::Correct);
        results.choose_interval(0, 7);
        results.judge(1, Judgment::Incorrect);

        let plan = plan_write_back(&deck, &results);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].index, 0);
        assert_eq!(plan[0].card.id(), CardId::new(1));
        assert_eq!(plan[0].card.revisit_in(), 7);
        assert_eq!(plan[0].reason, WriteBackReason::Rescheduled);
    }

    #[test]
    fn incorrect_with_recorded_interval_is_forced_to_one() {
        let deck = deck(1);
        let mut results = ReviewResults::new(1);
        results.judge(0, Judgment::Incorrect);
        results.choose_interval(0, 9);

        let plan = plan_write_back(&deck, &results);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].card.revisit_in(), REVISIT_SOON_DAYS);
        assert_eq!(plan[0].reason, WriteBackReason::RevisitSoon);
    }

    #[test]
    fn correct_without_interval_and_unreached_cards_are_skipped() {
        let deck = deck(3);
        let mut results = ReviewResults::new(3);
        results.judge(0, Judgment::Correct);
        assert!(plan_write_back(&deck, &results).is_empty());
    }

    #[test]
    fn session_scenario_updates_only_the_rescheduled_card() {
        let deck = deck(2);
        let mut session =
            ReviewSession::with_rng(deck.clone(), ReviewSettings::default(), StdRng::seed_from_u64(1));
        session.update(ReviewEvent::Confirm);
        session.update(ReviewEvent::JudgeCorrect);
        session.update(ReviewEvent::ChooseInterval(RevisitChoice::Seven));
        session.update(ReviewEvent::Confirm);
        session.update(ReviewEvent::JudgeIncorrect);

        let plan = plan_write_back(&deck, session.results());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].card.id(), CardId::new(1));
        assert_eq!(plan[0].card.revisit_in(), 7);
    }

    #[test]
    fn quit_session_plans_nothing_for_unreached_cards() {
        let deck = deck(3);
        let mut session =
            ReviewSession::with_rng(deck.clone(), ReviewSettings::default(), StdRng::seed_from_u64(1));
        session.update(ReviewEvent::Confirm);
        session.update(ReviewEvent::JudgeCorrect);
        session.update(ReviewEvent::Quit);

        assert!(plan_write_back(&deck, &session.into_results()).is_empty());
    }
}
