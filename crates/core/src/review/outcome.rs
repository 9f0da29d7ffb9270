//! Per-card results of a review session and their read accessors.

/// The user's self-assessment of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Correct,
    Incorrect,
}

/// What was recorded for a single card. Defaults mean "nothing recorded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardOutcome {
    pub judgment: Option<Judgment>,
    /// Days until the next exposure; `0` when no interval was chosen.
    pub revisit_in: u32,
}

impl CardOutcome {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.judgment.is_some()
    }

    #[must_use]
    pub fn was_correct(&self) -> bool {
        self.judgment == Some(Judgment::Correct)
    }
}

/// Running counts of judged cards, used for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub correct: usize,
    pub incorrect: usize,
}

/// Outcomes for every card of a deck, indexed in deck order.
///
/// The accessors accept any integer type and never fail: indices that are
/// negative, past the deck, or not yet judged report `false` / `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewResults {
    outcomes: Vec<CardOutcome>,
    terminated: bool,
}

impl ReviewResults {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            outcomes: vec![CardOutcome::default(); len],
            terminated: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True if the session ended through an explicit quit.
    #[must_use]
    pub fn was_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn outcome<I: TryInto<usize>>(&self, index: I) -> Option<&CardOutcome> {
        index.try_into().ok().and_then(|i| self.outcomes.get(i))
    }

    #[must_use]
    pub fn was_correct<I: TryInto<usize>>(&self, index: I) -> bool {
        self.outcome(index).is_some_and(CardOutcome::was_correct)
    }

    #[must_use]
    pub fn revisit_interval<I: TryInto<usize>>(&self, index: I) -> u32 {
        self.outcome(index).map_or(0, |o| o.revisit_in)
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, CardOutcome> {
        self.outcomes.iter()
    }

    /// Counts judgments among the first `upto` cards.
    #[must_use]
    pub fn tally(&self, upto: usize) -> Tally {
        self.outcomes
            .iter()
            .take(upto)
            .fold(Tally::default(), |mut tally, outcome| {
                match outcome.judgment {
                    Some(Judgment::Correct) => tally.correct += 1,
                    Some(Judgment::Incorrect) => tally.incorrect += 1,
                    None => {}
                }
                tally
            })
    }

    /// Records a judgment once; later judgments for the same card are ignored.
    pub(crate) fn judge(&mut self, index: usize, judgment: Judgment) {
        if let Some(slot) = self.outcomes.get_mut(index).filter(|slot| slot.judgment.is_none()) {
            slot.judgment = Some(judgment);
        }
    }

    /// Records an interval once; later choices for the same card are ignored.
    pub(crate) fn choose_interval(&mut self, index: usize, days: u32) {
        if let Some(slot) = self.outcomes.get_mut(index).filter(|slot| slot.revisit_in == 0) {
            slot.revisit_in = days;
        }
    }

    /// Drops anything partially recorded at `from` and beyond.
    pub(crate) fn discard_from(&mut self, from: usize) {
        for slot in self.outcomes.iter_mut().skip(from) {
            *slot = CardOutcome::default();
        }
    }

    pub(crate) fn mark_terminated(&mut self) {
        self.terminated = true;
    }
}

impl<'a> IntoIterator for &'a ReviewResults {
    type Item = &'a CardOutcome;
    type IntoIter = std::slice::Iter<'a, CardOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_default_for_any_out_of_range_index() {
        let mut results = ReviewResults::new(2);
        results.judge(0, Judgment::Correct);
        results.choose_interval(0, 7);

        assert!(results.was_correct(0_usize));
        assert_eq!(results.revisit_interval(0_i32), 7);

        for index in [-1_i64, -100, 2, 3, i64::MAX, i64::MIN] {
            assert!(!results.was_correct(index));
            assert_eq!(results.revisit_interval(index), 0);
        }
    }

    #[test]
    fn unjudged_cards_read_as_defaults() {
        let results = ReviewResults::new(3);
        assert!(!results.was_correct(1_usize));
        assert_eq!(results.revisit_interval(1_usize), 0);
        assert!(!results.outcome(1_usize).unwrap().is_recorded());
    }

    #[test]
    fn judgments_are_recorded_at_most_once() {
        let mut results = ReviewResults::new(1);
        results.judge(0, Judgment::Incorrect);
        results.judge(0, Judgment::Correct);
        results.choose_interval(0, 3);
        results.choose_interval(0, 9);
        assert!(!results.was_correct(0_usize));
        assert_eq!(results.revisit_interval(0_usize), 3);
    }

    #[test]
    fn tally_only_counts_the_prefix() {
        let mut results = ReviewResults::new(3);
        results.judge(0, Judgment::Correct);
        results.judge(1, Judgment::Incorrect);
        results.judge(2, Judgment::Correct);
        assert_eq!(results.tally(2), Tally { correct: 1, incorrect: 1 });
        assert_eq!(results.tally(10), Tally { correct: 2, incorrect: 1 });
    }

    #[test]
    fn discard_from_resets_the_tail() {
        let mut results = ReviewResults::new(2);
        results.judge(0, Judgment::Correct);
        results.judge(1, Judgment::Correct);
        results.discard_from(1);
        assert!(results.was_correct(0_usize));
        assert_eq!(results.outcome(1_usize), Some(&CardOutcome::default()));
    }
}
