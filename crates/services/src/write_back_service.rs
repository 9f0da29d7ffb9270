use std::sync::Arc;

use catv_core::model::{Card, CardId};
use catv_core::review::{ReviewResults, WriteBackReason, plan_write_back};
use storage::repository::{CardRepository, StorageError};
use tracing::{info, warn};

use crate::Clock;
use crate::error::WriteBackError;

/// A card whose new interval was stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteBackEntry {
    pub card_id: CardId,
    pub revisit_in: i64,
    pub reason: WriteBackReason,
}

/// A card whose update failed; the remaining cards are still attempted.
#[derive(Debug)]
pub struct WriteBackFailure {
    pub card_id: CardId,
    pub error: StorageError,
}

/// Everything that happened while persisting a session, in deck order.
#[derive(Debug, Default)]
pub struct WriteBackReport {
    pub updated: Vec<WriteBackEntry>,
    pub failures: Vec<WriteBackFailure>,
}

impl WriteBackReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Persists review outcomes after a session has ended.
#[derive(Clone)]
pub struct WriteBackService {
    clock: Clock,
    cards: Arc<dyn CardRepository>,
}

impl WriteBackService {
    #[must_use]
    pub fn new(clock: Clock, cards: Arc<dyn CardRepository>) -> Self {
        Self { clock, cards }
    }

    /// Store the new intervals for `deck` according to `results`.
    ///
    /// Cards with nothing recorded are left untouched. A failed update is
    /// logged and reported; it does not stop the remaining updates.
    ///
    /// # Errors
    ///
    /// Returns `WriteBackError::LengthMismatch` if `results` was not produced
    /// for this deck.
    pub async fn apply(
        &self,
        deck: &[Card],
        results: &ReviewResults,
    ) -> Result<WriteBackReport, WriteBackError> {
        if deck.len() != results.len() {
            return Err(WriteBackError::LengthMismatch {
                deck: deck.len(),
                results: results.len(),
            });
        }

        let now = self.clock.now();
        let mut report = WriteBackReport::default();
        for plan in plan_write_back(deck, results) {
            let card_id = plan.card.id();
            match self.cards.update_interval(&plan.card, now).await {
                Ok(()) => {
                    info!(
                        card_id = card_id.value(),
                        revisit_in = plan.card.revisit_in(),
                        reason = ?plan.reason,
                        "stored revisit interval"
                    );
                    report.updated.push(WriteBackEntry {
                        card_id,
                        revisit_in: plan.card.revisit_in(),
                        reason: plan.reason,
                    });
                }
                Err(error) => {
                    warn!(card_id = card_id.value(), %error, "failed to store revisit interval");
                    report.failures.push(WriteBackFailure { card_id, error });
                }
            }
        }
        Ok(report)
    }
}
