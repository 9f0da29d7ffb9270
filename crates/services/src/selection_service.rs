use std::sync::Arc;

use catv_core::model::Card;
use storage::repository::CardRepository;
use tracing::debug;

use crate::Clock;
use crate::error::SelectionError;

/// Per-file counts shown by the `files` listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub file: String,
    pub total: u32,
    pub due: u32,
}

/// Answers "what can be reviewed right now".
#[derive(Clone)]
pub struct SelectionService {
    clock: Clock,
    cards: Arc<dyn CardRepository>,
}

impl SelectionService {
    #[must_use]
    pub fn new(clock: Clock, cards: Arc<dyn CardRepository>) -> Self {
        Self { clock, cards }
    }

    /// Distinct source files with at least one card, sorted.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Storage` if the repository query fails.
    pub async fn files(&self) -> Result<Vec<String>, SelectionError> {
        Ok(self.cards.unique_files().await?)
    }

    /// Due cards from the selected files, in stored order.
    ///
    /// An empty selection yields an empty deck without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Storage` if the repository query fails.
    pub async fn due_cards(&self, files: &[String]) -> Result<Vec<Card>, SelectionError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        let cards = self
            .cards
            .due_cards_for_files(files, self.clock.now())
            .await?;
        debug!(files = files.len(), due = cards.len(), "selected due cards");
        Ok(cards)
    }

    /// Card and due counts per file.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Storage` if the repository query fails.
    pub async fn file_summaries(&self) -> Result<Vec<FileSummary>, SelectionError> {
        let files = self.files().await?;
        let cards = self.cards.list_cards(self.clock.now()).await?;

        let summaries = files
            .into_iter()
            .map(|file| {
                let (total, due) = cards
                    .iter()
                    .filter(|card| card.file() == file)
                    .fold((0_u32, 0_u32), |(total, due), card| {
                        (total + 1, due + u32::from(card.is_due()))
                    });
                FileSummary { file, total, due }
            })
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catv_core::model::{CardDraft, CardId};
    use catv_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    async fn service_with(entries: &[(&str, &str)]) -> (SelectionService, Vec<Card>) {
        let repo = Arc::new(InMemoryRepository::new());
        let mut cards = Vec::new();
        for (file, question) in entries {
            let draft = CardDraft::new(*file, *question, "A").validate().unwrap();
            cards.push(repo.insert_card(&draft, fixed_now()).await.unwrap());
        }
        (SelectionService::new(Clock::fixed(fixed_now()), repo), cards)
    }

    #[tokio::test]
    async fn empty_selection_is_empty_deck() {
        let (service, _) = service_with(&[("a.md", "Q")]).await;
        assert!(service.due_cards(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summaries_count_due_cards_per_file() {
        let repo = Arc::new(InMemoryRepository::new());
        for (file, q) in [("a.md", "1"), ("a.md", "2"), ("b.md", "3")] {
            let draft = CardDraft::new(file, q, "A").validate().unwrap();
            repo.insert_card(&draft, fixed_now()).await.unwrap();
        }
        let first = repo.get_card(CardId::new(1), fixed_now()).await.unwrap();
        repo.update_interval(&first.with_revisit_in(3), fixed_now())
            .await
            .unwrap();

        let service = SelectionService::new(Clock::fixed(fixed_now()), repo);
        let summaries = service.file_summaries().await.unwrap();
        assert_eq!(
            summaries,
            vec![
                FileSummary {
                    file: "a.md".into(),
                    total: 2,
                    due: 1
                },
                FileSummary {
                    file: "b.md".into(),
                    total: 1,
                    due: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn due_cards_come_back_in_id_order() {
        let (service, cards) = service_with(&[("a.md", "1"), ("b.md", "2"), ("a.md", "3")]).await;
        let files = vec!["a.md".to_owned(), "b.md".to_owned()];
        let due = service.due_cards(&files).await.unwrap();
        assert_eq!(due, cards);
    }
}
