use async_trait::async_trait;
use catv_core::model::{Card, CardId, ValidatedCard};
use catv_core::time::remaining_days;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a card.
///
/// Storage keeps the interval as chosen plus the moment it was chosen; the
/// domain `Card` only ever sees the days still remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: CardId,
    pub file: String,
    pub question: String,
    pub answer: String,
    pub revisit_in: i64,
    pub scheduled_at: DateTime<Utc>,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            id: card.id(),
            file: card.file().to_owned(),
            question: card.question().to_owned(),
            answer: card.answer().to_owned(),
            revisit_in: card.revisit_in(),
            scheduled_at,
        }
    }

    #[must_use]
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        remaining_days(self.revisit_in, self.scheduled_at, now)
    }

    /// Convert the record into a domain `Card` as seen at `now`.
    #[must_use]
    pub fn into_card(self, now: DateTime<Utc>) -> Card {
        let remaining = self.remaining_days(now);
        Card::from_persisted(self.id, self.file, self.question, self.answer, remaining)
    }
}

/// Repository contract for flashcards.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Persist a new card and return it with its assigned ID. New cards are due.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the card cannot be stored.
    async fn insert_card(
        &self,
        card: &ValidatedCard,
        now: DateTime<Utc>,
    ) -> Result<Card, StorageError>;

    /// Fetch a single card as seen at `now`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_card(&self, id: CardId, now: DateTime<Utc>) -> Result<Card, StorageError>;

    /// All cards ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn list_cards(&self, now: DateTime<Utc>) -> Result<Vec<Card>, StorageError>;

    /// Distinct source-file tags, sorted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn unique_files(&self) -> Result<Vec<String>, StorageError>;

    /// Cards from any of `files` whose remaining interval is `<= 0`, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn due_cards_for_files(
        &self,
        files: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<Card>, StorageError>;

    /// Store `card.revisit_in()` as a fresh interval starting at `now`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the card does not exist.
    async fn update_interval(&self, card: &Card, now: DateTime<Utc>) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    cards: Arc<Mutex<BTreeMap<CardId, CardRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_cards<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<CardId, CardRecord>) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut guard = self
            .cards
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        f(&mut guard)
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn insert_card(
        &self,
        card: &ValidatedCard,
        now: DateTime<Utc>,
    ) -> Result<Card, StorageError> {
        self.with_cards(|cards| {
            let next = cards.keys().next_back().map_or(1, |id| id.value() + 1);
            let card = card.clone().assign_id(CardId::new(next));
            cards.insert(card.id(), CardRecord::from_card(&card, now));
            Ok(card)
        })
    }

    async fn get_card(&self, id: CardId, now: DateTime<Utc>) -> Result<Card, StorageError> {
        self.with_cards(|cards| {
            cards
                .get(&id)
                .cloned()
                .map(|record| record.into_card(now))
                .ok_or(StorageError::NotFound)
        })
    }

    async fn list_cards(&self, now: DateTime<Utc>) -> Result<Vec<Card>, StorageError> {
        self.with_cards(|cards| {
            Ok(cards
                .values()
                .cloned()
                .map(|record| record.into_card(now))
                .collect())
        })
    }

    async fn unique_files(&self) -> Result<Vec<String>, StorageError> {
        self.with_cards(|cards| {
            let mut files: Vec<String> = cards.values().map(|r| r.file.clone()).collect();
            files.sort();
            files.dedup();
            Ok(files)
        })
    }

    async fn due_cards_for_files(
        &self,
        files: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<Card>, StorageError> {
        self.with_cards(|cards| {
            Ok(cards
                .values()
                .filter(|r| files.contains(&r.file) && r.remaining_days(now) <= 0)
                .cloned()
                .map(|record| record.into_card(now))
                .collect())
        })
    }

    async fn update_interval(&self, card: &Card, now: DateTime<Utc>) -> Result<(), StorageError> {
        self.with_cards(|cards| {
            let record = cards.get_mut(&card.id()).ok_or(StorageError::NotFound)?;
            record.revisit_in = card.revisit_in();
            record.scheduled_at = now;
            Ok(())
        })
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub cards: Arc<dyn CardRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let cards: Arc<dyn CardRepository> = Arc::new(InMemoryRepository::new());
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catv_core::model::CardDraft;
    use catv_core::time::fixed_now;
    use chrono::Duration;

    fn draft(file: &str, q: &str) -> ValidatedCard {
        CardDraft::new(file, q, "A").validate().unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_is_due() {
        let repo = InMemoryRepository::new();
        let a = repo.insert_card(&draft("a.md", "Q1"), fixed_now()).await.unwrap();
        let b = repo.insert_card(&draft("a.md", "Q2"), fixed_now()).await.unwrap();
        assert_eq!(a.id(), CardId::new(1));
        assert_eq!(b.id(), CardId::new(2));
        assert!(a.is_due());
    }

    #[tokio::test]
    async fn unique_files_are_sorted_and_distinct() {
        let repo = InMemoryRepository::new();
        for (file, q) in [("b.md", "1"), ("a.md", "2"), ("b.md", "3")] {
            repo.insert_card(&draft(file, q), fixed_now()).await.unwrap();
        }
        assert_eq!(repo.unique_files().await.unwrap(), vec!["a.md", "b.md"]);
    }

    #[tokio::test]
    async fn interval_counts_down_until_due_again() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();
        let card = repo.insert_card(&draft("a.md", "Q"), now).await.unwrap();
        repo.update_interval(&card.with_revisit_in(3), now).await.unwrap();

        let files = vec!["a.md".to_owned()];
        assert!(repo.due_cards_for_files(&files, now).await.unwrap().is_empty());
        let later = now + Duration::days(2);
        assert_eq!(repo.get_card(card.id(), later).await.unwrap().revisit_in(), 1);

        let due = repo
            .due_cards_for_files(&files, now + Duration::days(3))
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].revisit_in(), 0);
    }

    #[tokio::test]
    async fn due_cards_respect_file_filter() {
        let repo = InMemoryRepository::new();
        repo.insert_card(&draft("a.md", "Q1"), fixed_now()).await.unwrap();
        repo.insert_card(&draft("b.md", "Q2"), fixed_now()).await.unwrap();

        let due = repo
            .due_cards_for_files(&["b.md".to_owned()], fixed_now())
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].question(), "Q2");
        assert!(repo.due_cards_for_files(&[], fixed_now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_card_is_not_found() {
        let repo = InMemoryRepository::new();
        let ghost = draft("a.md", "Q").assign_id(CardId::new(99));
        let err = repo.update_interval(&ghost, fixed_now()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
