use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::Clock;
use crate::error::AppServicesError;
use crate::selection_service::SelectionService;
use crate::write_back_service::WriteBackService;

/// Assembles app-facing services over one injected store.
#[derive(Clone)]
pub struct AppServices {
    selection: Arc<SelectionService>,
    write_back: Arc<WriteBackService>,
}

impl AppServices {
    /// Build services over an existing storage aggregate.
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        Self {
            selection: Arc::new(SelectionService::new(clock, Arc::clone(&storage.cards))),
            write_back: Arc::new(WriteBackService::new(clock, Arc::clone(&storage.cards))),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        info!(db_url, "opened flashcard store");
        Ok(Self::new(&storage, clock))
    }

    /// Build services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn selection(&self) -> Arc<SelectionService> {
        Arc::clone(&self.selection)
    }

    #[must_use]
    pub fn write_back(&self) -> Arc<WriteBackService> {
        Arc::clone(&self.write_back)
    }
}
