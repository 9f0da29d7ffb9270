//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SelectionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelectionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `WriteBackService` before any card is touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteBackError {
    #[error("results cover {results} cards but the deck has {deck}")]
    LengthMismatch { deck: usize, results: usize },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
