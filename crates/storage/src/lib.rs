#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{CardRecord, CardRepository, InMemoryRepository, Storage, StorageError};
