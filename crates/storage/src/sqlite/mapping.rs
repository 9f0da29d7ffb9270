use catv_core::model::CardId;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{CardRecord, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn card_id_from_i64(v: i64) -> Result<CardId, StorageError> {
    u64::try_from(v)
        .map(CardId::new)
        .map_err(|_| StorageError::Serialization("card_id sign overflow".into()))
}

pub(crate) fn card_id_to_i64(id: CardId) -> Result<i64, StorageError> {
    i64::try_from(id.value()).map_err(|_| StorageError::Serialization("card_id overflow".into()))
}

pub(crate) fn map_card_row(row: &sqlx::sqlite::SqliteRow) -> Result<CardRecord, StorageError> {
    let scheduled_at: DateTime<Utc> = row.try_get("scheduled_at").map_err(ser)?;
    Ok(CardRecord {
        id: card_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        file: row.try_get("file").map_err(ser)?,
        question: row.try_get("question").map_err(ser)?,
        answer: row.try_get("answer").map_err(ser)?,
        revisit_in: row.try_get("revisit_in").map_err(ser)?,
        scheduled_at,
    })
}
