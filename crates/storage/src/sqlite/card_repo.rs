use catv_core::model::{Card, CardId, ValidatedCard};
use chrono::{DateTime, Utc};

use super::SqliteRepository;
use super::mapping::{card_id_from_i64, card_id_to_i64, conn, map_card_row};
use crate::repository::{CardRecord, CardRepository, StorageError};

const CARD_COLUMNS: &str = "id, file, question, answer, revisit_in, scheduled_at";

fn into_cards(
    rows: Vec<sqlx::sqlite::SqliteRow>,
    now: DateTime<Utc>,
) -> Result<Vec<Card>, StorageError> {
    rows.iter()
        .map(|row| map_card_row(row).map(|record| record.into_card(now)))
        .collect()
}

#[async_trait::async_trait]
impl CardRepository for SqliteRepository {
    async fn insert_card(
        &self,
        card: &ValidatedCard,
        now: DateTime<Utc>,
    ) -> Result<Card, StorageError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO cards (file, question, answer, revisit_in, scheduled_at)
            VALUES (?1, ?2, ?3, 0, ?4)
            RETURNING id
            ",
        )
        .bind(card.file())
        .bind(card.question())
        .bind(card.answer())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(conn)?;

        Ok(card.clone().assign_id(card_id_from_i64(id)?))
    }

    async fn get_card(&self, id: CardId, now: DateTime<Utc>) -> Result<Card, StorageError> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(card_id_to_i64(id)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?
            .ok_or(StorageError::NotFound)?;
        Ok(map_card_row(&row)?.into_card(now))
    }

    async fn list_cards(&self, now: DateTime<Utc>) -> Result<Vec<Card>, StorageError> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards ORDER BY id ASC");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;
        into_cards(rows, now)
    }

    async fn unique_files(&self) -> Result<Vec<String>, StorageError> {
        sqlx::query_scalar("SELECT DISTINCT file FROM cards ORDER BY file ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(conn)
    }

    async fn due_cards_for_files(
        &self,
        files: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<Card>, StorageError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE file IN (");
        for i in 0..files.len() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push('?');
            sql.push_str(&(i + 1).to_string());
        }
        sql.push_str(") ORDER BY id ASC");

        let mut q = sqlx::query(&sql);
        for file in files {
            q = q.bind(file.as_str());
        }
        let rows = q.fetch_all(&self.pool).await.map_err(conn)?;

        // Remaining days depend on `now`, so the due filter runs on mapped records.
        let mut due = Vec::new();
        for row in &rows {
            let record: CardRecord = map_card_row(row)?;
            if record.remaining_days(now) <= 0 {
                due.push(record.into_card(now));
            }
        }
        Ok(due)
    }

    async fn update_interval(&self, card: &Card, now: DateTime<Utc>) -> Result<(), StorageError> {
        let result = sqlx::query(
            r"
            UPDATE cards
            SET revisit_in = ?1, scheduled_at = ?2
            WHERE id = ?3
            ",
        )
        .bind(card.revisit_in())
        .bind(now)
        .bind(card_id_to_i64(card.id())?)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
