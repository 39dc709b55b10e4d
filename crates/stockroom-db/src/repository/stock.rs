//! # Stock Repository
//!
//! Create, list and delete for phones and accessories, written once.
//!
//! ## One Repository, Two Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StockRepository<Phone>          StockRepository<Accessory>             │
//! │         │                                 │                             │
//! │         ▼                                 ▼                             │
//! │  Phone::KIND = Phone             Accessory::KIND = Accessory            │
//! │    table  = "phones"               table  = "accessories"               │
//! │    label  = "model"                label  = "name"                      │
//! │         │                                 │                             │
//! │         └──────────► same SQL templates ◄─┘                             │
//! │                                                                         │
//! │  Table and column names come only from ResourceKind constants; every   │
//! │  user-supplied value is a bound parameter.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::marker::PhantomData;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{NewStockItem, StockRecord};

/// A [`StockRecord`] that can also be decoded from a SQLite row.
///
/// Implemented automatically for every record type with a `FromRow` derive,
/// so callers outside this crate don't need to name sqlx types.
pub trait StoredRecord: StockRecord + for<'r> FromRow<'r, SqliteRow> {}

impl<R> StoredRecord for R where R: StockRecord + for<'r> FromRow<'r, SqliteRow> {}

/// Repository for one resource type.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.stock::<Phone>();
///
/// let phone = repo.insert(item).await?;
/// let newest_first = repo.list().await?;
/// repo.delete(phone.id).await?;
/// ```
#[derive(Debug)]
pub struct StockRepository<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for StockRepository<R> {
    fn clone(&self) -> Self {
        StockRepository::new(self.pool.clone())
    }
}

impl<R> StockRepository<R> {
    /// Creates a new StockRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R: StoredRecord> StockRepository<R> {
    /// Inserts a validated item.
    ///
    /// The identity comes from SQLite's AUTOINCREMENT and `created_at` from
    /// the server clock; neither is client-controlled.
    ///
    /// ## Returns
    /// The full record as stored.
    pub async fn insert(&self, item: NewStockItem) -> DbResult<R> {
        let kind = R::KIND;
        let created_at = Utc::now();

        debug!(table = kind.table(), label = %item.label, "Inserting stock record");

        let sql = format!(
            "INSERT INTO {table} ({label}, price, quantity, created_at) VALUES (?1, ?2, ?3, ?4)",
            table = kind.table(),
            label = kind.label_field(),
        );

        let result = sqlx::query(&sql)
            .bind(&item.label)
            .bind(item.price)
            .bind(item.quantity)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        let record = R::from_new(result.last_insert_rowid(), item, created_at);

        debug!(table = kind.table(), id = record.id(), "Stock record inserted");
        Ok(record)
    }

    /// Lists every record, most recently created first.
    ///
    /// Records created within the same clock tick keep insertion order
    /// (higher id first). An empty table yields an empty vec.
    pub async fn list(&self) -> DbResult<Vec<R>> {
        let kind = R::KIND;

        let sql = format!(
            "SELECT id, {label}, price, quantity, created_at FROM {table} ORDER BY created_at DESC, id DESC",
            table = kind.table(),
            label = kind.label_field(),
        );

        let records = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;

        debug!(table = kind.table(), count = records.len(), "Listed stock records");
        Ok(records)
    }

    /// Deletes a record by identity.
    ///
    /// ## Returns
    /// * `Ok(true)` - A row was removed
    /// * `Ok(false)` - No row had this id (not an error)
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        let kind = R::KIND;

        debug!(table = kind.table(), id, "Deleting stock record");

        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts records (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::KIND.table());

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::{Accessory, Phone};

    fn item(label: &str, price: f64, quantity: i64) -> NewStockItem {
        NewStockItem {
            label: label.to_string(),
            price,
            quantity,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_list_returns_record() {
        let db = test_db().await;
        let repo = db.stock::<Phone>();

        let created = repo.insert(item("Redmi Note 13", 24999.99, 5)).await.unwrap();
        let phones = repo.list().await.unwrap();

        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].id, created.id);
        assert_eq!(phones[0].model, "Redmi Note 13");
        assert_eq!(phones[0].price, 24999.99);
        assert_eq!(phones[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let db = test_db().await;
        assert!(db.stock::<Accessory>().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let db = test_db().await;
        let repo = db.stock::<Accessory>();

        let first = repo.insert(item("Case", 500.0, 1)).await.unwrap();
        let second = repo.insert(item("Charger", 800.0, 1)).await.unwrap();
        let third = repo.insert(item("Earbuds", 2500.0, 1)).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let db = test_db().await;
        let repo = db.stock::<Phone>();

        let a = repo.insert(item("A", 1.0, 1)).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.insert(item("B", 1.0, 1)).await.unwrap();

        // AUTOINCREMENT never reuses the deleted id.
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = test_db().await;
        let repo = db.stock::<Phone>();

        let phone = repo.insert(item("Pixel 8", 70000.0, 2)).await.unwrap();

        assert!(repo.delete(phone.id).await.unwrap());
        assert!(!repo.delete(phone.id).await.unwrap());
        assert!(!repo.delete(9999).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let db = test_db().await;

        let phone = db.stock::<Phone>().insert(item("Phone", 1.0, 1)).await.unwrap();
        db.stock::<Accessory>().insert(item("Cable", 1.0, 1)).await.unwrap();

        // Deleting accessory id == phone id leaves the phone alone.
        db.stock::<Accessory>().delete(phone.id).await.unwrap();
        assert_eq!(db.stock::<Phone>().count().await.unwrap(), 1);
        assert_eq!(db.stock::<Accessory>().count().await.unwrap(), 0);
    }
}
