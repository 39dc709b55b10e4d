//! # Summary Repository
//!
//! Stock value totals straight from storage.
//!
//! ```text
//! BEGIN
//!   SELECT Σ price × quantity FROM phones       ──► phones (f64, unrounded)
//!   SELECT Σ price × quantity FROM accessories  ──► accessories
//! COMMIT
//!        │
//!        ▼
//! InventorySummary::from_raw_totals(phones, accessories)  (2-decimal rounding)
//! ```
//!
//! Both sums run in one read transaction so they describe the same snapshot.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{InventorySummary, ResourceKind};

/// Repository for the aggregate stock summary.
#[derive(Debug, Clone)]
pub struct SummaryRepository {
    pool: SqlitePool,
}

impl SummaryRepository {
    /// Creates a new SummaryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SummaryRepository { pool }
    }

    /// Computes per-type and grand stock value.
    ///
    /// Empty tables contribute zero.
    pub async fn compute(&self) -> DbResult<InventorySummary> {
        let mut tx = self.pool.begin().await?;

        let phones = stock_value(&mut *tx, ResourceKind::Phone).await?;
        let accessories = stock_value(&mut *tx, ResourceKind::Accessory).await?;

        tx.commit().await?;

        debug!(phones, accessories, "Computed raw stock values");
        Ok(InventorySummary::from_raw_totals(phones, accessories))
    }
}

/// Unrounded `Σ price × quantity` for one table; 0.0 when empty.
async fn stock_value(conn: &mut SqliteConnection, kind: ResourceKind) -> DbResult<f64> {
    let sql = format!(
        "SELECT CAST(COALESCE(SUM(price * quantity), 0) AS REAL) FROM {}",
        kind.table()
    );

    let total: f64 = sqlx::query_scalar(&sql).fetch_one(conn).await?;

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use stockroom_core::{Accessory, NewStockItem, Phone};

    fn item(label: &str, price: f64, quantity: i64) -> NewStockItem {
        NewStockItem {
            label: label.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_empty_summary_is_zero() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = db.summary().compute().await.unwrap();

        assert_eq!(summary.phones_total, 0.0);
        assert_eq!(summary.accessories_total, 0.0);
        assert_eq!(summary.grand_total, 0.0);
    }

    #[tokio::test]
    async fn test_phones_only_summary() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let phones = db.stock::<Phone>();
        phones.insert(item("A", 10.0, 2)).await.unwrap();
        phones.insert(item("B", 5.0, 1)).await.unwrap();

        let summary = db.summary().compute().await.unwrap();

        assert_eq!(summary.phones_total, 25.0);
        assert_eq!(summary.accessories_total, 0.0);
        assert_eq!(summary.grand_total, 25.0);
    }

    #[tokio::test]
    async fn test_summary_rounds_to_cents() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.stock::<Phone>().insert(item("A", 0.333, 3)).await.unwrap();
        db.stock::<Accessory>().insert(item("B", 1.1, 3)).await.unwrap();
        db.stock::<Accessory>().insert(item("C", 99.0, 0)).await.unwrap();

        let summary = db.summary().compute().await.unwrap();

        assert_eq!(summary.phones_total, 1.0);
        assert_eq!(summary.accessories_total, 3.3);
        assert_eq!(summary.grand_total, 4.3);
    }
}
