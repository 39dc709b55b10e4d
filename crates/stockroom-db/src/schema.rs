//! # Storage Schema
//!
//! Creates the `phones` and `accessories` tables at startup.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  phones                          accessories                            │
//! │  ─────────────────────────────   ─────────────────────────────          │
//! │  id          INTEGER PK AUTOINC  id          INTEGER PK AUTOINC         │
//! │  model       TEXT  NOT NULL      name        TEXT  NOT NULL             │
//! │  price       REAL  >= 0          price       REAL  >= 0                 │
//! │  quantity    INTEGER >= 0        quantity    INTEGER >= 0               │
//! │  created_at  TEXT (RFC 3339)     created_at  TEXT (RFC 3339)            │
//! │                                                                         │
//! │  No relationship between the two tables.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement uses `IF NOT EXISTS`, so bootstrapping an existing
//! database is a no-op. There is no versioned migration history: the schema
//! has a single shape.

use sqlx::SqlitePool;
use stockroom_core::ResourceKind;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// `CREATE TABLE` statement for one resource.
///
/// AUTOINCREMENT keeps identities monotonic even after the newest row is
/// deleted. The CHECK constraints mirror the validation layer.
pub fn create_table_sql(kind: ResourceKind) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            {label} TEXT NOT NULL CHECK (length(trim({label})) > 0),
            price REAL NOT NULL CHECK (price >= 0),
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        table = kind.table(),
        label = kind.label_field(),
    )
}

/// Index backing the newest-first listing.
pub fn create_index_sql(kind: ResourceKind) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS idx_{table}_created_at ON {table} (created_at DESC, id DESC)",
        table = kind.table(),
    )
}

/// Creates any missing tables and indexes.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Transactional: either every object exists afterwards or none was added
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring inventory schema");

    let mut tx = pool.begin().await?;

    for kind in ResourceKind::ALL {
        debug!(table = kind.table(), "Creating table if missing");

        sqlx::query(&create_table_sql(kind))
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

        sqlx::query(&create_index_sql(kind))
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    tx.commit().await?;

    info!("Inventory schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[test]
    fn test_create_table_sql_uses_resource_columns() {
        let sql = create_table_sql(ResourceKind::Accessory);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS accessories"));
        assert!(sql.contains("name TEXT NOT NULL"));
        assert!(!sql.contains("model"));
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Already ran once in Database::new.
        ensure_schema(db.pool()).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('phones', 'accessories') ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        assert_eq!(tables, vec!["accessories", "phones"]);
    }

    #[tokio::test]
    async fn test_check_constraints_reject_bad_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO phones (model, price, quantity, created_at) VALUES ('X', -1, 1, '2026-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await;

        let err = DbError::from(result.unwrap_err());
        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }
}
