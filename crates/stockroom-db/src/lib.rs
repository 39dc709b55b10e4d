//! # stockroom-db: Database Layer for Stockroom
//!
//! SQLite storage for phone and accessory stock, via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (POST /phones)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repositories   │   │   Schema    │  │   │
//! │  │   │   (pool.rs)   │    │                  │   │ (schema.rs) │  │   │
//! │  │   │               │    │ StockRepository  │   │             │  │   │
//! │  │   │ SqlitePool    │◄───│   <Phone>        │   │ phones      │  │   │
//! │  │   │ Connection    │    │   <Accessory>    │   │ accessories │  │   │
//! │  │   │ Management    │    │ SummaryRepository│   │             │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                SQLite Database (inventory.db)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Stock and summary repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::Phone;
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("inventory.db")).await?;
//!
//! let phones = db.stock::<Phone>().list().await?;
//! let summary = db.summary().compute().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::stock::{StockRepository, StoredRecord};
pub use repository::summary::SummaryRepository;
