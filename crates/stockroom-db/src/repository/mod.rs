//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.stock::<Phone>().list()                                    │
//! │       ▼                                                                 │
//! │  StockRepository<R: StockRecord>                                       │
//! │  ├── insert(&self, item)      R::KIND picks table + text column        │
//! │  ├── list(&self)                                                       │
//! │  ├── delete(&self, id)                                                 │
//! │  └── count(&self)                                                      │
//! │                                                                         │
//! │  SummaryRepository                                                     │
//! │  └── compute(&self)           Σ price × quantity over both tables      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`StockRepository`](stock::StockRepository) - Create / list / delete for one resource type
//! - [`SummaryRepository`](summary::SummaryRepository) - Stock value totals

pub mod stock;
pub mod summary;
