//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! Record types, request validation and the stock-value summary math for the
//! phone and accessory inventory. Zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-api (axum handlers)                   │   │
//! │  │     POST /phones, GET /accessories, GET /summary, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │   money   │  │  summary  │  │   │
//! │  │   │  Phone    │  │ StockInput│  │   Money   │  │ Inventory │  │   │
//! │  │   │ Accessory │  │ coercion  │  │ rounding  │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-db (Database Layer)                    │   │
//! │  │             SQLite schema, stock + summary repositories         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Resource kinds and record types (Phone, Accessory)
//! - [`validation`] - Request body presence checks and coercion
//! - [`money`] - Integer minor-unit money used for summary rounding
//! - [`summary`] - Aggregate stock value per resource type
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use stockroom_core::{validation::StockInput, ResourceKind};
//!
//! let body = json!({ "model": "  Pixel 8 ", "price": "499.99", "quantity": 3 });
//! let item = StockInput::from_json(ResourceKind::Phone, &body)
//!     .and_then(StockInput::validate)
//!     .unwrap();
//!
//! assert_eq!(item.label, "Pixel 8");
//! assert_eq!(item.quantity, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use summary::InventorySummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency every price and total is denominated in.
///
/// There is no conversion: the summary is a plain sum in this currency.
pub const CURRENCY_CODE: &str = "KES";
