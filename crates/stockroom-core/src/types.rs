//! # Domain Types
//!
//! Record types for the two tracked resources.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Phone       │   │   Accessory     │   │  NewStockItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  label          │       │
//! │  │  model          │   │  name           │   │  price          │       │
//! │  │  price          │   │  price          │   │  quantity       │       │
//! │  │  quantity       │   │  quantity       │   │  (validated,    │       │
//! │  │  created_at     │   │  created_at     │   │   not stored)   │       │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘       │
//! │           │                     │                                       │
//! │           └──── StockRecord ────┘  (one generic code path for both)    │
//! │                                                                         │
//! │  ResourceKind { Phone, Accessory } → table, text field, display name   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are immutable once created. There is no update path; a record is
//! only ever inserted, listed or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Resource Kind
// =============================================================================

/// One of the two independent inventory collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Phone,
    Accessory,
}

impl ResourceKind {
    /// Every resource kind, in summary order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Phone, ResourceKind::Accessory];

    /// SQL table holding this resource.
    pub const fn table(&self) -> &'static str {
        match self {
            ResourceKind::Phone => "phones",
            ResourceKind::Accessory => "accessories",
        }
    }

    /// Name of the required text field (`model` for phones, `name` for accessories).
    pub const fn label_field(&self) -> &'static str {
        match self {
            ResourceKind::Phone => "model",
            ResourceKind::Accessory => "name",
        }
    }

    /// Human-readable singular name, used in response messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Phone => "Phone",
            ResourceKind::Accessory => "Accessory",
        }
    }

    /// Keys a create request body must carry.
    pub const fn required_fields(&self) -> [&'static str; 3] {
        [self.label_field(), "price", "quantity"]
    }
}

// =============================================================================
// New Stock Item
// =============================================================================

/// A validated, normalized create request, ready for persistence.
///
/// Produced only by [`crate::validation::StockInput::validate`], so holding one
/// means the label is trimmed and non-empty and both numbers are non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStockItem {
    /// Trimmed model (phones) or name (accessories).
    pub label: String,
    /// Unit price, no rounding applied.
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
}

// =============================================================================
// Stock Record Trait
// =============================================================================

/// Shared behavior of persisted resource records.
///
/// Lets the repository and HTTP handlers be written once and instantiated
/// for [`Phone`] and [`Accessory`].
pub trait StockRecord: Serialize + Clone + Send + Sync + Unpin + 'static {
    /// Which collection this record lives in.
    const KIND: ResourceKind;

    /// Builds the record returned after a successful insert.
    fn from_new(id: i64, item: NewStockItem, created_at: DateTime<Utc>) -> Self;

    /// Server-assigned identity.
    fn id(&self) -> i64;

    /// The model or name.
    fn label(&self) -> &str;
}

// =============================================================================
// Phone
// =============================================================================

/// A phone stock record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Phone {
    /// Auto-assigned identity.
    pub id: i64,

    /// Phone model, trimmed.
    pub model: String,

    /// Unit price in [`crate::CURRENCY_CODE`].
    pub price: f64,

    /// Units in stock.
    pub quantity: i64,

    /// When the record was inserted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl StockRecord for Phone {
    const KIND: ResourceKind = ResourceKind::Phone;

    fn from_new(id: i64, item: NewStockItem, created_at: DateTime<Utc>) -> Self {
        Phone {
            id,
            model: item.label,
            price: item.price,
            quantity: item.quantity,
            created_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// Accessory
// =============================================================================

/// An accessory stock record (cases, chargers, cables, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Accessory {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl StockRecord for Accessory {
    const KIND: ResourceKind = ResourceKind::Accessory;

    fn from_new(id: i64, item: NewStockItem, created_at: DateTime<Utc>) -> Self {
        Accessory {
            id,
            name: item.label,
            price: item.price,
            quantity: item.quantity,
            created_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_metadata() {
        assert_eq!(ResourceKind::Phone.table(), "phones");
        assert_eq!(ResourceKind::Accessory.table(), "accessories");
        assert_eq!(
            ResourceKind::Accessory.required_fields(),
            ["name", "price", "quantity"]
        );
    }

    #[test]
    fn test_phone_serializes_model_field() {
        let created_at = Utc::now();
        let phone = Phone::from_new(
            7,
            NewStockItem {
                label: "Galaxy A15".to_string(),
                price: 18500.0,
                quantity: 4,
            },
            created_at,
        );

        let json = serde_json::to_value(&phone).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["model"], "Galaxy A15");
        assert_eq!(json["price"], 18500.0);
        assert_eq!(json["quantity"], 4);
        assert!(json["created_at"].is_string());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_accessory_label() {
        let accessory = Accessory::from_new(
            1,
            NewStockItem {
                label: "USB-C Cable".to_string(),
                price: 350.0,
                quantity: 40,
            },
            Utc::now(),
        );
        assert_eq!(accessory.label(), "USB-C Cable");
        assert_eq!(accessory.id(), 1);
        assert_eq!(Accessory::KIND, ResourceKind::Accessory);
    }
}
