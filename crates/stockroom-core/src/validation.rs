//! # Validation Module
//!
//! Turns a loosely-typed JSON request body into a [`NewStockItem`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  raw body bytes                                                         │
//! │       │ parse_body                                                      │
//! │       ▼                                                                 │
//! │  serde_json::Value ── not JSON / not an object ──► MissingField        │
//! │       │ StockInput::from_json                                           │
//! │       ▼                                                                 │
//! │  StockInput { label, price, quantity } ── key absent ──► MissingField  │
//! │       │ StockInput::validate                                            │
//! │       ▼                                                                 │
//! │  1. coerce label (string)       ──► InvalidType                        │
//! │  2. coerce price (f64)          ──► InvalidType                        │
//! │  3. coerce quantity (i64)       ──► InvalidType                        │
//! │  4. label empty after trim      ──► EmptyValue                         │
//! │  5. price < 0                   ──► NegativeValue                      │
//! │  6. quantity < 0                ──► NegativeValue                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NewStockItem (ready for INSERT)                                        │
//! │                                                                         │
//! │  Layer 3: SQLite CHECK constraints repeat 4-6.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Rules
//! - `price`: JSON number, or a string holding a float (`"12.50"`). Must be finite.
//! - `quantity`: JSON integer, JSON float (truncated toward zero), or a string
//!   holding an integer (`"3"`, not `"3.5"`).
//! - label: JSON string only.
//! - A number too large for `f64` (`1e400`) is an `InvalidType` on its field.
//! - JSON booleans are not numbers here.
//!
//! No upper bounds, no rounding, no duplicate detection.

use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NewStockItem, ResourceKind};

const LABEL_REASON: &str = "must be a string";
const PRICE_REASON: &str = "must be a number";
const QUANTITY_REASON: &str = "must be an integer";

// =============================================================================
// Stock Input
// =============================================================================

/// A create request body with all three required keys present.
///
/// Values are still raw JSON; [`StockInput::validate`] coerces them.
#[derive(Debug, Clone, PartialEq)]
pub struct StockInput {
    pub kind: ResourceKind,
    pub label: Value,
    pub price: Value,
    pub quantity: Value,
}

impl StockInput {
    /// Extracts the required keys from a JSON body.
    ///
    /// ## Errors
    /// `MissingField` if the body is not an object or lacks any required key.
    /// A key that is present with a `null` value counts as present.
    pub fn from_json(kind: ResourceKind, body: &Value) -> ValidationResult<Self> {
        let missing = || ValidationError::MissingField { kind };

        let object = body.as_object().ok_or_else(missing)?;
        let field = |key: &str| object.get(key).cloned().ok_or_else(missing);

        Ok(StockInput {
            kind,
            label: field(kind.label_field())?,
            price: field("price")?,
            quantity: field("quantity")?,
        })
    }

    /// Coerces and range-checks the three fields.
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use stockroom_core::{validation::StockInput, ResourceKind, ValidationError};
    ///
    /// let body = json!({ "name": "Charger", "price": -1, "quantity": 2 });
    /// let err = StockInput::from_json(ResourceKind::Accessory, &body)
    ///     .and_then(StockInput::validate)
    ///     .unwrap_err();
    ///
    /// assert_eq!(err, ValidationError::NegativeValue { field: "price" });
    /// ```
    pub fn validate(self) -> ValidationResult<NewStockItem> {
        let field = self.kind.label_field();

        let label = coerce_label(field, &self.label)?;
        let price = coerce_price(&self.price)?;
        let quantity = coerce_quantity(&self.quantity)?;

        if label.is_empty() {
            return Err(ValidationError::EmptyValue { field });
        }

        if price < 0.0 {
            return Err(ValidationError::NegativeValue { field: "price" });
        }

        if quantity < 0 {
            return Err(ValidationError::NegativeValue { field: "quantity" });
        }

        Ok(NewStockItem {
            label,
            price,
            quantity,
        })
    }
}

/// Parses a raw request body and validates it for `kind`.
///
/// An empty or malformed body is reported as `MissingField`, same as a body
/// without the required keys. A well-formed object whose number does not fit
/// an `f64` (`"price": 1e400`) is an `InvalidType` on that field.
pub fn parse_body(kind: ResourceKind, body: &[u8]) -> ValidationResult<NewStockItem> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => StockInput::from_json(kind, &value)?.validate(),
        Err(_) => Err(unparseable_body(kind, body)),
    }
}

/// Explains why a body could not be loaded as a [`Value`].
///
/// Raw values skip number range checks, so an object with an overflowing
/// number still splits into keys here and each required field can be
/// re-parsed on its own, in check order.
fn unparseable_body(kind: ResourceKind, body: &[u8]) -> ValidationError {
    let missing = ValidationError::MissingField { kind };

    let Ok(object) = serde_json::from_slice::<HashMap<String, &RawValue>>(body) else {
        return missing;
    };

    let mut raw_fields = Vec::with_capacity(3);
    for field in kind.required_fields() {
        match object.get(field) {
            Some(raw) => raw_fields.push((field, *raw)),
            None => return missing,
        }
    }

    raw_fields
        .into_iter()
        .find(|(_, raw)| serde_json::from_str::<Value>(raw.get()).is_err())
        .map_or(missing, |(field, _)| match field {
            "price" => ValidationError::invalid_type("price", PRICE_REASON),
            "quantity" => ValidationError::invalid_type("quantity", QUANTITY_REASON),
            label => ValidationError::invalid_type(label, LABEL_REASON),
        })
}

// =============================================================================
// Coercion
// =============================================================================

/// Trims a string label. Emptiness is checked by the caller.
pub fn coerce_label(field: &'static str, value: &Value) -> ValidationResult<String> {
    value
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ValidationError::invalid_type(field, LABEL_REASON))
}

/// Coerces a price to a finite `f64`.
///
/// JSON booleans are rejected rather than read as `1` / `0`.
pub fn coerce_price(value: &Value) -> ValidationResult<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::invalid_type("price", PRICE_REASON))
}

/// Coerces a quantity to an `i64`.
///
/// JSON booleans are rejected rather than read as `1` / `0`.
pub fn coerce_quantity(value: &Value) -> ValidationResult<i64> {
    let quantity = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    quantity.ok_or_else(|| ValidationError::invalid_type("quantity", QUANTITY_REASON))
}

fn truncate_to_i64(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phone(body: Value) -> ValidationResult<NewStockItem> {
        StockInput::from_json(ResourceKind::Phone, &body)?.validate()
    }

    #[test]
    fn test_valid_phone_is_normalized() {
        let item = phone(json!({ "model": "  iPhone 15  ", "price": 120000.5, "quantity": 2 }))
            .unwrap();

        assert_eq!(item.label, "iPhone 15");
        assert_eq!(item.price, 120000.5);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_zero_price_and_quantity_allowed() {
        let item = phone(json!({ "model": "Demo unit", "price": 0, "quantity": 0 })).unwrap();
        assert_eq!(item.price, 0.0);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_missing_key() {
        let err = phone(json!({ "model": "Nokia 3310", "price": 10 })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                kind: ResourceKind::Phone
            }
        );

        // Accessories look for `name`, not `model`.
        let err = StockInput::from_json(
            ResourceKind::Accessory,
            &json!({ "model": "Case", "price": 1, "quantity": 1 }),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_non_object_body_is_missing_field() {
        assert!(matches!(
            phone(json!(["model", "price", "quantity"])),
            Err(ValidationError::MissingField { .. })
        ));
        assert!(matches!(
            phone(json!({})),
            Err(ValidationError::MissingField { .. })
        ));
        assert!(matches!(
            parse_body(ResourceKind::Phone, b""),
            Err(ValidationError::MissingField { .. })
        ));
        assert!(matches!(
            parse_body(ResourceKind::Phone, b"{not json"),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = phone(json!({ "model": "   ", "price": 1, "quantity": 1 })).unwrap_err();
        assert_eq!(err, ValidationError::EmptyValue { field: "model" });
    }

    #[test]
    fn test_non_string_label_rejected() {
        let err = phone(json!({ "model": 42, "price": 1, "quantity": 1 })).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { field: "model", .. }));

        let err = phone(json!({ "model": null, "price": 1, "quantity": 1 })).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { field: "model", .. }));
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = phone(json!({ "model": "X", "price": -0.01, "quantity": 1 })).unwrap_err();
        assert_eq!(err, ValidationError::NegativeValue { field: "price" });

        let err = phone(json!({ "model": "X", "price": 1, "quantity": -3 })).unwrap_err();
        assert_eq!(err, ValidationError::NegativeValue { field: "quantity" });
    }

    #[test]
    fn test_type_errors_win_over_empty_label() {
        // Coercion happens before the emptiness check.
        let err = phone(json!({ "model": "", "price": "abc", "quantity": 1 })).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { field: "price", .. }));
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price(&json!(12)).unwrap(), 12.0);
        assert_eq!(coerce_price(&json!(" 12.75 ")).unwrap(), 12.75);
        assert_eq!(coerce_price(&json!("-4")).unwrap(), -4.0);

        assert!(coerce_price(&json!("twelve")).is_err());
        assert!(coerce_price(&json!("inf")).is_err());
        assert!(coerce_price(&json!("NaN")).is_err());
        assert!(coerce_price(&json!(true)).is_err());
        assert!(coerce_price(&json!(null)).is_err());
        assert!(coerce_price(&json!([1])).is_err());
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity(&json!(5)).unwrap(), 5);
        assert_eq!(coerce_quantity(&json!("7")).unwrap(), 7);
        assert_eq!(coerce_quantity(&json!(" +7 ")).unwrap(), 7);
        assert_eq!(coerce_quantity(&json!(2.9)).unwrap(), 2);
        assert_eq!(coerce_quantity(&json!(-0.5)).unwrap(), 0);

        assert!(coerce_quantity(&json!("2.5")).is_err());
        assert!(coerce_quantity(&json!("")).is_err());
        assert!(coerce_quantity(&json!(1e300)).is_err());
        assert!(coerce_quantity(&json!(false)).is_err());
        assert!(coerce_quantity(&json!({})).is_err());
    }

    #[test]
    fn test_overflowing_number_is_invalid_type() {
        let err = parse_body(
            ResourceKind::Phone,
            br#"{"model":"X","price":1e400,"quantity":1}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid data type: price must be a number");

        let err = parse_body(
            ResourceKind::Accessory,
            br#"{"name":"Y","price":1,"quantity":-1e400}"#,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::invalid_type("quantity", "must be an integer"));

        // Both overflow: price is checked first.
        let err = parse_body(
            ResourceKind::Phone,
            br#"{"model":"X","price":1e400,"quantity":1e400}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { field: "price", .. }));

        // A missing key still wins over an overflowing one.
        let err = parse_body(ResourceKind::Phone, br#"{"model":"X","price":1e400}"#).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_parse_body_accessory() {
        let item = parse_body(
            ResourceKind::Accessory,
            br#"{"name":"Screen protector","price":"250","quantity":"12"}"#,
        )
        .unwrap();

        assert_eq!(item.label, "Screen protector");
        assert_eq!(item.price, 250.0);
        assert_eq!(item.quantity, 12);
    }
}
