//! # Error Types
//!
//! Validation errors for inbound stock records.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── ValidationError  - Request body failed a field constraint         │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  stockroom-api errors (in app)                                         │
//! │  └── ApiError         - Status code + {"error": ...} body              │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError (400)                               │
//! │        DbError         ──► ApiError (500, detail only in logs)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is a client error. Validation runs before any write, so none
//! of them can leave partial state behind.

use thiserror::Error;

use crate::types::ResourceKind;

/// Input validation errors.
///
/// The `Display` output is the exact message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is absent, unparseable, not an object, or lacks a required key.
    #[error("Missing required fields: {}", .kind.required_fields().join(", "))]
    MissingField { kind: ResourceKind },

    /// Text field is empty once surrounding whitespace is trimmed.
    #[error("{} cannot be empty", capitalize(.field))]
    EmptyValue { field: &'static str },

    /// Field is present but cannot be coerced to the expected type.
    #[error("Invalid data type: {field} {reason}")]
    InvalidType {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric field coerced fine but is below zero.
    #[error("{} cannot be negative", capitalize(.field))]
    NegativeValue { field: &'static str },
}

impl ValidationError {
    /// Creates an InvalidType error for a field.
    pub fn invalid_type(field: &'static str, reason: &'static str) -> Self {
        ValidationError::InvalidType { field, reason }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
