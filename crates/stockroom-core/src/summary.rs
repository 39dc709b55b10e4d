//! # Inventory Summary
//!
//! Aggregate stock value: `Σ price × quantity` per resource type plus the
//! grand total, each rounded to two decimals.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{round_to_cents, Money};
use crate::CURRENCY_CODE;

/// Stock value totals returned by `GET /summary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySummary {
    pub phones_total: f64,
    pub accessories_total: f64,
    pub grand_total: f64,
}

impl InventorySummary {
    /// Builds the summary from the unrounded per-table sums.
    ///
    /// The grand total is rounded from the unrounded sum, so it can differ by
    /// a cent from adding the two rounded subtotals.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::InventorySummary;
    ///
    /// let summary = InventorySummary::from_raw_totals(25.0, 0.0);
    /// assert_eq!(summary.phones_total, 25.0);
    /// assert_eq!(summary.accessories_total, 0.0);
    /// assert_eq!(summary.grand_total, 25.0);
    /// ```
    pub fn from_raw_totals(phones: f64, accessories: f64) -> Self {
        InventorySummary {
            phones_total: round_to_cents(phones),
            accessories_total: round_to_cents(accessories),
            grand_total: round_to_cents(phones + accessories),
        }
    }

    /// Grand total formatted for logs, e.g. `KES 1250.50`.
    pub fn grand_total_display(&self) -> String {
        match Money::try_from_major(self.grand_total) {
            Some(money) => money.to_string(),
            None => format!("{} {:.2}", CURRENCY_CODE, self.grand_total),
        }
    }
}
