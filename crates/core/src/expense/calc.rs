//! GST/QST breakdown for expenses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{GST_RATE, QST_RATE};
use boreal_shared::types::round2;

/// Tax breakdown for a single expense.
///
/// Derived from the subtotal when the subtotal changes; when an individual
/// tax field is edited instead, only the total is recomputed from the four
/// current values (the GST/QST are NOT re-derived).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    /// Pre-tax amount.
    pub subtotal: Decimal,
    /// Federal GST, `round2(subtotal * GST_RATE)`.
    pub gst: Decimal,
    /// Quebec QST, `round2(subtotal * QST_RATE)`.
    pub qst: Decimal,
    /// Manually entered additional tax.
    pub other: Decimal,
    /// `round2(subtotal + gst + qst + other)`.
    pub total: Decimal,
}

impl TaxBreakdown {
    /// Derives the full breakdown from a subtotal, holding `other` constant.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, other: Decimal) -> Self {
        let gst = round2(subtotal * GST_RATE);
        let qst = round2(subtotal * QST_RATE);
        let total = round2(subtotal + gst + qst + other);
        Self {
            subtotal,
            gst,
            qst,
            other,
            total,
        }
    }

    /// Recomputes only the total after a manual edit of a tax field.
    #[must_use]
    pub fn with_taxes(subtotal: Decimal, gst: Decimal, qst: Decimal, other: Decimal) -> Self {
        Self {
            subtotal,
            gst,
            qst,
            other,
            total: round2(subtotal + gst + qst + other),
        }
    }
}
