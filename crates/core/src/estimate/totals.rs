//! Estimate totals engine.
//!
//! Order of operations matters for cent-accurate reproduction: every stage
//! rounds to cents before feeding the next. Accumulating unrounded
//! intermediates diverges by fractions of a cent on multi-item estimates,
//! which the property tests pin down.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimate::types::LineItem;
use crate::tax::{GST_RATE, QST_RATE};
use boreal_shared::types::round2;

/// Computed totals for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateTotals {
    /// `round2(Σ qty * unit_price * (1 - item_disc/100))`
    pub subtotal: Decimal,
    /// `round2(subtotal * global_disc/100)`
    pub discount_amount: Decimal,
    /// `round2(subtotal - discount_amount)`
    pub after_discount: Decimal,
    /// `round2(after_discount * GST_RATE)`
    pub gst: Decimal,
    /// `round2(after_discount * QST_RATE)`
    pub qst: Decimal,
    /// `round2(after_discount + gst + qst)`
    pub total: Decimal,
}

impl EstimateTotals {
    /// Computes all stages for the given items and global discount.
    ///
    /// The global discount applies to the rounded per-item sum; it is not
    /// combined multiplicatively with per-item discounts.
    #[must_use]
    pub fn compute(items: &[LineItem], global_discount_percent: Decimal) -> Self {
        let subtotal = round2(items.iter().map(LineItem::amount).sum());
        let discount_amount = round2(subtotal * global_discount_percent / Decimal::ONE_HUNDRED);
        let after_discount = round2(subtotal - discount_amount);
        let gst = round2(after_discount * GST_RATE);
        let qst = round2(after_discount * QST_RATE);
        let total = round2(after_discount + gst + qst);
        Self {
            subtotal,
            discount_amount,
            after_discount,
            gst,
            qst,
            total,
        }
    }
}
