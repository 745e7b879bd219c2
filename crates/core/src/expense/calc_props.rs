//! Property-based tests for the expense tax breakdown.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::expense::calc::TaxBreakdown;
use crate::tax::{GST_RATE, QST_RATE};
use boreal_shared::types::round2;

/// Non-negative amounts with cent precision, up to $100,000.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// GST and QST are always the rounded statutory share of the subtotal.
    #[test]
    fn prop_taxes_derive_from_subtotal(subtotal in arb_amount(), other in arb_amount()) {
        let breakdown = TaxBreakdown::from_subtotal(subtotal, other);
        prop_assert_eq!(breakdown.gst, round2(subtotal * GST_RATE));
        prop_assert_eq!(breakdown.qst, round2(subtotal * QST_RATE));
    }

    /// The total is the cent-rounded sum of the four components.
    #[test]
    fn prop_total_is_sum_of_parts(subtotal in arb_amount(), other in arb_amount()) {
        let breakdown = TaxBreakdown::from_subtotal(subtotal, other);
        let sum = breakdown.subtotal + breakdown.gst + breakdown.qst + breakdown.other;
        prop_assert_eq!(breakdown.total, round2(sum));
    }

    /// Every derived field is already rounded to cents.
    #[test]
    fn prop_fields_cent_rounded(subtotal in arb_amount(), other in arb_amount()) {
        let breakdown = TaxBreakdown::from_subtotal(subtotal, other);
        prop_assert_eq!(breakdown.gst, round2(breakdown.gst));
        prop_assert_eq!(breakdown.qst, round2(breakdown.qst));
        prop_assert_eq!(breakdown.total, round2(breakdown.total));
    }

    /// A manual tax edit never re-derives GST or QST.
    #[test]
    fn prop_manual_edit_keeps_entered_taxes(
        subtotal in arb_amount(),
        gst in arb_amount(),
        qst in arb_amount(),
        other in arb_amount(),
    ) {
        let breakdown = TaxBreakdown::with_taxes(subtotal, gst, qst, other);
        prop_assert_eq!(breakdown.gst, gst);
        prop_assert_eq!(breakdown.qst, qst);
        prop_assert_eq!(breakdown.total, round2(subtotal + gst + qst + other));
    }
}
