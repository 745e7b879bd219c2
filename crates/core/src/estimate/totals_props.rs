//! Property-based tests for the estimate totals engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::estimate::totals::EstimateTotals;
use crate::estimate::types::LineItem;
use boreal_shared::types::round2;

fn arb_money() -> impl Strategy<Value = Decimal> {
    // Cent-scaled amounts up to $10,000.
    (0i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|basis_points| Decimal::new(basis_points, 2))
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (1i64..=50, arb_money(), arb_percent()).prop_map(|(qty, unit_price, discount_percent)| {
        LineItem {
            product_name: "Item".to_string(),
            quantity: Decimal::from(qty),
            unit_price,
            discount_percent,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every stage is rounded to cents: re-rounding is a no-op.
    #[test]
    fn prop_all_stages_cent_rounded(
        items in proptest::collection::vec(arb_item(), 0..8),
        global in arb_percent(),
    ) {
        let totals = EstimateTotals::compute(&items, global);
        prop_assert_eq!(totals.subtotal, round2(totals.subtotal));
        prop_assert_eq!(totals.discount_amount, round2(totals.discount_amount));
        prop_assert_eq!(totals.after_discount, round2(totals.after_discount));
        prop_assert_eq!(totals.gst, round2(totals.gst));
        prop_assert_eq!(totals.qst, round2(totals.qst));
        prop_assert_eq!(totals.total, round2(totals.total));
    }

    /// Stages chain exactly: each value derives from the previous
    /// rounded stage, never from an unrounded intermediate.
    #[test]
    fn prop_stage_chaining(
        items in proptest::collection::vec(arb_item(), 0..8),
        global in arb_percent(),
    ) {
        let totals = EstimateTotals::compute(&items, global);
        prop_assert_eq!(
            totals.discount_amount,
            round2(totals.subtotal * global / Decimal::ONE_HUNDRED)
        );
        prop_assert_eq!(
            totals.after_discount,
            round2(totals.subtotal - totals.discount_amount)
        );
        prop_assert_eq!(
            totals.total,
            round2(totals.after_discount + totals.gst + totals.qst)
        );
    }

    /// Zero global discount leaves the subtotal untouched.
    #[test]
    fn prop_zero_discount_identity(items in proptest::collection::vec(arb_item(), 0..8)) {
        let totals = EstimateTotals::compute(&items, Decimal::ZERO);
        prop_assert_eq!(totals.discount_amount, Decimal::ZERO);
        prop_assert_eq!(totals.after_discount, totals.subtotal);
    }

    /// The total never exceeds the undiscounted gross by more than the
    /// rounding slack, and is never negative.
    #[test]
    fn prop_total_sane(
        items in proptest::collection::vec(arb_item(), 0..8),
        global in arb_percent(),
    ) {
        let totals = EstimateTotals::compute(&items, global);
        prop_assert!(totals.total >= Decimal::ZERO);
        prop_assert!(totals.after_discount <= totals.subtotal);
    }
}
