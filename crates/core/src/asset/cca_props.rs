//! Property-based tests for the CCA calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::asset::cca::{CcaCalculator, CcaYearInput};
use crate::asset::types::DepreciationEntry;
use boreal_shared::types::round2;

fn arb_money() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=100).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The claim is always within [0, opening + additions] and the
    /// closing UCC balances exactly.
    #[test]
    fn prop_claim_bounded_and_balanced(
        opening in arb_money(),
        additions in arb_money(),
        rate in arb_rate(),
        half_year in any::<bool>(),
        aii in any::<bool>(),
        super_deduction in any::<bool>(),
    ) {
        let claim = CcaCalculator::claim_for_year(CcaYearInput {
            opening_ucc: opening,
            additions,
            rate,
            half_year_rule: half_year,
            aii,
            super_deduction,
        }).unwrap();

        prop_assert!(claim.cca_claimed >= Decimal::ZERO);
        prop_assert!(claim.cca_claimed <= opening + additions);
        prop_assert_eq!(claim.closing_ucc, opening + additions - claim.cca_claimed);
        prop_assert_eq!(claim.cca_claimed, round2(claim.cca_claimed));
    }

    /// With no additions, the flags are irrelevant: every variant claims
    /// plain rate-on-UCC.
    #[test]
    fn prop_flags_only_affect_additions(
        opening in arb_money(),
        rate in arb_rate(),
        half_year in any::<bool>(),
        aii in any::<bool>(),
    ) {
        let flagged = CcaCalculator::claim_for_year(CcaYearInput {
            opening_ucc: opening,
            additions: Decimal::ZERO,
            rate,
            half_year_rule: half_year,
            aii,
            super_deduction: false,
        }).unwrap();
        let plain = CcaCalculator::claim_for_year(CcaYearInput {
            opening_ucc: opening,
            additions: Decimal::ZERO,
            rate,
            half_year_rule: false,
            aii: false,
            super_deduction: false,
        }).unwrap();
        prop_assert_eq!(flagged.cca_claimed, plain.cca_claimed);
    }

    /// A depreciation entry built from any valid claim keeps the ledger
    /// invariant `closing = opening - claimed`.
    #[test]
    fn prop_entry_invariant(opening in arb_money(), rate in arb_rate()) {
        let claim = CcaCalculator::claim_for_year(CcaYearInput {
            opening_ucc: opening,
            additions: Decimal::ZERO,
            rate,
            half_year_rule: false,
            aii: false,
            super_deduction: false,
        }).unwrap();
        let entry = DepreciationEntry::new(2026, opening, claim.cca_claimed).unwrap();
        prop_assert_eq!(entry.closing_ucc, entry.opening_ucc - entry.cca_claimed);
    }
}
