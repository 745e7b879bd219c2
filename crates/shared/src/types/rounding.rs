//! Monetary rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All helpers operate on `rust_decimal::Decimal`.
//!
//! The upstream accounting rules round to cents *after every arithmetic
//! stage*, not once at the end. Implementations must call [`round2`] at
//! each stage; accumulating unrounded intermediates diverges by fractions
//! of a cent on multi-line documents.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places.
///
/// Midpoints round away from zero, matching `round(x * 100) / 100`
/// for the non-negative amounts this domain produces.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `part / whole * 100`, or zero when `whole` is zero.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole) * Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1.005), dec!(1.01))]
    #[case(dec!(1.0049), dec!(1.00))]
    #[case(dec!(1.0125), dec!(1.01))]
    #[case(dec!(2.0199375), dec!(2.02))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(10), dec!(10))]
    fn test_round2(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round2(input), expected);
    }

    #[test]
    fn test_round2_midpoint_away_from_zero() {
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
        assert_eq!(round2(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(25), dec!(100)), dec!(25));
        assert_eq!(percent_of(dec!(1), dec!(3)).round_dp(2), dec!(33.33));
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(dec!(25), Decimal::ZERO), Decimal::ZERO);
    }
}
