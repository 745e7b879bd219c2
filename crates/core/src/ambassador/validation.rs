//! Commission rate bounds.

use rust_decimal::Decimal;

use crate::ambassador::error::AmbassadorError;

/// Validates a commission rate before any write.
///
/// Rates are percentages and must stay within [0, 100]; out-of-range
/// values are rejected locally and never reach the server.
///
/// # Errors
///
/// Returns `AmbassadorError::CommissionRateOutOfRange` otherwise.
pub fn validate_commission_rate(rate: Decimal) -> Result<(), AmbassadorError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        return Err(AmbassadorError::CommissionRateOutOfRange(rate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(5))]
    #[case(dec!(99.99))]
    #[case(dec!(100))]
    fn test_in_range(#[case] rate: Decimal) {
        assert!(validate_commission_rate(rate).is_ok());
    }

    #[rstest]
    #[case(dec!(150))]
    #[case(dec!(-5))]
    #[case(dec!(100.01))]
    #[case(dec!(-0.01))]
    fn test_out_of_range(#[case] rate: Decimal) {
        assert!(matches!(
            validate_commission_rate(rate),
            Err(AmbassadorError::CommissionRateOutOfRange(_))
        ));
    }
}
