//! Ambassador error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ambassador operations.
#[derive(Debug, Error)]
pub enum AmbassadorError {
    /// Commission rate outside [0, 100].
    #[error("Commission rate must be between 0 and 100, got {0}")]
    CommissionRateOutOfRange(Decimal),

    /// Minimum payout amount below zero.
    #[error("Minimum payout amount cannot be negative, got {0}")]
    NegativeMinPayout(Decimal),

    /// Cookie lifetime outside [1, 365] days.
    #[error("Cookie lifetime must be between 1 and 365 days, got {0}")]
    CookieDaysOutOfRange(u32),

    /// Config blob could not be parsed.
    #[error("Invalid program config: {0}")]
    InvalidConfig(String),
}

impl AmbassadorError {
    /// Returns the error code for API-shaped responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CommissionRateOutOfRange(_) => "COMMISSION_RATE_OUT_OF_RANGE",
            Self::NegativeMinPayout(_) => "NEGATIVE_MIN_PAYOUT",
            Self::CookieDaysOutOfRange(_) => "COOKIE_DAYS_OUT_OF_RANGE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}
