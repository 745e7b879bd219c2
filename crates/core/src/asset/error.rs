//! Asset error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during fixed asset operations.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Unknown CCA class number.
    #[error("Unknown CCA class {0}")]
    UnknownClass(String),

    /// Asset is disposed; no further mutation is allowed.
    #[error("Asset is disposed and can no longer be modified")]
    AlreadyDisposed,

    /// Rate outside [0, 100] percent.
    #[error("CCA rate must be between 0 and 100, got {0}")]
    InvalidRate(Decimal),

    /// UCC or additions below zero.
    #[error("UCC and additions cannot be negative")]
    NegativeAmount,

    /// Claim larger than the opening UCC of the entry.
    #[error("CCA claim {claimed} exceeds available UCC {available}")]
    ClaimExceedsUcc {
        /// The claimed amount.
        claimed: Decimal,
        /// The UCC available.
        available: Decimal,
    },

    /// Claim below zero.
    #[error("CCA claim cannot be negative, got {0}")]
    NegativeClaim(Decimal),
}

impl AssetError {
    /// Returns the error code for API-shaped responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownClass(_) => "UNKNOWN_CLASS",
            Self::AlreadyDisposed => "ALREADY_DISPOSED",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::ClaimExceedsUcc { .. } => "CLAIM_EXCEEDS_UCC",
            Self::NegativeClaim(_) => "NEGATIVE_CLAIM",
        }
    }
}
