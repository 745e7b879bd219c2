//! Ambassador program configuration schema.
//!
//! The admin settings endpoint stores this structure JSON-encoded inside
//! the settings value for the `ambassador_program_config` key. It is
//! schema-validated on read and before every write.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ambassador::error::AmbassadorError;

/// Program-wide configuration blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramConfig {
    /// Default commission rate for new ambassadors, percent in [0, 100].
    pub default_commission: Decimal,
    /// Minimum accumulated commission before a payout can run, >= 0.
    pub min_payout_amount: Decimal,
    /// Referral cookie lifetime in days, integer in [1, 365].
    pub cookie_days: u32,
    /// Approve applications without admin review.
    pub auto_approve: bool,
    /// Notify admins when an application arrives.
    pub notify_on_application: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            default_commission: Decimal::from_parts(5, 0, 0, false, 0),
            min_payout_amount: Decimal::from_parts(50, 0, 0, false, 0),
            cookie_days: 30,
            auto_approve: false,
            notify_on_application: true,
        }
    }
}

impl ProgramConfig {
    /// Validates all bounds.
    ///
    /// # Errors
    ///
    /// Returns the first failing bound.
    pub fn validate(&self) -> Result<(), AmbassadorError> {
        if self.default_commission < Decimal::ZERO || self.default_commission > Decimal::ONE_HUNDRED
        {
            return Err(AmbassadorError::CommissionRateOutOfRange(
                self.default_commission,
            ));
        }
        if self.min_payout_amount < Decimal::ZERO {
            return Err(AmbassadorError::NegativeMinPayout(self.min_payout_amount));
        }
        if !(1..=365).contains(&self.cookie_days) {
            return Err(AmbassadorError::CookieDaysOutOfRange(self.cookie_days));
        }
        Ok(())
    }

    /// Parses and validates a JSON-encoded config blob.
    pub fn from_json(value: &str) -> Result<Self, AmbassadorError> {
        let config: Self = serde_json::from_str(value)
            .map_err(|e| AmbassadorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to the JSON-encoded blob after validating.
    pub fn to_json(&self) -> Result<String, AmbassadorError> {
        self.validate()?;
        serde_json::to_string(self).map_err(|e| AmbassadorError::InvalidConfig(e.to_string()))
    }
}
