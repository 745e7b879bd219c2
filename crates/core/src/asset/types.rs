//! Fixed asset domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::asset::error::AssetError;

/// Fixed asset status.
///
/// `Disposed` is terminal: no further depreciation entries are recorded
/// and every mutation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// In service and depreciating.
    Active,
    /// Sold or scrapped (terminal).
    Disposed,
    /// UCC exhausted; kept on the books at residual value.
    FullyDepreciated,
}

impl AssetStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disposed => "DISPOSED",
            Self::FullyDepreciated => "FULLY_DEPRECIATED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Some(Self::Active),
            "DISPOSED" => Some(Self::Disposed),
            "FULLY_DEPRECIATED" => Some(Self::FullyDepreciated),
            _ => None,
        }
    }

    /// Returns true while depreciation and disposal are still allowed.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        !matches!(self, Self::Disposed)
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fiscal year of CCA bookkeeping.
///
/// Constructed through [`DepreciationEntry::new`] so the UCC invariant
/// `closing = opening - claimed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationEntry {
    /// Fiscal year the claim belongs to.
    pub fiscal_year: i32,
    /// Undepreciated capital cost at the start of the year.
    pub opening_ucc: Decimal,
    /// CCA claimed for the year.
    pub cca_claimed: Decimal,
    /// `opening_ucc - cca_claimed`.
    pub closing_ucc: Decimal,
}

impl DepreciationEntry {
    /// Creates an entry, deriving the closing UCC.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::ClaimExceedsUcc` when the claim is larger
    /// than the opening UCC, and `AssetError::NegativeClaim` for a
    /// negative claim.
    pub fn new(
        fiscal_year: i32,
        opening_ucc: Decimal,
        cca_claimed: Decimal,
    ) -> Result<Self, AssetError> {
        if cca_claimed < Decimal::ZERO {
            return Err(AssetError::NegativeClaim(cca_claimed));
        }
        if cca_claimed > opening_ucc {
            return Err(AssetError::ClaimExceedsUcc {
                claimed: cca_claimed,
                available: opening_ucc,
            });
        }
        Ok(Self {
            fiscal_year,
            opening_ucc,
            cca_claimed,
            closing_ucc: opening_ucc - cca_claimed,
        })
    }
}

/// A fixed asset as exchanged with the accounting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    /// Unique identifier.
    pub id: Uuid,
    /// Asset description.
    pub name: String,
    /// Purchase cost.
    pub acquisition_cost: Decimal,
    /// Expected value at end of life.
    pub residual_value: Decimal,
    /// Date placed in service.
    pub acquisition_date: NaiveDate,
    /// CCA class number, e.g. "8" or "10.1".
    pub cca_class: String,
    /// Statutory rate in percent; autofilled from the class, editable.
    pub cca_rate: Decimal,
    /// Cost less accumulated depreciation, floored at residual value.
    pub current_book_value: Decimal,
    /// Depreciation taken to date.
    pub accumulated_depreciation: Decimal,
    /// Whether the first-year half-year rule applied.
    pub half_year_rule_applied: bool,
    /// Whether the Accelerated Investment Incentive applied.
    pub aii_applied: bool,
    /// Whether the 100% first-year super-deduction applied.
    pub super_deduction: bool,
    /// Current status.
    pub status: AssetStatus,
    /// Proceeds recorded at disposal.
    #[serde(default)]
    pub disposal_proceeds: Option<Decimal>,
    /// Authoritative gain/loss written by the server at disposal.
    #[serde(default)]
    pub disposal_gain_loss: Option<Decimal>,
    /// Year-by-year CCA history.
    #[serde(default)]
    pub depreciation_entries: Vec<DepreciationEntry>,
}

impl FixedAsset {
    /// Client-side gain/loss preview shown before a disposal is confirmed.
    ///
    /// The server's figure is authoritative; this is only the estimate
    /// `proceeds - current_book_value`.
    #[must_use]
    pub fn disposal_preview(&self, proceeds: Decimal) -> Decimal {
        proceeds - self.current_book_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_mutability() {
        assert!(AssetStatus::Active.is_mutable());
        assert!(AssetStatus::FullyDepreciated.is_mutable());
        assert!(!AssetStatus::Disposed.is_mutable());
    }

    #[test]
    fn test_entry_invariant() {
        let entry = DepreciationEntry::new(2026, dec!(10000), dec!(2000)).unwrap();
        assert_eq!(entry.closing_ucc, dec!(8000));
        assert_eq!(entry.opening_ucc - entry.cca_claimed, entry.closing_ucc);
    }

    #[test]
    fn test_entry_rejects_overclaim() {
        assert!(matches!(
            DepreciationEntry::new(2026, dec!(100), dec!(150)),
            Err(AssetError::ClaimExceedsUcc { .. })
        ));
        assert!(matches!(
            DepreciationEntry::new(2026, dec!(100), dec!(-1)),
            Err(AssetError::NegativeClaim(_))
        ));
    }

    #[test]
    fn test_disposal_preview() {
        let asset = FixedAsset {
            id: Uuid::new_v4(),
            name: "Delivery van".to_string(),
            acquisition_cost: dec!(30000),
            residual_value: dec!(2000),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            cca_class: "10".to_string(),
            cca_rate: dec!(30),
            current_book_value: dec!(14700),
            accumulated_depreciation: dec!(15300),
            half_year_rule_applied: true,
            aii_applied: false,
            super_deduction: false,
            status: AssetStatus::Active,
            disposal_proceeds: None,
            disposal_gain_loss: None,
            depreciation_entries: vec![],
        };
        assert_eq!(asset.disposal_preview(dec!(16000)), dec!(1300));
        assert_eq!(asset.disposal_preview(dec!(10000)), dec!(-4700));
    }
}
