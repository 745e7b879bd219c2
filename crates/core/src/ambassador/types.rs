//! Ambassador domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Commission tier in the ambassador program.
///
/// The tier table provides reference display defaults; the stored
/// commission rate of an ambassador is independent and editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Entry tier.
    Bronze = 0,
    /// Requires $1,000 in sales.
    Silver = 1,
    /// Requires $5,000 in sales.
    Gold = 2,
    /// Requires $15,000 in sales.
    Platinum = 3,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum];

    /// Returns the default commission percentage for this tier.
    #[must_use]
    pub const fn default_commission(&self) -> Decimal {
        match self {
            Self::Bronze => Decimal::from_parts(5, 0, 0, false, 0),
            Self::Silver => Decimal::from_parts(8, 0, 0, false, 0),
            Self::Gold => Decimal::from_parts(10, 0, 0, false, 0),
            Self::Platinum => Decimal::from_parts(15, 0, 0, false, 0),
        }
    }

    /// Returns the minimum sales volume qualifying for this tier.
    #[must_use]
    pub const fn min_sales(&self) -> Decimal {
        match self {
            Self::Bronze => Decimal::ZERO,
            Self::Silver => Decimal::from_parts(1000, 0, 0, false, 0),
            Self::Gold => Decimal::from_parts(5000, 0, 0, false, 0),
            Self::Platinum => Decimal::from_parts(15000, 0, 0, false, 0),
        }
    }

    /// Returns the highest tier whose sales floor the volume reaches.
    #[must_use]
    pub fn for_sales(total_sales: Decimal) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|tier| total_sales >= tier.min_sales())
            .unwrap_or(Self::Bronze)
    }

    /// Returns the wire representation of the tier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ambassador account status.
///
/// Status transitions are driven by admin action (approve, suspend,
/// reactivate); the client applies them optimistically and rolls back
/// on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmbassadorStatus {
    /// Application received, awaiting approval.
    Pending,
    /// Actively referring.
    Active,
    /// Suspended by an admin.
    Suspended,
    /// Deactivated.
    Inactive,
}

impl AmbassadorStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "ACTIVE" => Some(Self::Active),
            "SUSPENDED" => Some(Self::Suspended),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for AmbassadorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ambassador as exchanged with the program API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ambassador {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Current tier.
    pub tier: Tier,
    /// Stored commission rate in percent; within [0, 100].
    pub commission_rate: Decimal,
    /// Number of referred customers.
    pub total_referrals: u32,
    /// Lifetime referred sales volume.
    pub total_sales: Decimal,
    /// Lifetime commissions earned.
    pub total_earnings: Decimal,
    /// Commissions awaiting payout.
    pub pending_payout: Decimal,
    /// Account status.
    pub status: AmbassadorStatus,
}
