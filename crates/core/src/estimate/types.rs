//! Estimate domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default validity window for a fresh draft, in days.
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// Estimate status in the quote lifecycle.
///
/// The valid transitions are:
/// - Draft → Sent (requires a customer email)
/// - Sent → Viewed
/// - Sent/Viewed → Accepted | Declined | Expired
/// - Accepted → Converted (one-way, once no invoice is linked yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateStatus {
    /// Estimate is being drafted and can be modified.
    Draft,
    /// Estimate has been emailed to the customer.
    Sent,
    /// The customer opened the estimate.
    Viewed,
    /// The customer accepted the estimate.
    Accepted,
    /// The customer declined the estimate (terminal).
    Declined,
    /// The validity window lapsed (terminal).
    Expired,
    /// The estimate was converted into an invoice (terminal).
    Converted,
}

impl EstimateStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Sent => "SENT",
            Self::Viewed => "VIEWED",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Expired => "EXPIRED",
            Self::Converted => "CONVERTED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "SENT" => Some(Self::Sent),
            "VIEWED" => Some(Self::Viewed),
            "ACCEPTED" => Some(Self::Accepted),
            "DECLINED" => Some(Self::Declined),
            "EXPIRED" => Some(Self::Expired),
            "CONVERTED" => Some(Self::Converted),
            _ => None,
        }
    }

    /// Returns true if the estimate can be modified or deleted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true once no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Declined | Self::Expired | Self::Converted)
    }

    /// Returns true while the customer can still respond.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Sent | Self::Viewed)
    }
}

impl fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product or service name.
    pub product_name: String,
    /// Quantity quoted.
    pub quantity: Decimal,
    /// Unit price before discounts.
    pub unit_price: Decimal,
    /// Per-item discount in percent.
    #[serde(default)]
    pub discount_percent: Decimal,
}

impl LineItem {
    /// Returns the unrounded line amount.
    ///
    /// Line amounts are summed before any rounding; only the sum is
    /// rounded (stage one of the totals engine).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        let discount_factor = Decimal::ONE - self.discount_percent / Decimal::ONE_HUNDRED;
        self.quantity * self.unit_price * discount_factor
    }
}

/// An estimate as exchanged with the accounting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Unique identifier.
    pub id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email; required before the estimate can be sent.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Quoted lines.
    pub items: Vec<LineItem>,
    /// Global discount in percent, applied after the per-item sum.
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Validity window in days (1-365).
    pub validity_days: u32,
    /// Pre-tax amount after per-item discounts.
    pub subtotal: Decimal,
    /// Global discount amount.
    pub discount_amount: Decimal,
    /// Federal GST portion.
    pub tax_gst: Decimal,
    /// Quebec QST portion.
    pub tax_qst: Decimal,
    /// Grand total.
    pub total: Decimal,
    /// Current lifecycle status.
    pub status: EstimateStatus,
    /// Invoice created by conversion, if any.
    #[serde(default)]
    pub invoice_id: Option<Uuid>,
    /// When the customer accepted.
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
    /// When the customer declined.
    #[serde(default)]
    pub declined_at: Option<DateTime<Utc>>,
}
