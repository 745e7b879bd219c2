//! Expense domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Expense status in the reimbursement workflow.
///
/// Expenses progress through these states from entry to reimbursement.
/// The valid transitions are:
/// - Draft → Submitted (submit)
/// - Submitted → Approved (approve)
/// - Submitted → Rejected (reject, reason required)
/// - Approved → Reimbursed (mark reimbursed)
/// - Rejected → Draft (resubmit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    /// Expense is being drafted and can be modified or deleted.
    Draft,
    /// Expense has been submitted for approval.
    Submitted,
    /// Expense has been approved and awaits reimbursement.
    Approved,
    /// Expense was rejected; it can be corrected and resubmitted.
    Rejected,
    /// Expense has been reimbursed (terminal).
    Reimbursed,
}

impl ExpenseStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Reimbursed => "REIMBURSED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "SUBMITTED" => Some(Self::Submitted),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "REIMBURSED" => Some(Self::Reimbursed),
            _ => None,
        }
    }

    /// Returns true if the expense can be edited or deleted by its owner.
    ///
    /// Only drafts are mutable; everything past submission is read-only
    /// for the submitter.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true once no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reimbursed)
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expense category with its CRA deductibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Meals with clients or while travelling (50% deductible).
    Meals,
    /// Client entertainment (50% deductible).
    Entertainment,
    /// Fines and penalties (not deductible).
    Fines,
    /// Personal expenses mixed into a business account (not deductible).
    Personal,
    /// Business travel.
    Travel,
    /// Office supplies.
    OfficeSupplies,
    /// Software and subscriptions.
    Software,
    /// Accounting, legal and other professional fees.
    ProfessionalFees,
    /// Rent for business premises.
    Rent,
    /// Utilities.
    Utilities,
    /// Vehicle costs.
    Vehicle,
    /// Advertising and marketing.
    Marketing,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Returns the deductible percentage for this category.
    ///
    /// The table is informational only; it never alters the tax math.
    #[must_use]
    pub const fn deductible_percent(&self) -> Decimal {
        match self {
            Self::Meals | Self::Entertainment => Decimal::from_parts(50, 0, 0, false, 0),
            Self::Fines | Self::Personal => Decimal::ZERO,
            _ => Decimal::ONE_HUNDRED,
        }
    }
}

/// An expense as exchanged with the accounting API.
///
/// The server owns this entity; clients hold transient copies and
/// recompute the tax breakdown locally on every subtotal edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier.
    pub id: Uuid,
    /// What was purchased.
    pub description: String,
    /// Category driving the deductibility display.
    pub category: ExpenseCategory,
    /// Vendor name, if recorded.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Pre-tax amount.
    pub subtotal: Decimal,
    /// Federal GST portion.
    pub tax_gst: Decimal,
    /// Quebec QST portion.
    pub tax_qst: Decimal,
    /// Any other tax or levy entered manually.
    pub tax_other: Decimal,
    /// Grand total; always `subtotal + gst + qst + other` rounded to cents.
    pub total: Decimal,
    /// Deductible percentage derived from the category.
    pub deductible_percent: Decimal,
    /// Current workflow status.
    pub status: ExpenseStatus,
    /// Reason recorded when the expense was rejected.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}
