//! Draft validation before save.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::error::ExpenseError;
use crate::expense::types::ExpenseCategory;

/// User input for creating or editing a draft expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// What was purchased.
    pub description: String,
    /// Category, unset until the user picks one.
    pub category: Option<ExpenseCategory>,
    /// Vendor name, if any.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Pre-tax amount.
    pub subtotal: Decimal,
    /// Manual GST override; derived from the subtotal when absent.
    #[serde(default)]
    pub tax_gst: Option<Decimal>,
    /// Manual QST override; derived from the subtotal when absent.
    #[serde(default)]
    pub tax_qst: Option<Decimal>,
    /// Manually entered additional tax.
    #[serde(default)]
    pub tax_other: Decimal,
}

/// Validates a draft before it is saved.
///
/// Mirrors the submit gate of the expense form: description, category and
/// a positive subtotal are all required; nothing is sent until they hold.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_draft(draft: &ExpenseDraft) -> Result<(), ExpenseError> {
    if draft.description.trim().is_empty() {
        return Err(ExpenseError::DescriptionRequired);
    }
    if draft.category.is_none() {
        return Err(ExpenseError::CategoryRequired);
    }
    if draft.subtotal <= Decimal::ZERO {
        return Err(ExpenseError::InvalidSubtotal);
    }
    Ok(())
}
