//! Pre-save validation for estimates.

use validator::ValidateEmail;

use crate::estimate::error::EstimateError;
use crate::estimate::types::Estimate;

/// Validates an estimate before it is saved.
///
/// Rules: customer name required; email format-checked when present;
/// at least one item with a non-empty product name; validity window an
/// integer in [1, 365].
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_estimate(estimate: &Estimate) -> Result<(), EstimateError> {
    if estimate.customer_name.trim().is_empty() {
        return Err(EstimateError::CustomerNameRequired);
    }

    if let Some(email) = &estimate.customer_email {
        if !email.trim().is_empty() && !email.validate_email() {
            return Err(EstimateError::InvalidEmail);
        }
    }

    if !estimate
        .items
        .iter()
        .any(|item| !item.product_name.trim().is_empty())
    {
        return Err(EstimateError::ItemRequired);
    }

    if !(1..=365).contains(&estimate.validity_days) {
        return Err(EstimateError::InvalidValidityWindow(estimate.validity_days));
    }

    Ok(())
}
