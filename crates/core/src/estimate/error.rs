//! Estimate error types.

use thiserror::Error;

use crate::estimate::types::EstimateStatus;

/// Errors that can occur during estimate operations.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: EstimateStatus,
        /// The attempted target status.
        to: EstimateStatus,
    },

    /// Attempted to edit or delete a non-draft estimate.
    #[error("Estimate in status {0} cannot be modified")]
    NotEditable(EstimateStatus),

    /// Cannot send without a customer email.
    #[error("Customer email is required before sending")]
    CustomerEmailRequired,

    /// Estimate already has an invoice linked.
    #[error("Estimate is already converted to an invoice")]
    AlreadyConverted,

    /// Customer name is missing.
    #[error("Customer name is required")]
    CustomerNameRequired,

    /// Customer email fails format validation.
    #[error("Customer email is not a valid address")]
    InvalidEmail,

    /// No usable line item present.
    #[error("At least one item with a product name is required")]
    ItemRequired,

    /// Validity window outside 1-365 days.
    #[error("Validity window must be between 1 and 365 days, got {0}")]
    InvalidValidityWindow(u32),
}

impl EstimateError {
    /// Returns the error code for API-shaped responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotEditable(_) => "NOT_EDITABLE",
            Self::CustomerEmailRequired => "CUSTOMER_EMAIL_REQUIRED",
            Self::AlreadyConverted => "ALREADY_CONVERTED",
            Self::CustomerNameRequired => "CUSTOMER_NAME_REQUIRED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ItemRequired => "ITEM_REQUIRED",
            Self::InvalidValidityWindow(_) => "INVALID_VALIDITY_WINDOW",
        }
    }
}
