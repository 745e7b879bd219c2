//! Expense error types.

use thiserror::Error;

use crate::expense::types::ExpenseStatus;

/// Errors that can occur during expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ExpenseStatus,
        /// The attempted target status.
        to: ExpenseStatus,
    },

    /// Attempted to edit or delete a non-draft expense.
    #[error("Expense in status {0} cannot be modified")]
    NotEditable(ExpenseStatus),

    /// Rejection reason is required but not provided.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    /// Description is missing.
    #[error("Description is required")]
    DescriptionRequired,

    /// Category is missing.
    #[error("Category is required")]
    CategoryRequired,

    /// Subtotal is zero or negative.
    #[error("Subtotal must be greater than zero")]
    InvalidSubtotal,
}

impl ExpenseError {
    /// Returns the error code for API-shaped responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotEditable(_) => "NOT_EDITABLE",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            Self::DescriptionRequired => "DESCRIPTION_REQUIRED",
            Self::CategoryRequired => "CATEGORY_REQUIRED",
            Self::InvalidSubtotal => "INVALID_SUBTOTAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ExpenseError::InvalidTransition {
            from: ExpenseStatus::Draft,
            to: ExpenseStatus::Approved,
        };
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("DRAFT"));
        assert!(err.to_string().contains("APPROVED"));

        assert_eq!(
            ExpenseError::NotEditable(ExpenseStatus::Submitted).error_code(),
            "NOT_EDITABLE"
        );
        assert_eq!(
            ExpenseError::RejectionReasonRequired.error_code(),
            "REJECTION_REASON_REQUIRED"
        );
        assert_eq!(ExpenseError::InvalidSubtotal.error_code(), "INVALID_SUBTOTAL");
    }
}
