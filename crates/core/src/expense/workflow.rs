//! Expense workflow state transitions.
//!
//! Stateless service validating reimbursement lifecycle transitions.
//! Transitions are requested over the wire and applied only after the
//! server confirms; this service is the local gate that keeps invalid
//! requests from ever being issued.

use chrono::{DateTime, Utc};

use crate::expense::error::ExpenseError;
use crate::expense::types::ExpenseStatus;

/// A validated status transition with its audit data.
#[derive(Debug, Clone)]
pub struct ExpenseTransition {
    /// The status the expense moves to.
    pub new_status: ExpenseStatus,
    /// When the transition was requested.
    pub occurred_at: DateTime<Utc>,
    /// Reason, present for rejections.
    pub reason: Option<String>,
}

impl ExpenseTransition {
    fn to(new_status: ExpenseStatus) -> Self {
        Self {
            new_status,
            occurred_at: Utc::now(),
            reason: None,
        }
    }
}

/// Stateless service for expense workflow transitions.
pub struct ExpenseWorkflow;

impl ExpenseWorkflow {
    /// Submit a draft expense for approval.
    pub fn submit(current: ExpenseStatus) -> Result<ExpenseTransition, ExpenseError> {
        match current {
            ExpenseStatus::Draft => Ok(ExpenseTransition::to(ExpenseStatus::Submitted)),
            _ => Err(ExpenseError::InvalidTransition {
                from: current,
                to: ExpenseStatus::Submitted,
            }),
        }
    }

    /// Approve a submitted expense.
    pub fn approve(current: ExpenseStatus) -> Result<ExpenseTransition, ExpenseError> {
        match current {
            ExpenseStatus::Submitted => Ok(ExpenseTransition::to(ExpenseStatus::Approved)),
            _ => Err(ExpenseError::InvalidTransition {
                from: current,
                to: ExpenseStatus::Approved,
            }),
        }
    }

    /// Reject a submitted expense. A non-empty reason is required.
    pub fn reject(
        current: ExpenseStatus,
        reason: String,
    ) -> Result<ExpenseTransition, ExpenseError> {
        if reason.trim().is_empty() {
            return Err(ExpenseError::RejectionReasonRequired);
        }
        match current {
            ExpenseStatus::Submitted => Ok(ExpenseTransition {
                reason: Some(reason),
                ..ExpenseTransition::to(ExpenseStatus::Rejected)
            }),
            _ => Err(ExpenseError::InvalidTransition {
                from: current,
                to: ExpenseStatus::Rejected,
            }),
        }
    }

    /// Mark an approved expense as reimbursed.
    pub fn mark_reimbursed(current: ExpenseStatus) -> Result<ExpenseTransition, ExpenseError> {
        match current {
            ExpenseStatus::Approved => Ok(ExpenseTransition::to(ExpenseStatus::Reimbursed)),
            _ => Err(ExpenseError::InvalidTransition {
                from: current,
                to: ExpenseStatus::Reimbursed,
            }),
        }
    }

    /// Return a rejected expense to draft for correction.
    pub fn resubmit(current: ExpenseStatus) -> Result<ExpenseTransition, ExpenseError> {
        match current {
            ExpenseStatus::Rejected => Ok(ExpenseTransition::to(ExpenseStatus::Draft)),
            _ => Err(ExpenseError::InvalidTransition {
                from: current,
                to: ExpenseStatus::Draft,
            }),
        }
    }
}
