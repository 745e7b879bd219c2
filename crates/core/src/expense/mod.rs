//! Expense tracking for Boreal.
//!
//! This module implements the expense tax breakdown, draft validation,
//! and the reimbursement workflow state machine.
//!
//! # Modules
//!
//! - `types` - Expense domain types (status, category, DTO)
//! - `calc` - GST/QST breakdown derived from the subtotal
//! - `validation` - Draft validation before save
//! - `workflow` - Status transition logic
//! - `error` - Expense-specific error types

pub mod calc;
pub mod error;
pub mod types;
pub mod validation;
pub mod workflow;

#[cfg(test)]
mod calc_props;
#[cfg(test)]
mod workflow_props;

pub use calc::TaxBreakdown;
pub use error::ExpenseError;
pub use types::{Expense, ExpenseCategory, ExpenseStatus};
pub use validation::{validate_draft, ExpenseDraft};
pub use workflow::{ExpenseTransition, ExpenseWorkflow};
