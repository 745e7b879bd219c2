//! Estimate (quote) building for Boreal.
//!
//! This module implements the line-item totals engine with staged cent
//! rounding, the estimate lifecycle state machine, duplication, and
//! pre-save validation.
//!
//! # Modules
//!
//! - `types` - Estimate domain types (status, line items, DTO)
//! - `totals` - Staged-rounding totals computation
//! - `validation` - Pre-save validation
//! - `workflow` - Lifecycle transitions and duplication
//! - `error` - Estimate-specific error types

pub mod error;
pub mod totals;
pub mod types;
pub mod validation;
pub mod workflow;

#[cfg(test)]
mod totals_props;

pub use error::EstimateError;
pub use totals::EstimateTotals;
pub use types::{Estimate, EstimateStatus, LineItem};
pub use validation::validate_estimate;
pub use workflow::EstimateWorkflow;
