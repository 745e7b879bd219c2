//! Fixed asset and CCA depreciation logic for Boreal.
//!
//! This module implements the Canadian Capital Cost Allowance bookkeeping:
//! the statutory class/rate table, the declining-balance calculator with
//! half-year rule, Accelerated Investment Incentive and super-deduction
//! handling, the per-entry UCC invariant, and disposal semantics.
//!
//! # Modules
//!
//! - `types` - Asset domain types (status, depreciation entries, DTO)
//! - `cca` - Class table and declining-balance calculator
//! - `form` - Class selection / rate autofill semantics
//! - `error` - Asset-specific error types

pub mod cca;
pub mod error;
pub mod form;
pub mod types;

#[cfg(test)]
mod cca_props;

pub use cca::{rate_for_class, CcaCalculator, CcaClaim, CcaClass, CcaYearInput, CCA_CLASSES};
pub use error::AssetError;
pub use form::AssetForm;
pub use types::{AssetStatus, DepreciationEntry, FixedAsset};
