//! Core business logic for Boreal.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `tax` - Statutory GST/QST rates shared by every calculator
//! - `expense` - Expense tax breakdown and reimbursement workflow
//! - `estimate` - Quote line items, staged-rounding totals, lifecycle
//! - `ambassador` - Tier table, program aggregation, config schema
//! - `asset` - Fixed assets, CCA classes and depreciation bookkeeping
//! - `account` - Account settings validation (profile, password, MFA)

pub mod account;
pub mod ambassador;
pub mod asset;
pub mod estimate;
pub mod expense;
pub mod tax;
