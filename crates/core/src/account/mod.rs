//! Account settings logic for Boreal.
//!
//! Client-side validation for the profile, password, address and MFA
//! forms. Every rule here runs before any network call; a failure blocks
//! the request entirely.
//!
//! # Modules
//!
//! - `types` - Account DTOs (profile, address, MFA payloads)
//! - `validation` - Form validation (password policy, MFA code, address)
//! - `error` - Account-specific error types

pub mod error;
pub mod types;
pub mod validation;

pub use error::AccountError;
pub use types::{Address, BackupCodes, MfaSetup, UserProfile};
pub use validation::{validate_address, validate_mfa_code, validate_profile, PasswordPolicy};
