//! Account error types.

use thiserror::Error;

/// Errors that can occur during account settings operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// New password shorter than the policy minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// The configured minimum length.
        min: usize,
    },

    /// New and confirmation passwords differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Account has no usable password (OAuth sign-in).
    #[error("This account signs in through a provider and has no password")]
    NoUsablePassword,

    /// MFA code is not exactly six digits.
    #[error("Verification code must be exactly 6 digits")]
    MfaCodeInvalid,

    /// Display name is missing.
    #[error("Name is required")]
    NameRequired,

    /// A required address field is missing.
    #[error("Address field {0} is required")]
    AddressFieldRequired(&'static str),
}

impl AccountError {
    /// Returns the error code for API-shaped responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::NoUsablePassword => "NO_USABLE_PASSWORD",
            Self::MfaCodeInvalid => "MFA_CODE_INVALID",
            Self::NameRequired => "NAME_REQUIRED",
            Self::AddressFieldRequired(_) => "ADDRESS_FIELD_REQUIRED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AccountError::PasswordTooShort { min: 12 }.error_code(),
            "PASSWORD_TOO_SHORT"
        );
        assert_eq!(
            AccountError::NoUsablePassword.error_code(),
            "NO_USABLE_PASSWORD"
        );
        assert_eq!(AccountError::MfaCodeInvalid.error_code(), "MFA_CODE_INVALID");
    }
}
