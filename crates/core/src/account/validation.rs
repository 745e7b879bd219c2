//! Account form validation.

use crate::account::error::AccountError;
use crate::account::types::Address;

/// Password change policy.
///
/// Checked entirely client-side; a failing check blocks the network
/// call. The minimum length is configurable but defaults to 12.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 12 }
    }
}

impl PasswordPolicy {
    /// Validates a password change request.
    ///
    /// # Errors
    ///
    /// Returns `PasswordTooShort` or `PasswordMismatch`.
    pub fn validate_change(
        &self,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AccountError> {
        if new_password.len() < self.min_length {
            return Err(AccountError::PasswordTooShort {
                min: self.min_length,
            });
        }
        if new_password != confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Validates a profile update: the display name is required.
pub fn validate_profile(name: &str) -> Result<(), AccountError> {
    if name.trim().is_empty() {
        return Err(AccountError::NameRequired);
    }
    Ok(())
}

/// Validates a 6-digit MFA verification code.
///
/// The verify action stays disabled until exactly six ASCII digits are
/// entered.
pub fn validate_mfa_code(code: &str) -> Result<(), AccountError> {
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AccountError::MfaCodeInvalid);
    }
    Ok(())
}

/// Validates a shipping address before save.
pub fn validate_address(address: &Address) -> Result<(), AccountError> {
    for (field, value) in [
        ("address", &address.address),
        ("city", &address.city),
        ("postalCode", &address.postal_code),
        ("country", &address.country),
    ] {
        if value.trim().is_empty() {
            return Err(AccountError::AddressFieldRequired(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_password_policy_default_minimum() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length, 12);
    }

    #[test]
    fn test_short_password_rejected() {
        let policy = PasswordPolicy::default();
        let result = policy.validate_change("elevenchars", "elevenchars");
        assert!(matches!(
            result,
            Err(AccountError::PasswordTooShort { min: 12 })
        ));
    }

    #[test]
    fn test_mismatch_rejected() {
        let policy = PasswordPolicy::default();
        let result = policy.validate_change("a-long-enough-password", "a-different-password!");
        assert!(matches!(result, Err(AccountError::PasswordMismatch)));
    }

    #[test]
    fn test_valid_change_passes() {
        let policy = PasswordPolicy::default();
        assert!(policy
            .validate_change("correct horse battery", "correct horse battery")
            .is_ok());
    }

    #[test]
    fn test_configurable_minimum() {
        let policy = PasswordPolicy { min_length: 8 };
        assert!(policy.validate_change("12345678", "12345678").is_ok());
        assert!(policy.validate_change("1234567", "1234567").is_err());
    }

    #[rstest]
    #[case("123456", true)]
    #[case("000000", true)]
    #[case("12345", false)]
    #[case("1234567", false)]
    #[case("12345a", false)]
    #[case("12 456", false)]
    #[case("", false)]
    fn test_mfa_code(#[case] code: &str, #[case] ok: bool) {
        assert_eq!(validate_mfa_code(code).is_ok(), ok);
    }

    #[test]
    fn test_profile_name_required() {
        assert!(validate_profile("Marie").is_ok());
        assert!(matches!(
            validate_profile("  "),
            Err(AccountError::NameRequired)
        ));
    }

    #[test]
    fn test_address_required_fields() {
        let address = Address {
            address: "1 Rue Principale".to_string(),
            city: "Montreal".to_string(),
            province: "QC".to_string(),
            postal_code: "H2X 1Y4".to_string(),
            country: "CA".to_string(),
        };
        assert!(validate_address(&address).is_ok());

        let mut missing = address.clone();
        missing.city = String::new();
        assert!(matches!(
            validate_address(&missing),
            Err(AccountError::AddressFieldRequired("city"))
        ));
    }
}
