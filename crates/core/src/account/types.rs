//! Account DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user's profile.
///
/// `has_password` is an explicit server capability flag: accounts created
/// through an OAuth provider carry no usable password and must not be
/// offered the password form. Never infer this from profile image URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name, editable.
    pub name: String,
    /// Email address; immutable through the settings form.
    pub email: String,
    /// Phone number, editable.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the account has a usable password.
    pub has_password: bool,
    /// Avatar URL, if any.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A shipping address.
///
/// Persisted to the local store immediately and to the server
/// best-effort; the local copy is the one the storefront reads back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
}

/// Server response to an MFA setup request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaSetup {
    /// QR code image URL for authenticator apps.
    pub qr_code_url: String,
    /// Secret for manual entry.
    pub manual_entry_key: String,
}

/// Backup codes returned once after successful MFA verification.
///
/// These are not retrievable later; callers must surface them to the
/// user immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupCodes(pub Vec<String>);
