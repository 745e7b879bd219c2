//! Account settings repository.
//!
//! Profile, password, MFA and shipping address. All form rules run
//! locally before any request; the session refresh after a profile
//! update and the server copy of the address are both best-effort.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use boreal_core::account::{
    validate_address, validate_mfa_code, validate_profile, Address, BackupCodes, MfaSetup,
    PasswordPolicy, UserProfile,
};
use boreal_shared::{AppError, AppResult};

use crate::http::{check, decode, ApiRequest, Transport};
use crate::local_store::{LocalStore, SHIPPING_ADDRESS_KEY};

/// Repository for the signed-in user's account settings.
pub struct AccountRepository {
    transport: Arc<dyn Transport>,
    store: Arc<dyn LocalStore>,
    policy: PasswordPolicy,
}

impl AccountRepository {
    /// Creates a repository over the given transport and local store.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            transport,
            store,
            policy: PasswordPolicy::default(),
        }
    }

    /// Fetches the current profile.
    pub async fn profile(&self) -> AppResult<UserProfile> {
        let response = self
            .transport
            .execute(ApiRequest::get("/api/account/profile"))
            .await?;
        decode(check(response)?)
    }

    /// Updates the display name and phone number.
    ///
    /// After a successful update the session is refreshed so the header
    /// shows the new name immediately; a failed refresh is logged and
    /// swallowed since the profile change itself already succeeded.
    pub async fn update_profile(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> AppResult<UserProfile> {
        validate_profile(name).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::put(
            "/api/account/profile",
            serde_json::json!({ "name": name, "phone": phone }),
        );
        let profile: UserProfile = decode(check(self.transport.execute(request).await?)?)?;

        let refresh = ApiRequest::post("/api/auth/session/refresh", serde_json::json!({}));
        if let Err(err) = self.transport.execute(refresh).await.and_then(check) {
            warn!(error = %err, "session refresh after profile update failed");
        }
        Ok(profile)
    }

    /// Changes the account password.
    ///
    /// Accounts without a usable password (provider sign-in) are refused
    /// locally, as are policy violations; nothing reaches the server
    /// until every rule holds.
    pub async fn change_password(
        &self,
        profile: &UserProfile,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> AppResult<()> {
        if !profile.has_password {
            return Err(AppError::Validation(
                "this account signs in through a provider and has no password".to_string(),
            ));
        }
        self.policy
            .validate_change(new_password, confirm_password)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::put(
            "/api/account/password",
            serde_json::json!({
                "currentPassword": current_password,
                "newPassword": new_password,
            }),
        );
        check(self.transport.execute(request).await?)?;
        Ok(())
    }

    /// Saves the shipping address.
    ///
    /// Written to the local store first; the server copy is best-effort
    /// and a failure there does not fail the save. The local copy is the
    /// one the storefront reads back at checkout.
    pub async fn save_address(&self, address: &Address) -> AppResult<()> {
        validate_address(address).map_err(|e| AppError::Validation(e.to_string()))?;

        let value =
            serde_json::to_value(address).map_err(|e| AppError::Storage(e.to_string()))?;
        self.store.put(SHIPPING_ADDRESS_KEY, &value)?;

        let request = ApiRequest::put("/api/account/address", value);
        if let Err(err) = self.transport.execute(request).await.and_then(check) {
            warn!(error = %err, "server-side address save failed, local copy kept");
        }
        Ok(())
    }

    /// Loads the locally saved shipping address, if any.
    pub fn saved_address(&self) -> AppResult<Option<Address>> {
        match self.store.get(SHIPPING_ADDRESS_KEY)? {
            Some(value) => Ok(Some(
                serde_json::from_value(value).map_err(|e| AppError::Storage(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }

    /// Starts MFA enrollment.
    pub async fn mfa_setup(&self) -> AppResult<MfaSetup> {
        let request = ApiRequest::post("/api/account/mfa/setup", serde_json::json!({}));
        decode(check(self.transport.execute(request).await?)?)
    }

    /// Verifies the MFA enrollment code and returns the backup codes.
    ///
    /// The code must be exactly six digits; anything else is rejected
    /// locally. Backup codes are shown once and not retrievable later.
    pub async fn mfa_verify(&self, code: &str) -> AppResult<BackupCodes> {
        validate_mfa_code(code).map_err(|e| AppError::Validation(e.to_string()))?;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct VerifyResponse {
            // Not every deployment issues backup codes on enrollment.
            #[serde(default)]
            backup_codes: Vec<String>,
        }

        let request =
            ApiRequest::post("/api/account/mfa/verify", serde_json::json!({ "code": code }));
        let response: VerifyResponse = decode(check(self.transport.execute(request).await?)?)?;
        Ok(BackupCodes(response.backup_codes))
    }
}
