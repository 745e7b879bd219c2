//! Admin settings repository.
//!
//! The ambassador program configuration lives JSON-encoded inside the
//! value of one settings key. It is schema-validated on read and before
//! every write; an unreadable or invalid stored blob degrades to the
//! defaults instead of breaking the settings page.

use std::sync::Arc;

use tracing::debug;

use boreal_core::ambassador::ProgramConfig;
use boreal_shared::{AppError, AppResult};

use crate::http::{check, ApiRequest, Transport};

/// Settings key holding the ambassador program configuration.
pub const AMBASSADOR_CONFIG_KEY: &str = "ambassador_program_config";

/// Repository for admin settings.
pub struct SettingsRepository {
    transport: Arc<dyn Transport>,
}

impl SettingsRepository {
    /// Creates a repository over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Loads and validates the ambassador program configuration.
    pub async fn load(&self) -> AppResult<ProgramConfig> {
        let request = ApiRequest::get("/api/admin/settings").query("key", AMBASSADOR_CONFIG_KEY);
        let body = check(self.transport.execute(request).await?)?;
        let blob = body
            .get("value")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                AppError::Deserialization("settings value missing or not a string".to_string())
            })?;
        ProgramConfig::from_json(blob).map_err(|e| AppError::Deserialization(e.to_string()))
    }

    /// Loads the configuration, falling back to the defaults.
    ///
    /// Any failure (network, missing key, invalid blob) degrades to
    /// `ProgramConfig::default()` so the program keeps working with its
    /// documented defaults.
    pub async fn load_or_default(&self) -> ProgramConfig {
        match self.load().await {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "using default ambassador program config");
                ProgramConfig::default()
            }
        }
    }

    /// Validates and saves the ambassador program configuration.
    pub async fn save(&self, config: &ProgramConfig) -> AppResult<()> {
        let blob = config
            .to_json()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::patch(
            "/api/admin/settings",
            serde_json::json!({ "key": AMBASSADOR_CONFIG_KEY, "value": blob }),
        );
        check(self.transport.execute(request).await?)?;
        Ok(())
    }
}
