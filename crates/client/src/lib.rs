//! Back-office API client for Boreal.
//!
//! This crate wires the domain logic from `boreal-core` to the REST API:
//! an HTTP transport with typed requests, per-entity repositories with
//! transient caches and local gates, fetch generation tracking, and a
//! small local store for values that must survive a failed server write.
//!
//! # Modules
//!
//! - `http` - Transport trait, `reqwest` implementation, retry helper
//! - `store` - Fetch generation counter for stale-response discard
//! - `local_store` - Filesystem-backed key-value persistence
//! - `repositories` - Per-entity repositories over the API

pub mod http;
pub mod local_store;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use boreal_shared::{AppConfig, AppResult};

use crate::http::{HttpTransport, Transport};
use crate::local_store::{FsStore, LocalStore};
use crate::repositories::{
    AccountRepository, AmbassadorRepository, AssetRepository, EstimateRepository,
    ExpenseRepository, SettingsRepository,
};

/// The full API client: one repository per entity over a shared transport.
pub struct ApiClient {
    /// Ambassador program repository.
    pub ambassadors: AmbassadorRepository,
    /// Expense repository.
    pub expenses: ExpenseRepository,
    /// Estimate repository.
    pub estimates: EstimateRepository,
    /// Fixed asset repository.
    pub assets: AssetRepository,
    /// Account settings repository.
    pub account: AccountRepository,
    /// Admin settings repository.
    pub settings: SettingsRepository,
}

impl ApiClient {
    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP transport cannot be built.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.api)?);
        let store: Arc<dyn LocalStore> = Arc::new(FsStore::new(&config.storage));
        Ok(Self::with_transport(transport, store))
    }

    /// Builds a client over an arbitrary transport and store.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            ambassadors: AmbassadorRepository::new(transport.clone()),
            expenses: ExpenseRepository::new(transport.clone()),
            estimates: EstimateRepository::new(transport.clone()),
            assets: AssetRepository::new(transport.clone()),
            account: AccountRepository::new(transport.clone(), store),
            settings: SettingsRepository::new(transport),
        }
    }
}
