//! Repositories over the back-office API.
//!
//! Each repository owns a transient cache of the entities it manages and
//! the client-side gates for them: input validation and workflow checks
//! run before a request is issued, and the cache is only updated once the
//! server confirms (except where an update is deliberately optimistic and
//! rolled back on failure).

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod account;
pub mod ambassador;
pub mod asset;
pub mod estimate;
pub mod expense;
pub mod settings;


pub use account::AccountRepository;
pub use ambassador::{AmbassadorRepository, PayoutResult};
pub use asset::{AssetRepository, DisposalOutcome, NewFixedAsset};
pub use estimate::EstimateRepository;
pub use expense::ExpenseRepository;
pub use settings::{SettingsRepository, AMBASSADOR_CONFIG_KEY};

/// Locks a cache mutex, recovering from poisoning.
///
/// Caches hold plain snapshots; a panic mid-update cannot leave them in
/// a state worse than stale, so the poisoned value is usable as-is.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
