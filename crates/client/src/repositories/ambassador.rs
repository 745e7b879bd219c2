//! Ambassador program repository.
//!
//! Covers the admin dashboard: listing with a single network retry and
//! stale-response discard, optimistic status updates with rollback,
//! commission rate edits gated by local validation, and payout processing
//! guarded by a program-wide in-flight slot.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use boreal_core::ambassador::{
    validate_commission_rate, Ambassador, AmbassadorStatus, ProgramStats,
};
use boreal_shared::{AppError, AppResult};

use crate::http::{check, decode, with_retry, ApiRequest, Transport};
use crate::repositories::lock;
use crate::store::FetchGeneration;

/// Result of a processed payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResult {
    /// Amount paid out.
    pub amount: Decimal,
    /// Number of commission records settled.
    pub commissions_count: u32,
}

/// Repository for the ambassador program.
pub struct AmbassadorRepository {
    transport: Arc<dyn Transport>,
    cache: Mutex<Vec<Ambassador>>,
    generation: FetchGeneration,
    // One payout at a time across the whole program, not per ambassador.
    payout_in_flight: Mutex<Option<Uuid>>,
}

impl AmbassadorRepository {
    /// Creates a repository over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: Mutex::new(Vec::new()),
            generation: FetchGeneration::new(),
            payout_in_flight: Mutex::new(None),
        }
    }

    /// Returns the cached list snapshot.
    #[must_use]
    pub fn cached(&self) -> Vec<Ambassador> {
        lock(&self.cache).clone()
    }

    /// Fetches the ambassador list, optionally filtered by status.
    ///
    /// Retries once on a network error. If a newer fetch started while
    /// this one was in flight, the response is discarded and the cached
    /// snapshot is returned instead, so an older response can never
    /// overwrite fresher data.
    pub async fn list(&self, filter: Option<AmbassadorStatus>) -> AppResult<Vec<Ambassador>> {
        let generation = self.generation.next();

        let mut request = ApiRequest::get("/api/ambassadors");
        if let Some(status) = filter {
            request = request.query("status", status.as_str());
        }

        let result = with_retry(|| {
            let request = request.clone();
            async move {
                let response = self.transport.execute(request).await?;
                check(response)
            }
        })
        .await;

        if !self.generation.is_current(generation) {
            debug!(generation, "discarding stale ambassador list response");
            return Ok(self.cached());
        }

        let ambassadors: Vec<Ambassador> = decode(result?)?;
        *lock(&self.cache) = ambassadors.clone();
        Ok(ambassadors)
    }

    /// Fetches one ambassador and refreshes its cache entry.
    pub async fn get(&self, id: Uuid) -> AppResult<Ambassador> {
        let response = self
            .transport
            .execute(ApiRequest::get(format!("/api/ambassadors/{id}")))
            .await?;
        let ambassador: Ambassador = decode(check(response)?)?;
        self.upsert(&ambassador);
        Ok(ambassador)
    }

    /// Computes program statistics over the cached list.
    #[must_use]
    pub fn stats(&self) -> ProgramStats {
        ProgramStats::compute(&lock(&self.cache))
    }

    /// Changes an ambassador's status.
    ///
    /// Applied optimistically: the cache entry flips immediately and is
    /// rolled back to its previous status if the server rejects the
    /// change.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: AmbassadorStatus,
    ) -> AppResult<Ambassador> {
        let previous = {
            let mut cache = lock(&self.cache);
            let entry = cache
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| AppError::NotFound(format!("ambassador {id}")))?;
            let previous = entry.status;
            entry.status = new_status;
            previous
        };

        let request = ApiRequest::patch(
            format!("/api/ambassadors/{id}"),
            serde_json::json!({ "status": new_status.as_str() }),
        );
        match self.transport.execute(request).await.and_then(check) {
            Ok(body) => {
                let updated: Ambassador = decode(body)?;
                self.upsert(&updated);
                Ok(updated)
            }
            Err(err) => {
                warn!(%id, error = %err, "status update rejected, rolling back");
                let mut cache = lock(&self.cache);
                if let Some(entry) = cache.iter_mut().find(|a| a.id == id) {
                    entry.status = previous;
                }
                Err(err)
            }
        }
    }

    /// Sets an ambassador's commission rate.
    ///
    /// Out-of-range rates are rejected locally; no request is issued.
    pub async fn set_commission_rate(&self, id: Uuid, rate: Decimal) -> AppResult<Ambassador> {
        validate_commission_rate(rate).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::patch(
            format!("/api/ambassadors/{id}"),
            serde_json::json!({ "commissionRate": rate }),
        );
        let body = check(self.transport.execute(request).await?)?;
        let updated: Ambassador = decode(body)?;
        self.upsert(&updated);
        Ok(updated)
    }

    /// Processes a payout for one ambassador.
    ///
    /// A single payout may be in flight at a time program-wide; a second
    /// call while one is pending fails with `AppError::InFlight` without
    /// touching the network. The slot clears when the request settles,
    /// on success and on failure alike.
    pub async fn process_payout(&self, id: Uuid) -> AppResult<PayoutResult> {
        {
            let mut slot = lock(&self.payout_in_flight);
            if let Some(current) = *slot {
                return Err(AppError::InFlight(format!(
                    "payout for ambassador {current}"
                )));
            }
            *slot = Some(id);
        }

        let request = ApiRequest::post(
            "/api/ambassadors/payouts",
            serde_json::json!({ "ambassadorId": id }),
        );
        let result = self.transport.execute(request).await.and_then(check);
        *lock(&self.payout_in_flight) = None;

        let body = result?;
        let payout = body.get("payout").cloned().unwrap_or(body);
        let payout: PayoutResult = decode(payout)?;

        // The settled commissions are no longer pending.
        let mut cache = lock(&self.cache);
        if let Some(entry) = cache.iter_mut().find(|a| a.id == id) {
            entry.pending_payout = Decimal::ZERO;
        }
        Ok(payout)
    }

    fn upsert(&self, ambassador: &Ambassador) {
        let mut cache = lock(&self.cache);
        if let Some(entry) = cache.iter_mut().find(|a| a.id == ambassador.id) {
            *entry = ambassador.clone();
        } else {
            cache.push(ambassador.clone());
        }
    }
}
