//! Fixed asset repository.
//!
//! Listing, CCA calculation and disposal. Disposed assets are frozen:
//! every mutation is refused locally before a request is issued. The
//! server owns the ledger; the client validates inputs through the CCA
//! calculator and shows a gain/loss preview, but the stored figures are
//! always the server's.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use boreal_core::asset::{
    rate_for_class, AssetError, CcaCalculator, CcaClaim, CcaYearInput, FixedAsset,
};
use boreal_shared::{AppError, AppResult};

use crate::http::{check, decode, ApiRequest, Transport};
use crate::repositories::lock;

/// Input for creating a fixed asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedAsset {
    /// Display name.
    pub name: String,
    /// Original acquisition cost.
    pub acquisition_cost: Decimal,
    /// Expected residual value at end of life.
    pub residual_value: Decimal,
    /// Date the asset entered service.
    pub acquisition_date: NaiveDate,
    /// CCA class number, e.g. "10.1".
    pub cca_class: String,
    /// Rate override in percent; autofilled from the class table when
    /// absent.
    pub cca_rate: Option<Decimal>,
}

/// Outcome of a confirmed disposal.
#[derive(Debug, Clone)]
pub struct DisposalOutcome {
    /// Client-side `proceeds - book value` preview shown before confirming.
    pub preview_gain_loss: Decimal,
    /// The disposed asset with the server's authoritative gain/loss.
    pub asset: FixedAsset,
}

/// Repository for fixed assets.
pub struct AssetRepository {
    transport: Arc<dyn Transport>,
    cache: Mutex<HashMap<Uuid, FixedAsset>>,
}

impl AssetRepository {
    /// Creates a repository over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches all fixed assets.
    pub async fn list(&self) -> AppResult<Vec<FixedAsset>> {
        let response = self
            .transport
            .execute(ApiRequest::get("/api/accounting/fixed-assets"))
            .await?;
        let assets: Vec<FixedAsset> = decode(check(response)?)?;
        *lock(&self.cache) = assets.iter().map(|a| (a.id, a.clone())).collect();
        Ok(assets)
    }

    /// Creates a fixed asset.
    ///
    /// The rate comes from the input when given, otherwise from the
    /// statutory class table; an unknown class with no manual rate is
    /// rejected before any request is issued.
    pub async fn create(&self, input: &NewFixedAsset) -> AppResult<FixedAsset> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("asset name is required".to_string()));
        }
        if input.acquisition_cost < Decimal::ZERO || input.residual_value < Decimal::ZERO {
            return Err(AppError::Validation(
                "acquisition cost and residual value cannot be negative".to_string(),
            ));
        }
        if input.residual_value > input.acquisition_cost {
            return Err(AppError::Validation(
                "residual value cannot exceed acquisition cost".to_string(),
            ));
        }
        let rate = match input.cca_rate {
            Some(rate) => rate,
            None => rate_for_class(&input.cca_class).ok_or_else(|| {
                AppError::Validation(AssetError::UnknownClass(input.cca_class.clone()).to_string())
            })?,
        };
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            return Err(AppError::Validation(format!(
                "CCA rate must be between 0 and 100, got {rate}"
            )));
        }

        let mut body = serde_json::to_value(input)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        body["ccaRate"] = serde_json::json!(rate);

        let request = ApiRequest::post("/api/accounting/fixed-assets", body);
        let asset: FixedAsset = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(asset.id, asset.clone());
        Ok(asset)
    }

    /// Fetches one asset and refreshes its cache entry.
    pub async fn get(&self, id: Uuid) -> AppResult<FixedAsset> {
        let response = self
            .transport
            .execute(ApiRequest::get(format!("/api/accounting/fixed-assets/{id}")))
            .await?;
        let asset: FixedAsset = decode(check(response)?)?;
        lock(&self.cache).insert(asset.id, asset.clone());
        Ok(asset)
    }

    /// Records one fiscal year of CCA for an asset.
    ///
    /// The year's inputs run through the declining-balance calculator
    /// first, so invalid rates, negative amounts and disposed assets are
    /// all rejected before the request goes out. Returns the locally
    /// computed claim with the refreshed asset.
    pub async fn calculate_cca(
        &self,
        id: Uuid,
        fiscal_year: i32,
        input: CcaYearInput,
    ) -> AppResult<(CcaClaim, FixedAsset)> {
        self.require_mutable(id)?;
        let claim =
            CcaCalculator::claim_for_year(input).map_err(|e| AppError::Validation(e.to_string()))?;

        let mut body = serde_json::to_value(input)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        body["fiscalYear"] = serde_json::json!(fiscal_year);

        let request = ApiRequest::post(
            format!("/api/accounting/fixed-assets/{id}/calculate-cca"),
            body,
        );
        let asset: FixedAsset = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(asset.id, asset.clone());
        Ok((claim, asset))
    }

    /// Disposes of an asset for the given proceeds.
    pub async fn dispose(&self, id: Uuid, proceeds: Decimal) -> AppResult<DisposalOutcome> {
        if proceeds < Decimal::ZERO {
            return Err(AppError::Validation(
                "disposal proceeds cannot be negative".to_string(),
            ));
        }
        let cached = self.require_mutable(id)?;
        let preview_gain_loss = cached.disposal_preview(proceeds);

        let request = ApiRequest::post(
            format!("/api/accounting/fixed-assets/{id}/dispose"),
            serde_json::json!({ "proceeds": proceeds }),
        );
        let asset: FixedAsset = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(asset.id, asset.clone());
        Ok(DisposalOutcome {
            preview_gain_loss,
            asset,
        })
    }

    fn require_mutable(&self, id: Uuid) -> AppResult<FixedAsset> {
        let asset = lock(&self.cache)
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("fixed asset {id}")))?;
        if !asset.status.is_mutable() {
            return Err(AppError::BusinessRule(AssetError::AlreadyDisposed.to_string()));
        }
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ApiResponse, MockTransport};
    use boreal_core::asset::AssetStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn asset(id: Uuid, status: AssetStatus) -> FixedAsset {
        FixedAsset {
            id,
            name: "Delivery van".to_string(),
            acquisition_cost: dec!(30000),
            residual_value: dec!(2000),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            cca_class: "10".to_string(),
            cca_rate: dec!(30),
            current_book_value: dec!(14700),
            accumulated_depreciation: dec!(15300),
            half_year_rule_applied: true,
            aii_applied: false,
            super_deduction: false,
            status,
            disposal_proceeds: None,
            disposal_gain_loss: None,
            depreciation_entries: vec![],
        }
    }

    fn year_input() -> CcaYearInput {
        CcaYearInput {
            opening_ucc: dec!(14700),
            additions: dec!(0),
            rate: dec!(30),
            half_year_rule: false,
            aii: false,
            super_deduction: false,
        }
    }

    fn seeded(repo: &AssetRepository, entries: Vec<FixedAsset>) {
        *lock(&repo.cache) = entries.into_iter().map(|a| (a.id, a)).collect();
    }

    fn ok_body(value: serde_json::Value) -> AppResult<ApiResponse> {
        Ok(ApiResponse {
            status: 200,
            body: value,
        })
    }

    #[tokio::test]
    async fn test_create_autofills_rate_from_class_table() {
        let id = Uuid::new_v4();
        let body = serde_json::to_value(asset(id, AssetStatus::Active)).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                let sent = r.body.as_ref().unwrap();
                r.path == "/api/accounting/fixed-assets"
                    && sent["ccaRate"] == serde_json::json!("30")
                    && sent["ccaClass"] == serde_json::json!("10")
            })
            .times(1)
            .returning(move |_| ok_body(body.clone()));

        let repo = AssetRepository::new(Arc::new(transport));
        let input = NewFixedAsset {
            name: "Delivery van".to_string(),
            acquisition_cost: dec!(30000),
            residual_value: dec!(2000),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            cca_class: "10".to_string(),
            cca_rate: None,
        };
        let created = repo.create(&input).await.unwrap();
        assert_eq!(created.id, id);
        assert!(lock(&repo.cache).contains_key(&id));
    }

    #[tokio::test]
    async fn test_create_unknown_class_needs_manual_rate() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = AssetRepository::new(Arc::new(transport));
        let mut input = NewFixedAsset {
            name: "Custom rig".to_string(),
            acquisition_cost: dec!(5000),
            residual_value: dec!(0),
            acquisition_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            cca_class: "99".to_string(),
            cca_rate: None,
        };
        let err = repo.create(&input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err
            .to_string()
            .contains(&AssetError::UnknownClass("99".to_string()).to_string()));

        // A manual rate on an unlisted class is accepted.
        input.cca_rate = Some(dec!(25));
        let id = Uuid::new_v4();
        let body = serde_json::to_value(asset(id, AssetStatus::Active)).unwrap();
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.body.as_ref().unwrap()["ccaRate"] == serde_json::json!("25"))
            .times(1)
            .returning(move |_| ok_body(body.clone()));
        let repo = AssetRepository::new(Arc::new(transport));
        repo.create(&input).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_rejects_bad_amounts() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = AssetRepository::new(Arc::new(transport));
        let input = NewFixedAsset {
            name: "Press".to_string(),
            acquisition_cost: dec!(1000),
            residual_value: dec!(1500),
            acquisition_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            cca_class: "8".to_string(),
            cca_rate: None,
        };
        assert!(matches!(
            repo.create(&input).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_cca_posts_and_returns_local_claim() {
        let id = Uuid::new_v4();
        let body = serde_json::to_value(asset(id, AssetStatus::Active)).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(move |r| {
                r.path == format!("/api/accounting/fixed-assets/{id}/calculate-cca")
                    && r.body.as_ref().unwrap()["fiscalYear"] == serde_json::json!(2026)
            })
            .times(1)
            .returning(move |_| ok_body(body.clone()));

        let repo = AssetRepository::new(Arc::new(transport));
        seeded(&repo, vec![asset(id, AssetStatus::Active)]);

        let (claim, _) = repo.calculate_cca(id, 2026, year_input()).await.unwrap();
        assert_eq!(claim.cca_claimed, dec!(4410));
        assert_eq!(claim.closing_ucc, dec!(10290));
    }

    #[tokio::test]
    async fn test_disposed_asset_is_frozen() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = AssetRepository::new(Arc::new(transport));
        seeded(&repo, vec![asset(id, AssetStatus::Disposed)]);

        let err = repo.calculate_cca(id, 2026, year_input()).await.unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
        assert!(err.to_string().contains(&AssetError::AlreadyDisposed.to_string()));
        assert!(matches!(
            repo.dispose(id, dec!(1000)).await.unwrap_err(),
            AppError::BusinessRule(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_rate_never_reaches_transport() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = AssetRepository::new(Arc::new(transport));
        seeded(&repo, vec![asset(id, AssetStatus::Active)]);

        let mut input = year_input();
        input.rate = dec!(120);
        assert!(matches!(
            repo.calculate_cca(id, 2026, input).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_dispose_carries_preview_and_server_figure() {
        let id = Uuid::new_v4();
        let mut disposed = asset(id, AssetStatus::Disposed);
        disposed.disposal_proceeds = Some(dec!(16000));
        disposed.disposal_gain_loss = Some(dec!(1300));
        let body = serde_json::to_value(disposed).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(move |_| ok_body(body.clone()));

        let repo = AssetRepository::new(Arc::new(transport));
        seeded(&repo, vec![asset(id, AssetStatus::Active)]);

        let outcome = repo.dispose(id, dec!(16000)).await.unwrap();
        // Preview is proceeds minus book value; server figure travels on
        // the asset itself.
        assert_eq!(outcome.preview_gain_loss, dec!(1300));
        assert_eq!(outcome.asset.disposal_gain_loss, Some(dec!(1300)));
        assert_eq!(outcome.asset.status, AssetStatus::Disposed);
    }

    #[tokio::test]
    async fn test_negative_proceeds_rejected() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = AssetRepository::new(Arc::new(transport));
        seeded(&repo, vec![asset(id, AssetStatus::Active)]);

        assert!(matches!(
            repo.dispose(id, dec!(-1)).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
