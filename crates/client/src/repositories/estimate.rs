//! Estimate repository.
//!
//! CRUD with draft-only editing, the lifecycle actions (send, convert),
//! and duplication. Totals are recomputed locally through the staged
//! rounding engine before every save so the payload matches what the
//! user saw on screen.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use boreal_core::estimate::{
    validate_estimate, Estimate, EstimateError, EstimateTotals, EstimateWorkflow,
};
use boreal_shared::{AppError, AppResult};

use crate::http::{check, decode, ApiRequest, Transport};
use crate::repositories::lock;

/// Repository for estimates.
pub struct EstimateRepository {
    transport: Arc<dyn Transport>,
    cache: Mutex<HashMap<Uuid, Estimate>>,
}

impl EstimateRepository {
    /// Creates a repository over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches all estimates.
    pub async fn list(&self) -> AppResult<Vec<Estimate>> {
        let response = self
            .transport
            .execute(ApiRequest::get("/api/accounting/estimates"))
            .await?;
        let estimates: Vec<Estimate> = decode(check(response)?)?;
        *lock(&self.cache) = estimates.iter().map(|e| (e.id, e.clone())).collect();
        Ok(estimates)
    }

    /// Fetches one estimate and refreshes its cache entry.
    pub async fn get(&self, id: Uuid) -> AppResult<Estimate> {
        let response = self
            .transport
            .execute(ApiRequest::get(format!("/api/accounting/estimates/{id}")))
            .await?;
        let estimate: Estimate = decode(check(response)?)?;
        lock(&self.cache).insert(estimate.id, estimate.clone());
        Ok(estimate)
    }

    /// Creates a new estimate after validation, with totals recomputed.
    pub async fn create(&self, estimate: &Estimate) -> AppResult<Estimate> {
        let estimate = Self::with_totals(estimate);
        validate_estimate(&estimate).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::post(
            "/api/accounting/estimates",
            serde_json::to_value(&estimate).map_err(|e| AppError::Deserialization(e.to_string()))?,
        );
        let created: Estimate = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(created.id, created.clone());
        Ok(created)
    }

    /// Updates a draft estimate.
    pub async fn update(&self, estimate: &Estimate) -> AppResult<Estimate> {
        self.require_editable(estimate.id)?;
        let estimate = Self::with_totals(estimate);
        validate_estimate(&estimate).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::put(
            format!("/api/accounting/estimates/{}", estimate.id),
            serde_json::to_value(&estimate).map_err(|e| AppError::Deserialization(e.to_string()))?,
        );
        let updated: Estimate = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// Deletes a draft estimate.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.require_editable(id)?;

        let request = ApiRequest::delete(format!("/api/accounting/estimates/{id}"));
        check(self.transport.execute(request).await?)?;
        lock(&self.cache).remove(&id);
        Ok(())
    }

    /// Sends a draft estimate to the customer.
    ///
    /// Requires a customer email; both the email and the draft status are
    /// checked locally before the request goes out.
    pub async fn send(&self, id: Uuid) -> AppResult<Estimate> {
        let cached = self.cached_estimate(id)?;
        EstimateWorkflow::send(cached.status, cached.customer_email.as_deref())
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;

        let request = ApiRequest::post(
            format!("/api/accounting/estimates/{id}/send"),
            serde_json::json!({}),
        );
        let sent: Estimate = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(sent.id, sent.clone());
        Ok(sent)
    }

    /// Converts an accepted estimate into an invoice.
    ///
    /// One-way: refused locally when an invoice is already linked.
    pub async fn convert(&self, id: Uuid) -> AppResult<Estimate> {
        let cached = self.cached_estimate(id)?;
        EstimateWorkflow::convert(cached.status, cached.invoice_id)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;

        let request = ApiRequest::post(
            format!("/api/accounting/estimates/{id}/convert"),
            serde_json::json!({}),
        );
        let converted: Estimate = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(converted.id, converted.clone());
        Ok(converted)
    }

    /// Duplicates an estimate into a fresh draft.
    pub async fn duplicate(&self, id: Uuid) -> AppResult<Estimate> {
        let source = self.cached_estimate(id)?;
        let copy = EstimateWorkflow::duplicate(&source);

        let request = ApiRequest::post(
            "/api/accounting/estimates",
            serde_json::to_value(&copy).map_err(|e| AppError::Deserialization(e.to_string()))?,
        );
        let created: Estimate = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(created.id, created.clone());
        Ok(created)
    }

    fn with_totals(estimate: &Estimate) -> Estimate {
        let totals = EstimateTotals::compute(&estimate.items, estimate.discount_percent);
        Estimate {
            subtotal: totals.subtotal,
            discount_amount: totals.discount_amount,
            tax_gst: totals.gst,
            tax_qst: totals.qst,
            total: totals.total,
            ..estimate.clone()
        }
    }

    fn cached_estimate(&self, id: Uuid) -> AppResult<Estimate> {
        lock(&self.cache)
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("estimate {id}")))
    }

    fn require_editable(&self, id: Uuid) -> AppResult<()> {
        let status = self.cached_estimate(id)?.status;
        if !status.is_editable() {
            return Err(AppError::BusinessRule(
                EstimateError::NotEditable(status).to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ApiResponse, Method, MockTransport};
    use boreal_core::estimate::{EstimateStatus, LineItem};
    use rust_decimal_macros::dec;

    fn estimate(id: Uuid, status: EstimateStatus) -> Estimate {
        Estimate {
            id,
            customer_name: "Acme Inc".to_string(),
            customer_email: Some("billing@acme.example".to_string()),
            items: vec![
                LineItem {
                    product_name: "Widget".to_string(),
                    quantity: dec!(2),
                    unit_price: dec!(10),
                    discount_percent: dec!(0),
                },
                LineItem {
                    product_name: "Gadget".to_string(),
                    quantity: dec!(1),
                    unit_price: dec!(5),
                    discount_percent: dec!(50),
                },
            ],
            discount_percent: dec!(10),
            validity_days: 30,
            subtotal: dec!(0),
            discount_amount: dec!(0),
            tax_gst: dec!(0),
            tax_qst: dec!(0),
            total: dec!(0),
            status,
            invoice_id: None,
            accepted_at: None,
            declined_at: None,
        }
    }

    fn seeded(repo: &EstimateRepository, entries: Vec<Estimate>) {
        *lock(&repo.cache) = entries.into_iter().map(|e| (e.id, e)).collect();
    }

    fn ok_body(value: serde_json::Value) -> AppResult<ApiResponse> {
        Ok(ApiResponse {
            status: 200,
            body: value,
        })
    }

    #[tokio::test]
    async fn test_create_recomputes_totals_before_send() {
        let id = Uuid::new_v4();
        let body = serde_json::to_value(estimate(id, EstimateStatus::Draft)).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                let body = r.body.as_ref().unwrap();
                let field = |name: &str| -> rust_decimal::Decimal {
                    body[name].as_str().unwrap().parse().unwrap()
                };
                r.method == Method::Post
                    && field("subtotal") == dec!(22.50)
                    && field("discountAmount") == dec!(2.25)
                    && field("taxGst") == dec!(1.01)
                    && field("taxQst") == dec!(2.02)
                    && field("total") == dec!(23.28)
            })
            .times(1)
            .returning(move |_| ok_body(body.clone()));

        let repo = EstimateRepository::new(Arc::new(transport));
        repo.create(&estimate(id, EstimateStatus::Draft)).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_estimate_never_reaches_transport() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = EstimateRepository::new(Arc::new(transport));
        let mut bad = estimate(Uuid::new_v4(), EstimateStatus::Draft);
        bad.customer_name = String::new();
        assert!(matches!(
            repo.create(&bad).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_sent_estimate_cannot_be_edited() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = EstimateRepository::new(Arc::new(transport));
        seeded(&repo, vec![estimate(id, EstimateStatus::Sent)]);

        let err = repo.update(&estimate(id, EstimateStatus::Sent)).await.unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
        assert!(err
            .to_string()
            .contains(&EstimateError::NotEditable(EstimateStatus::Sent).to_string()));
        assert!(matches!(
            repo.delete(id).await.unwrap_err(),
            AppError::BusinessRule(_)
        ));
    }

    #[tokio::test]
    async fn test_send_requires_email() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = EstimateRepository::new(Arc::new(transport));
        let mut no_email = estimate(id, EstimateStatus::Draft);
        no_email.customer_email = None;
        seeded(&repo, vec![no_email]);

        assert!(matches!(
            repo.send(id).await.unwrap_err(),
            AppError::BusinessRule(_)
        ));
    }

    #[tokio::test]
    async fn test_send_posts_to_send_endpoint() {
        let id = Uuid::new_v4();
        let body = serde_json::to_value(estimate(id, EstimateStatus::Sent)).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(move |r| r.path == format!("/api/accounting/estimates/{id}/send"))
            .times(1)
            .returning(move |_| ok_body(body.clone()));

        let repo = EstimateRepository::new(Arc::new(transport));
        seeded(&repo, vec![estimate(id, EstimateStatus::Draft)]);

        let sent = repo.send(id).await.unwrap();
        assert_eq!(sent.status, EstimateStatus::Sent);
    }

    #[tokio::test]
    async fn test_convert_refused_when_invoice_linked() {
        let id = Uuid::new_v4();
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let repo = EstimateRepository::new(Arc::new(transport));
        let mut converted = estimate(id, EstimateStatus::Accepted);
        converted.invoice_id = Some(Uuid::new_v4());
        seeded(&repo, vec![converted]);

        assert!(matches!(
            repo.convert(id).await.unwrap_err(),
            AppError::BusinessRule(_)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_posts_fresh_draft() {
        let id = Uuid::new_v4();
        let mut source = estimate(id, EstimateStatus::Accepted);
        source.invoice_id = Some(Uuid::new_v4());

        let created = serde_json::to_value(estimate(Uuid::new_v4(), EstimateStatus::Draft)).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(move |r| {
                let body = r.body.as_ref().unwrap();
                r.method == Method::Post
                    && body["status"] == serde_json::json!("DRAFT")
                    && body["invoiceId"] == serde_json::Value::Null
                    && body["id"] != serde_json::json!(id.to_string())
            })
            .times(1)
            .returning(move |_| ok_body(created.clone()));

        let repo = EstimateRepository::new(Arc::new(transport));
        seeded(&repo, vec![source]);
        repo.duplicate(id).await.unwrap();
    }
}
