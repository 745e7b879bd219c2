//! Expense repository.
//!
//! CRUD plus the reimbursement workflow. Draft-only editing is enforced
//! locally before any request, workflow transitions run through the
//! state machine as a local gate, and the cache is only updated after
//! the server confirms.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use boreal_core::expense::{
    validate_draft, Expense, ExpenseDraft, ExpenseError, ExpenseStatus, ExpenseTransition,
    ExpenseWorkflow, TaxBreakdown,
};
use boreal_shared::{AppError, AppResult};

use crate::http::{check, decode, ApiRequest, Transport};
use crate::repositories::lock;

/// Repository for expenses.
pub struct ExpenseRepository {
    transport: Arc<dyn Transport>,
    cache: Mutex<HashMap<Uuid, Expense>>,
}

impl ExpenseRepository {
    /// Creates a repository over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches all expenses.
    pub async fn list(&self) -> AppResult<Vec<Expense>> {
        let response = self
            .transport
            .execute(ApiRequest::get("/api/accounting/expenses"))
            .await?;
        let expenses: Vec<Expense> = decode(check(response)?)?;
        *lock(&self.cache) = expenses.iter().map(|e| (e.id, e.clone())).collect();
        Ok(expenses)
    }

    /// Fetches one expense and refreshes its cache entry.
    pub async fn get(&self, id: Uuid) -> AppResult<Expense> {
        let response = self
            .transport
            .execute(ApiRequest::get(format!("/api/accounting/expenses/{id}")))
            .await?;
        let expense: Expense = decode(check(response)?)?;
        lock(&self.cache).insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Creates an expense from a validated draft.
    ///
    /// The GST/QST breakdown is derived from the subtotal locally and
    /// sent with the draft, so the figures the user reviewed are the
    /// figures stored.
    pub async fn create(&self, draft: &ExpenseDraft, expense_date: NaiveDate) -> AppResult<Expense> {
        validate_draft(draft).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::post(
            "/api/accounting/expenses",
            Self::draft_body(draft, expense_date),
        );
        let expense: Expense = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Updates a draft expense.
    ///
    /// Only drafts are editable; the gate runs against the cached status
    /// before any request is issued.
    pub async fn update(
        &self,
        id: Uuid,
        draft: &ExpenseDraft,
        expense_date: NaiveDate,
    ) -> AppResult<Expense> {
        self.require_editable(id)?;
        validate_draft(draft).map_err(|e| AppError::Validation(e.to_string()))?;

        let request = ApiRequest::put(
            format!("/api/accounting/expenses/{id}"),
            Self::draft_body(draft, expense_date),
        );
        let expense: Expense = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Deletes a draft expense.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.require_editable(id)?;

        let request = ApiRequest::delete(format!("/api/accounting/expenses/{id}"));
        check(self.transport.execute(request).await?)?;
        lock(&self.cache).remove(&id);
        Ok(())
    }

    /// Submits a draft for approval.
    pub async fn submit(&self, id: Uuid) -> AppResult<Expense> {
        let transition = ExpenseWorkflow::submit(self.status_of(id)?)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;
        self.apply_transition(id, transition).await
    }

    /// Approves a submitted expense.
    pub async fn approve(&self, id: Uuid) -> AppResult<Expense> {
        let transition = ExpenseWorkflow::approve(self.status_of(id)?)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;
        self.apply_transition(id, transition).await
    }

    /// Rejects a submitted expense with a reason.
    pub async fn reject(&self, id: Uuid, reason: String) -> AppResult<Expense> {
        let transition = ExpenseWorkflow::reject(self.status_of(id)?, reason)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;
        self.apply_transition(id, transition).await
    }

    /// Marks an approved expense reimbursed.
    pub async fn mark_reimbursed(&self, id: Uuid) -> AppResult<Expense> {
        let transition = ExpenseWorkflow::mark_reimbursed(self.status_of(id)?)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;
        self.apply_transition(id, transition).await
    }

    /// Returns a rejected expense to draft.
    pub async fn resubmit(&self, id: Uuid) -> AppResult<Expense> {
        let transition = ExpenseWorkflow::resubmit(self.status_of(id)?)
            .map_err(|e| AppError::BusinessRule(e.to_string()))?;
        self.apply_transition(id, transition).await
    }

    async fn apply_transition(&self, id: Uuid, transition: ExpenseTransition) -> AppResult<Expense> {
        let mut body = serde_json::json!({ "status": transition.new_status.as_str() });
        if let Some(reason) = &transition.reason {
            body["rejectionReason"] = serde_json::Value::String(reason.clone());
        }

        let request = ApiRequest::patch(format!("/api/accounting/expenses/{id}"), body);
        let expense: Expense = decode(check(self.transport.execute(request).await?)?)?;
        lock(&self.cache).insert(expense.id, expense.clone());
        Ok(expense)
    }

    fn status_of(&self, id: Uuid) -> AppResult<ExpenseStatus> {
        lock(&self.cache)
            .get(&id)
            .map(|e| e.status)
            .ok_or_else(|| AppError::NotFound(format!("expense {id}")))
    }

    fn require_editable(&self, id: Uuid) -> AppResult<()> {
        let status = self.status_of(id)?;
        if !status.is_editable() {
            return Err(AppError::BusinessRule(
                ExpenseError::NotEditable(status).to_string(),
            ));
        }
        Ok(())
    }

    fn draft_body(draft: &ExpenseDraft, expense_date: NaiveDate) -> serde_json::Value {
        // A manual GST/QST edit is kept as entered; only the missing
        // fields are derived and only the total is recomputed.
        let derived = TaxBreakdown::from_subtotal(draft.subtotal, draft.tax_other);
        let taxes = if draft.tax_gst.is_some() || draft.tax_qst.is_some() {
            TaxBreakdown::with_taxes(
                draft.subtotal,
                draft.tax_gst.unwrap_or(derived.gst),
                draft.tax_qst.unwrap_or(derived.qst),
                draft.tax_other,
            )
        } else {
            derived
        };
        serde_json::json!({
            "description": draft.description,
            "category": draft.category,
            "vendor": draft.vendor,
            "expenseDate": expense_date,
            "subtotal": taxes.subtotal,
            "taxGst": taxes.gst,
            "taxQst": taxes.qst,
            "taxOther": taxes.other,
            "total": taxes.total,
        })
    }
}
