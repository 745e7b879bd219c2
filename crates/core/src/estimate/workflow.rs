//! Estimate lifecycle transitions and duplication.

use uuid::Uuid;

use crate::estimate::error::EstimateError;
use crate::estimate::types::{Estimate, EstimateStatus, DEFAULT_VALIDITY_DAYS};

/// Stateless service for estimate lifecycle transitions.
pub struct EstimateWorkflow;

impl EstimateWorkflow {
    /// Send a draft estimate to the customer.
    ///
    /// Requires a non-empty customer email.
    pub fn send(
        current: EstimateStatus,
        customer_email: Option<&str>,
    ) -> Result<EstimateStatus, EstimateError> {
        if customer_email.is_none_or(|email| email.trim().is_empty()) {
            return Err(EstimateError::CustomerEmailRequired);
        }
        match current {
            EstimateStatus::Draft => Ok(EstimateStatus::Sent),
            _ => Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Sent,
            }),
        }
    }

    /// Record that the customer opened the estimate.
    pub fn mark_viewed(current: EstimateStatus) -> Result<EstimateStatus, EstimateError> {
        match current {
            EstimateStatus::Sent => Ok(EstimateStatus::Viewed),
            _ => Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Viewed,
            }),
        }
    }

    /// Accept an open estimate.
    pub fn accept(current: EstimateStatus) -> Result<EstimateStatus, EstimateError> {
        if current.is_open() {
            Ok(EstimateStatus::Accepted)
        } else {
            Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Accepted,
            })
        }
    }

    /// Decline an open estimate.
    pub fn decline(current: EstimateStatus) -> Result<EstimateStatus, EstimateError> {
        if current.is_open() {
            Ok(EstimateStatus::Declined)
        } else {
            Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Declined,
            })
        }
    }

    /// Expire an open estimate whose validity window lapsed.
    pub fn expire(current: EstimateStatus) -> Result<EstimateStatus, EstimateError> {
        if current.is_open() {
            Ok(EstimateStatus::Expired)
        } else {
            Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Expired,
            })
        }
    }

    /// Convert an accepted estimate into an invoice.
    ///
    /// One-way; refused when an invoice is already linked.
    pub fn convert(
        current: EstimateStatus,
        invoice_id: Option<Uuid>,
    ) -> Result<EstimateStatus, EstimateError> {
        if invoice_id.is_some() {
            return Err(EstimateError::AlreadyConverted);
        }
        match current {
            EstimateStatus::Accepted => Ok(EstimateStatus::Converted),
            _ => Err(EstimateError::InvalidTransition {
                from: current,
                to: EstimateStatus::Converted,
            }),
        }
    }

    /// Builds a fresh draft prefilled from an existing estimate.
    ///
    /// Items, customer fields and the global discount carry over; the
    /// validity window resets and any accepted/declined state, invoice
    /// link and status are cleared.
    #[must_use]
    pub fn duplicate(source: &Estimate) -> Estimate {
        Estimate {
            id: Uuid::new_v4(),
            customer_name: source.customer_name.clone(),
            customer_email: source.customer_email.clone(),
            items: source.items.clone(),
            discount_percent: source.discount_percent,
            validity_days: DEFAULT_VALIDITY_DAYS,
            subtotal: source.subtotal,
            discount_amount: source.discount_amount,
            tax_gst: source.tax_gst,
            tax_qst: source.tax_qst,
            total: source.total,
            status: EstimateStatus::Draft,
            invoice_id: None,
            accepted_at: None,
            declined_at: None,
        }
    }
}
