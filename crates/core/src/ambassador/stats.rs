//! Program-level aggregation over the ambassador list.
//!
//! All figures are recomputed from the in-memory list; the server is the
//! authority for the per-ambassador numbers themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ambassador::types::{Ambassador, AmbassadorStatus};
use boreal_shared::types::{percent_of, round2};

/// How many top performers the dashboard surfaces.
const TOP_PERFORMER_COUNT: usize = 5;

/// A ranked ambassador with their return on investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbassadorRanking {
    /// Ambassador ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// `(sales - earnings) / earnings * 100`, zero when earnings are zero.
    pub roi: Decimal,
}

/// One ambassador's share of program sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesShare {
    /// Ambassador ID.
    pub id: Uuid,
    /// `sales_i / Σ sales * 100`, zero when the program has no sales.
    pub percent: Decimal,
}

/// Aggregated program statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStats {
    /// Number of ambassadors in the list.
    pub ambassador_count: usize,
    /// Number of active ambassadors.
    pub active_count: usize,
    /// `round2(Σ total_sales)`.
    pub total_sales: Decimal,
    /// `round2(Σ total_earnings)`.
    pub total_commissions: Decimal,
    /// Program ROI; zero when no commissions were paid.
    pub program_roi: Decimal,
    /// Top performers by ROI, best first, at most five.
    pub top_performers: Vec<AmbassadorRanking>,
    /// Per-ambassador share of total sales, same order as the input.
    pub sales_share: Vec<SalesShare>,
}

impl ProgramStats {
    /// Computes all aggregates over the given list.
    #[must_use]
    pub fn compute(ambassadors: &[Ambassador]) -> Self {
        let total_sales = round2(ambassadors.iter().map(|a| a.total_sales).sum());
        let total_commissions = round2(ambassadors.iter().map(|a| a.total_earnings).sum());

        let program_roi = if total_commissions > Decimal::ZERO {
            percent_of(total_sales - total_commissions, total_commissions)
        } else {
            Decimal::ZERO
        };

        let mut top_performers: Vec<AmbassadorRanking> = ambassadors
            .iter()
            .map(|a| AmbassadorRanking {
                id: a.id,
                name: a.name.clone(),
                roi: roi_for(a),
            })
            .collect();
        top_performers.sort_by(|a, b| b.roi.cmp(&a.roi));
        top_performers.truncate(TOP_PERFORMER_COUNT);

        let sales_share = ambassadors
            .iter()
            .map(|a| SalesShare {
                id: a.id,
                percent: percent_of(a.total_sales, total_sales),
            })
            .collect();

        Self {
            ambassador_count: ambassadors.len(),
            active_count: ambassadors
                .iter()
                .filter(|a| a.status == AmbassadorStatus::Active)
                .count(),
            total_sales,
            total_commissions,
            program_roi,
            top_performers,
            sales_share,
        }
    }
}

/// Per-ambassador ROI with the zero-earnings guard.
fn roi_for(ambassador: &Ambassador) -> Decimal {
    if ambassador.total_earnings > Decimal::ZERO {
        percent_of(
            ambassador.total_sales - ambassador.total_earnings,
            ambassador.total_earnings,
        )
    } else {
        Decimal::ZERO
    }
}
