//! CCA class table and declining-balance calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::error::AssetError;
use boreal_shared::types::round2;

/// A CCA class with its statutory declining-balance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcaClass {
    /// Class number as printed on Schedule 8, e.g. "10.1".
    pub number: &'static str,
    /// Declining-balance rate in percent.
    pub rate: Decimal,
    /// What the class covers.
    pub description: &'static str,
}

const fn pct(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

/// Statutory CCA classes.
///
/// Single source for the class/rate table; the asset form autofill and
/// any rate validation both read from here.
pub const CCA_CLASSES: &[CcaClass] = &[
    CcaClass {
        number: "1",
        rate: pct(4),
        description: "Buildings acquired after 1987",
    },
    CcaClass {
        number: "8",
        rate: pct(20),
        description: "Furniture, fixtures and machinery",
    },
    CcaClass {
        number: "10",
        rate: pct(30),
        description: "Motor vehicles and general-purpose hardware",
    },
    CcaClass {
        number: "10.1",
        rate: pct(30),
        description: "Passenger vehicles over the cost ceiling",
    },
    CcaClass {
        number: "12",
        rate: pct(100),
        description: "Tools, dies and software under the cost limit",
    },
    CcaClass {
        number: "16",
        rate: pct(40),
        description: "Taxis and freight trucks",
    },
    CcaClass {
        number: "43",
        rate: pct(30),
        description: "Manufacturing and processing equipment",
    },
    CcaClass {
        number: "50",
        rate: pct(55),
        description: "Computer hardware and systems software",
    },
    CcaClass {
        number: "53",
        rate: pct(50),
        description: "M&P machinery acquired 2016-2025",
    },
    CcaClass {
        number: "54",
        rate: pct(30),
        description: "Zero-emission vehicles",
    },
    CcaClass {
        number: "55",
        rate: pct(40),
        description: "Zero-emission taxis and rental vehicles",
    },
];

/// Looks up the statutory rate for a class number.
#[must_use]
pub fn rate_for_class(number: &str) -> Option<Decimal> {
    CCA_CLASSES
        .iter()
        .find(|class| class.number == number)
        .map(|class| class.rate)
}

/// Input for one fiscal year of CCA.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcaYearInput {
    /// UCC carried in from the prior year.
    pub opening_ucc: Decimal,
    /// Net additions during the year.
    pub additions: Decimal,
    /// Declining-balance rate in percent.
    pub rate: Decimal,
    /// First-year half-year rule: only half of net additions enter the base.
    pub half_year_rule: bool,
    /// Accelerated Investment Incentive: additions enter at 1.5x and the
    /// half-year halving is suspended.
    pub aii: bool,
    /// Immediate expensing: the full addition is claimed in year one.
    pub super_deduction: bool,
}

/// Result of one fiscal year of CCA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcaClaim {
    /// The base the rate was applied to.
    pub claim_base: Decimal,
    /// CCA claimed, capped at the UCC available.
    pub cca_claimed: Decimal,
    /// `opening_ucc + additions - cca_claimed`.
    pub closing_ucc: Decimal,
}

/// Stateless declining-balance calculator.
pub struct CcaCalculator;

impl CcaCalculator {
    /// Computes the claim for one fiscal year.
    ///
    /// Flag precedence: super-deduction overrides AII, AII overrides the
    /// half-year rule. The claim is rounded to cents and capped at the
    /// UCC available (`opening + additions`).
    ///
    /// # Errors
    ///
    /// Returns `AssetError::InvalidRate` when the rate is outside [0, 100]
    /// and `AssetError::NegativeAmount` for negative UCC or additions.
    pub fn claim_for_year(input: CcaYearInput) -> Result<CcaClaim, AssetError> {
        if input.rate < Decimal::ZERO || input.rate > Decimal::ONE_HUNDRED {
            return Err(AssetError::InvalidRate(input.rate));
        }
        if input.opening_ucc < Decimal::ZERO || input.additions < Decimal::ZERO {
            return Err(AssetError::NegativeAmount);
        }

        let rate = input.rate / Decimal::ONE_HUNDRED;
        let available = input.opening_ucc + input.additions;

        let (claim_base, raw_claim) = if input.super_deduction {
            // Immediate expensing: full addition plus the normal claim on
            // the carried-in balance.
            let base = input.opening_ucc;
            (base, input.additions + base * rate)
        } else if input.aii {
            let half = Decimal::new(15, 1); // 1.5
            let base = input.opening_ucc + input.additions * half;
            (base, base * rate)
        } else if input.half_year_rule {
            let half = Decimal::new(5, 1); // 0.5
            let base = input.opening_ucc + input.additions * half;
            (base, base * rate)
        } else {
            let base = available;
            (base, base * rate)
        };

        let cca_claimed = round2(raw_claim).min(available);
        Ok(CcaClaim {
            claim_base,
            cca_claimed,
            closing_ucc: available - cca_claimed,
        })
    }
}
