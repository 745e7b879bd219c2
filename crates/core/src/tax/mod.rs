//! Statutory sales tax rates.
//!
//! Single source for the Quebec tax constants. Both the expense calculator
//! and the estimate totals engine read from here; duplicating these rates
//! per caller is how display and validation logic drift apart.

use rust_decimal::Decimal;

/// Federal GST rate (5%).
pub const GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Quebec QST rate (9.975%).
pub const QST_RATE: Decimal = Decimal::from_parts(9975, 0, 0, false, 5);
