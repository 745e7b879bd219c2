//! Ambassador program logic for Boreal.
//!
//! This module implements the commission tier table, program-level
//! aggregation (sales, commissions, ROI, sales share), commission rate
//! bounds, and the program configuration schema.
//!
//! # Modules
//!
//! - `types` - Ambassador domain types (tier, status, DTO)
//! - `stats` - Aggregation over the in-memory ambassador list
//! - `validation` - Commission rate bounds
//! - `config` - Program configuration blob schema
//! - `error` - Ambassador-specific error types

pub mod config;
pub mod error;
pub mod stats;
pub mod types;
pub mod validation;

pub use config::ProgramConfig;
pub use error::AmbassadorError;
pub use stats::{AmbassadorRanking, ProgramStats, SalesShare};
pub use types::{Ambassador, AmbassadorStatus, Tier};
pub use validation::validate_commission_rate;
