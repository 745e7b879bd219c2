//! Shared numeric types and helpers.

pub mod rounding;

pub use rounding::{percent_of, round2};
