//! Core business logic for `MeshDesk`.
//!
//! Every function in this module tree is pure and synchronous: immutable
//! inputs in, plain value objects out, no I/O and no shared state. The
//! repository layer in [`crate::db`] produces the inputs; callers own any
//! caching ([`cache::QuoteCache`]) and flush it themselves when pricing or
//! formula factors change.

/// Caller-owned memoization for repeated cost estimates
pub mod cache;
/// Purchase cost, sale price, margin, and profit for a mesh roll
pub mod cost;
/// Monthly profit/loss aggregation over the cash-flow ledger
pub mod finance;
/// Trip-count, fuel, and delivery cost estimation
pub mod logistics;
/// The closed set of mesh wire materials
pub mod material;
/// Parametric weight and wire-length formulas
pub mod physics;
/// Reorder-point recommendations against minimum stock thresholds
pub mod procurement;
/// Combined quote building and plain-text summaries
pub mod report;

/// Rounds to 2 decimal places (currency and kilogram amounts).
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place (percentages).
#[must_use]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
