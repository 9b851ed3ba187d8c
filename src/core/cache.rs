//! Caller-owned memoization for repeated cost estimates.
//!
//! The dashboard recomputes the same quote every time a slider is touched,
//! so identical parameter tuples show up constantly. [`QuoteCache`] is an
//! explicit, injectable map from the full request tuple to its
//! [`CostBreakdown`] - never a process-wide global. Because the estimators
//! are pure, entries never go stale on their own; the owner must call
//! [`QuoteCache::invalidate`] whenever the pricing table or physics factors
//! change, since those sit outside the key.

use crate::core::cost::{CostBreakdown, MeshSpec, RollDimensions};
use crate::errors::Result;
use std::collections::HashMap;

/// Cache key: the full per-request parameter tuple. Float fields are keyed
/// by bit pattern, which is exactly the identity the pure estimators see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    cell_size_bits: u64,
    wire_thickness_bits: u64,
    material: crate::core::material::Material,
    length_bits: u64,
    height_bits: u64,
    margin_bits: u64,
    logistics_bits: u64,
    override_bits: Option<u64>,
}

impl QuoteKey {
    /// Builds a key from one estimate request.
    #[must_use]
    pub fn new(
        spec: &MeshSpec,
        roll: &RollDimensions,
        margin_percent: f64,
        logistics_cost: f64,
        override_price: Option<f64>,
    ) -> Self {
        Self {
            cell_size_bits: spec.cell_size_mm.to_bits(),
            wire_thickness_bits: spec.wire_thickness_mm.to_bits(),
            material: spec.material,
            length_bits: roll.length_m.to_bits(),
            height_bits: roll.height_m.to_bits(),
            margin_bits: margin_percent.to_bits(),
            logistics_bits: logistics_cost.to_bits(),
            override_bits: override_price.map(f64::to_bits),
        }
    }
}

/// Explicit memoization map for cost estimates, owned by the caller.
#[derive(Debug, Default)]
pub struct QuoteCache {
    entries: HashMap<QuoteKey, CostBreakdown>,
}

impl QuoteCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached breakdown for the given key.
    #[must_use]
    pub fn get(&self, key: &QuoteKey) -> Option<CostBreakdown> {
        self.entries.get(key).copied()
    }

    /// Stores a breakdown under the given key.
    pub fn insert(&mut self, key: QuoteKey, breakdown: CostBreakdown) {
        self.entries.insert(key, breakdown);
    }

    /// Returns the cached breakdown for `key`, computing and storing it via
    /// `compute` on a miss. Errors from `compute` are propagated and nothing
    /// is cached for that key.
    pub fn get_or_try_insert_with<F>(&mut self, key: QuoteKey, compute: F) -> Result<CostBreakdown>
    where
        F: FnOnce() -> Result<CostBreakdown>,
    {
        if let Some(cached) = self.entries.get(&key) {
            return Ok(*cached);
        }
        let breakdown = compute()?;
        self.entries.insert(key, breakdown);
        Ok(breakdown)
    }

    /// Drops every cached entry. Must be called whenever the pricing table
    /// or physics factors change, since those are not part of the key.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
