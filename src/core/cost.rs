//! Cost estimation for a mesh roll - purchase cost, sale price, and margin.
//!
//! Composes the physical weight formulas from [`crate::core::physics`] with
//! the pricing table to produce a full [`CostBreakdown`] for one roll
//! request. Logistics cost is an input here, not a computation; see
//! [`crate::core::logistics`] for how it is derived.

use crate::core::material::Material;
use crate::core::physics::{self, PhysicsFactors};
use crate::core::{round1, round2};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Physical parameters of the mesh being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    /// Cell opening size (a), in millimetres
    pub cell_size_mm: f64,
    /// Wire thickness (d), in millimetres
    pub wire_thickness_mm: f64,
    /// Wire material
    pub material: Material,
}

/// Dimensions of one manufactured roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollDimensions {
    /// Roll length, in metres
    pub length_m: f64,
    /// Roll height, in metres
    pub height_m: f64,
}

impl RollDimensions {
    /// Mesh area of the roll in square metres.
    #[must_use]
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.height_m
    }
}

/// Price-per-kilogram table with an optional per-call override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialPricing {
    /// Configured price per kg for each material
    pub table: HashMap<Material, f64>,
    /// Custom price per kg for this call; a positive value takes precedence
    /// over the table
    pub override_price: Option<f64>,
}

impl MaterialPricing {
    /// Resolves the unit price for a material.
    ///
    /// A positive override wins. Otherwise the table entry for the material
    /// is used; a material missing from the table falls back to the
    /// Galvanized entry. The fallback is a deliberate, documented behavior
    /// (Galvanized is the default product line), not a silent default.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrice`] when the resolved price is zero or
    /// negative, or when neither the material nor the Galvanized fallback
    /// has a configured price.
    pub fn resolve(&self, material: Material) -> Result<f64> {
        if let Some(price) = self.override_price {
            if price > 0.0 {
                return Ok(price);
            }
            return Err(Error::InvalidPrice { value: price });
        }

        let configured = self
            .table
            .get(&material)
            .or_else(|| self.table.get(&Material::Galvanized))
            .copied()
            .ok_or(Error::InvalidPrice { value: 0.0 })?;

        if configured <= 0.0 {
            return Err(Error::InvalidPrice { value: configured });
        }
        Ok(configured)
    }
}

/// Full cost breakdown for one mesh roll request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Weight of one square metre of this mesh, in kg
    pub weight_per_m2: f64,
    /// Total roll weight, in kg
    pub total_weight_kg: f64,
    /// Material purchase cost
    pub purchase_cost: f64,
    /// Sale price after applying the margin
    pub sale_price: f64,
    /// Delivery cost passed in by the caller
    pub logistics_cost: f64,
    /// Net profit: sale price minus purchase and logistics cost
    pub profit: f64,
    /// Realized margin as a percentage of purchase cost
    pub real_margin_percent: f64,
}

/// Produces a complete cost breakdown for one mesh roll.
///
/// # Arguments
/// * `spec` - Mesh physical parameters
/// * `roll` - Roll dimensions
/// * `pricing` - Price table plus optional per-call override
/// * `margin_percent` - Target margin applied on top of purchase cost
/// * `logistics_cost` - Delivery cost for the roll (from the logistics
///   optimizer or entered directly)
/// * `factors` - Formula calibration factors
///
/// # Errors
/// Propagates [`Error::InvalidDimension`] from the weight formula and
/// returns [`Error::InvalidPrice`] when the resolved unit price is not
/// positive.
pub fn estimate(
    spec: &MeshSpec,
    roll: &RollDimensions,
    pricing: &MaterialPricing,
    margin_percent: f64,
    logistics_cost: f64,
    factors: &PhysicsFactors,
) -> Result<CostBreakdown> {
    let weight_per_m2 = physics::weight_per_area(
        spec.cell_size_mm,
        spec.wire_thickness_mm,
        spec.material,
        factors,
    )?;
    let total_weight_kg = round2(weight_per_m2 * roll.area_m2());

    let unit_price = pricing.resolve(spec.material)?;
    let purchase_cost = round2(total_weight_kg * unit_price);
    let sale_price = round2(purchase_cost * (1.0 + margin_percent / 100.0));
    let profit = round2(sale_price - purchase_cost - logistics_cost);

    // Zero purchase cost means zero margin, not a division fault.
    let real_margin_percent = if purchase_cost > 0.0 {
        round1(profit / purchase_cost * 100.0)
    } else {
        0.0
    };

    Ok(CostBreakdown {
        weight_per_m2,
        total_weight_kg,
        purchase_cost,
        sale_price,
        logistics_cost,
        profit,
        real_margin_percent,
    })
}
