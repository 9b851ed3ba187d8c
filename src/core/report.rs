//! Combined quote building and plain-text summaries.
//!
//! A "quote" is the dashboard's headline computation for one roll request:
//! cost breakdown, delivery estimate, and the physical wire metrics side by
//! side. The formatters return plain strings; anything fancier (charts,
//! spreadsheets, PDF) is the presentation layer's job.

use crate::core::cost::{self, CostBreakdown, MaterialPricing, MeshSpec, RollDimensions};
use crate::core::finance::ProfitLossRow;
use crate::core::logistics::{self, FleetConfig, LogisticsResult};
use crate::core::physics::{self, PhysicsFactors};
use crate::core::procurement::ReorderRecommendation;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one roll request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    /// The mesh being quoted
    pub spec: MeshSpec,
    /// The roll dimensions
    pub roll: RollDimensions,
    /// Mesh area of the roll, in m²
    pub area_m2: f64,
    /// Total wire length woven into the roll, in whole metres
    pub wire_length_m: i64,
    /// Cost breakdown (logistics cost included)
    pub breakdown: CostBreakdown,
    /// Delivery estimate for the roll
    pub logistics: LogisticsResult,
}

/// Builds a complete quote: runs the logistics optimizer for the roll's
/// weight, feeds its total cost into the cost estimator, and collects the
/// wire metrics.
///
/// # Arguments
/// * `spec` - Mesh physical parameters
/// * `roll` - Roll dimensions
/// * `pricing` - Price table plus optional override
/// * `margin_percent` - Target sale margin
/// * `distance_km` - Delivery distance
/// * `fleet` - Fleet parameters
/// * `factors` - Formula calibration factors
///
/// # Errors
/// Propagates validation errors from the physics, cost, and logistics
/// calculators.
pub fn build_quote(
    spec: &MeshSpec,
    roll: &RollDimensions,
    pricing: &MaterialPricing,
    margin_percent: f64,
    distance_km: f64,
    fleet: &FleetConfig,
    factors: &PhysicsFactors,
) -> Result<QuoteReport> {
    let area_m2 = roll.area_m2();
    let wire_length_m = physics::total_wire_length(spec.cell_size_mm, area_m2, factors)?;

    // First pass through the estimator to get the shipment weight, then the
    // delivery cost for that weight, then the final breakdown.
    let weight_per_m2 = physics::weight_per_area(
        spec.cell_size_mm,
        spec.wire_thickness_mm,
        spec.material,
        factors,
    )?;
    let total_weight_kg = crate::core::round2(weight_per_m2 * area_m2);

    let logistics = logistics::optimize(distance_km, total_weight_kg, 1, fleet)?;
    let breakdown = cost::estimate(
        spec,
        roll,
        pricing,
        margin_percent,
        logistics.total_cost,
        factors,
    )?;

    Ok(QuoteReport {
        spec: *spec,
        roll: *roll,
        area_m2,
        wire_length_m,
        breakdown,
        logistics,
    })
}

/// Formats a quote into a human-readable summary block.
#[must_use]
pub fn format_quote_summary(quote: &QuoteReport) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Quote - {} mesh, cell {} mm, wire {} mm\n",
        quote.spec.material, quote.spec.cell_size_mm, quote.spec.wire_thickness_mm
    );

    // write! is infallible when writing to String, so unwrap is safe
    writeln!(
        summary,
        "  Roll {} m x {} m | area {:.2} m² | wire {} m | {:.2} kg",
        quote.roll.length_m,
        quote.roll.height_m,
        quote.area_m2,
        quote.wire_length_m,
        quote.breakdown.total_weight_kg
    )
    .unwrap();
    writeln!(
        summary,
        "  Purchase {:.2} | Sale {:.2} | Logistics {:.2} ({} trips) | Profit {:.2} ({:.1}%)",
        quote.breakdown.purchase_cost,
        quote.breakdown.sale_price,
        quote.breakdown.logistics_cost,
        quote.logistics.trips,
        quote.breakdown.profit,
        quote.breakdown.real_margin_percent
    )
    .unwrap();

    summary
}

/// Formats a monthly profit/loss series into an aligned text table.
#[must_use]
pub fn format_profit_loss_table(rows: &[ProfitLossRow]) -> String {
    use std::fmt::Write;

    if rows.is_empty() {
        return "No ledger entries recorded.\n".to_string();
    }

    let mut table = String::from("Month    | Income      | Expense     | Profit\n");
    for row in rows {
        writeln!(
            table,
            "{} | {:>11.2} | {:>11.2} | {:>11.2}",
            row.period(),
            row.income,
            row.expense,
            row.profit
        )
        .unwrap();
    }
    table
}

/// Formats reorder recommendations into a short action list.
#[must_use]
pub fn format_reorder_summary(recommendations: &[ReorderRecommendation]) -> String {
    use std::fmt::Write;

    if recommendations.is_empty() {
        return "All materials are at or above minimum stock.\n".to_string();
    }

    let mut summary = String::from("Reorder recommendations:\n");
    for rec in recommendations {
        writeln!(
            summary,
            "  {} - order {} (current {}, minimum {})",
            rec.material, rec.to_order, rec.current, rec.minimum
        )
        .unwrap();
    }
    summary
}
