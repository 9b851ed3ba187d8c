//! Delivery cost estimation for mesh shipments.
//!
//! A shipment heavier than one truck load is split into multiple trips;
//! fuel, driver, and packaging costs plus CO₂ output all follow from the
//! trip count. Every fleet parameter comes from [`FleetConfig`] - nothing
//! about the truck is hardwired here.

use crate::core::round1;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fleet and cost parameters for delivery runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Maximum payload of one truck, in kg
    pub truck_capacity_kg: f64,
    /// Fuel consumption, in litres per km
    pub fuel_consumption_l_per_km: f64,
    /// CO₂ emitted per litre of fuel burned, in kg
    pub co2_per_liter: f64,
    /// Fuel price per litre
    pub fuel_price_per_liter: f64,
    /// Packaging cost per mesh roll
    pub packaging_cost_per_roll: f64,
    /// Flat driver cost per trip
    pub driver_cost_per_trip: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            truck_capacity_kg: 20_000.0,
            fuel_consumption_l_per_km: 0.35,
            co2_per_liter: 2.3,
            fuel_price_per_liter: 55.0,
            packaging_cost_per_roll: 5.0,
            driver_cost_per_trip: 500.0,
        }
    }
}

/// Result of a logistics optimization for one shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticsResult {
    /// Number of truck trips required
    pub trips: u32,
    /// Total fuel cost across all trips
    pub fuel_cost: f64,
    /// Packaging cost for all rolls
    pub packaging_cost: f64,
    /// Driver cost across all trips
    pub driver_cost: f64,
    /// Sum of fuel, packaging, and driver costs
    pub total_cost: f64,
    /// CO₂ emitted across all trips, in kg
    pub co2_kg: f64,
    /// Share of total truck capacity actually used, as a percentage
    pub route_efficiency_percent: f64,
}

impl LogisticsResult {
    /// The all-zero result for an empty shipment.
    const EMPTY: Self = Self {
        trips: 0,
        fuel_cost: 0.0,
        packaging_cost: 0.0,
        driver_cost: 0.0,
        total_cost: 0.0,
        co2_kg: 0.0,
        route_efficiency_percent: 0.0,
    };
}

/// Computes trip count, delivery costs, CO₂ output, and route efficiency
/// for one shipment.
///
/// # Arguments
/// * `distance_km` - One-way delivery distance, in km
/// * `total_weight_kg` - Total shipment weight, in kg
/// * `roll_count` - Number of mesh rolls being packed
/// * `fleet` - Fleet parameters
///
/// # Errors
/// Returns [`Error::InvalidShipment`] when `distance_km` or
/// `total_weight_kg` is negative.
///
/// A zero-weight shipment is not an error: it yields zero trips and zero
/// costs rather than a zero-trip efficiency division.
pub fn optimize(
    distance_km: f64,
    total_weight_kg: f64,
    roll_count: u32,
    fleet: &FleetConfig,
) -> Result<LogisticsResult> {
    if distance_km < 0.0 {
        return Err(Error::InvalidShipment {
            field: "distance_km",
            value: distance_km,
        });
    }
    if total_weight_kg < 0.0 {
        return Err(Error::InvalidShipment {
            field: "total_weight_kg",
            value: total_weight_kg,
        });
    }

    if total_weight_kg == 0.0 {
        return Ok(LogisticsResult::EMPTY);
    }

    // Cast safety: ceil of a non-negative finite ratio; realistic shipments
    // are a handful of trips.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let trips = ((total_weight_kg / fleet.truck_capacity_kg).ceil() as u32).max(1);

    let fuel_liters = distance_km * fleet.fuel_consumption_l_per_km * f64::from(trips);
    let fuel_cost = fuel_liters * fleet.fuel_price_per_liter;
    let packaging_cost = f64::from(roll_count) * fleet.packaging_cost_per_roll;
    let driver_cost = f64::from(trips) * fleet.driver_cost_per_trip;
    let total_cost = fuel_cost + packaging_cost + driver_cost;
    let co2_kg = fuel_liters * fleet.co2_per_liter;

    let used_capacity = total_weight_kg / (fleet.truck_capacity_kg * f64::from(trips));
    let route_efficiency_percent = round1(used_capacity * 100.0);

    Ok(LogisticsResult {
        trips,
        fuel_cost,
        packaging_cost,
        driver_cost,
        total_cost,
        co2_kg,
        route_efficiency_percent,
    })
}
