//! Parametric physical formulas for chain-link mesh.
//!
//! The base formulas come from the shop's fabrication tables:
//!
//! - weight of 1 m² = `weight_factor` × d² / a  (kg, d = wire thickness in
//!   mm, a = cell size in mm), scaled by a material coefficient
//! - wire length per 1 m² = `length_factor` / a  (whole metres)
//!
//! Both factors are injectable via [`PhysicsFactors`] so the dashboard can
//! recalibrate them without a rebuild; the defaults match the verified
//! fabrication constants.

use crate::core::material::Material;
use crate::core::round2;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Density ratio of copper wire versus steel (8960 / 7850).
const COPPER_DENSITY_RATIO: f64 = 1.141;

/// PVC-coated wire coefficients by wire thickness (mm), measured against the
/// bare-steel base weight. Thicknesses between entries are linearly
/// interpolated; thicknesses outside the range clamp to the nearest entry.
const PVC_COEFFICIENTS: [(f64, f64); 4] = [
    (1.2, 0.3896),
    (1.5, 0.4711),
    (1.8, 0.5402),
    (2.0, 0.5794),
];

/// Calibration factors for the mesh formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsFactors {
    /// Constant in the weight-per-m² formula (kg)
    #[serde(default = "default_weight_factor")]
    pub weight_factor: f64,
    /// Constant in the wire-length-per-m² formula (m at a = 1 mm)
    #[serde(default = "default_length_factor")]
    pub length_factor: f64,
}

const fn default_weight_factor() -> f64 {
    13.4
}

const fn default_length_factor() -> f64 {
    2173.0
}

impl Default for PhysicsFactors {
    fn default() -> Self {
        Self {
            weight_factor: default_weight_factor(),
            length_factor: default_length_factor(),
        }
    }
}

/// Returns the dimensionless weight coefficient for a material at the given
/// wire thickness.
///
/// Galvanized and black steel use the base formula unchanged. Copper scales
/// by its density ratio. PVC-coated wire uses the measured coefficient
/// table: exact thicknesses hit the table directly, thicknesses between two
/// entries are linearly interpolated, and thicknesses outside the table
/// clamp to the boundary coefficient.
#[must_use]
pub fn material_coefficient(material: Material, wire_thickness_mm: f64) -> f64 {
    match material {
        Material::Galvanized | Material::Black => 1.0,
        Material::Copper => COPPER_DENSITY_RATIO,
        Material::Pvc => pvc_coefficient(wire_thickness_mm),
    }
}

/// Looks up the PVC coefficient for a wire thickness, clamping outside the
/// table range and interpolating linearly between adjacent entries.
fn pvc_coefficient(wire_thickness_mm: f64) -> f64 {
    let (first_d, first_coeff) = PVC_COEFFICIENTS[0];
    if wire_thickness_mm <= first_d {
        return first_coeff;
    }

    let (last_d, last_coeff) = PVC_COEFFICIENTS[PVC_COEFFICIENTS.len() - 1];
    if wire_thickness_mm >= last_d {
        return last_coeff;
    }

    for window in PVC_COEFFICIENTS.windows(2) {
        let (lo_d, lo_coeff) = window[0];
        let (hi_d, hi_coeff) = window[1];
        if wire_thickness_mm <= hi_d {
            let t = (wire_thickness_mm - lo_d) / (hi_d - lo_d);
            return lo_coeff + (hi_coeff - lo_coeff) * t;
        }
    }

    // Unreachable: the clamps above cover everything outside the table.
    last_coeff
}

/// Calculates the weight of one square metre of mesh in kilograms.
///
/// # Arguments
/// * `cell_size_mm` - Mesh cell opening size (a), in millimetres
/// * `wire_thickness_mm` - Wire gauge (d), in millimetres
/// * `material` - Wire material
/// * `factors` - Calibration factors (defaults are the verified constants)
///
/// # Returns
/// Weight per m² rounded to 2 decimal places.
///
/// # Errors
/// Returns [`Error::InvalidDimension`] when `cell_size_mm` or
/// `wire_thickness_mm` is zero or negative.
pub fn weight_per_area(
    cell_size_mm: f64,
    wire_thickness_mm: f64,
    material: Material,
    factors: &PhysicsFactors,
) -> Result<f64> {
    validate_dimensions(cell_size_mm, wire_thickness_mm)?;

    let base = factors.weight_factor * wire_thickness_mm.powi(2) / cell_size_mm;
    let coefficient = material_coefficient(material, wire_thickness_mm);
    Ok(round2(base * coefficient))
}

/// Calculates the wire length woven into one square metre of mesh.
///
/// Length is a physical count of metres, so the result is rounded to a whole
/// number; it is independent of material.
///
/// # Errors
/// Returns [`Error::InvalidDimension`] when `cell_size_mm` is zero or
/// negative.
pub fn length_per_area(cell_size_mm: f64, factors: &PhysicsFactors) -> Result<i64> {
    if cell_size_mm <= 0.0 {
        return Err(Error::InvalidDimension {
            field: "cell_size_mm",
            value: cell_size_mm,
        });
    }

    // Cast safety: realistic cell sizes (>= 1 mm) keep this far below i64 range.
    #[allow(clippy::cast_possible_truncation)]
    Ok((factors.length_factor / cell_size_mm).round() as i64)
}

/// Calculates the total wire length for a given mesh area in whole metres.
///
/// # Arguments
/// * `cell_size_mm` - Mesh cell opening size (a), in millimetres
/// * `area_m2` - Total mesh area, in square metres
/// * `factors` - Calibration factors
///
/// # Errors
/// Returns [`Error::InvalidDimension`] when `cell_size_mm` is zero or
/// negative.
pub fn total_wire_length(cell_size_mm: f64, area_m2: f64, factors: &PhysicsFactors) -> Result<i64> {
    if cell_size_mm <= 0.0 {
        return Err(Error::InvalidDimension {
            field: "cell_size_mm",
            value: cell_size_mm,
        });
    }

    #[allow(clippy::cast_possible_truncation)]
    Ok((factors.length_factor / cell_size_mm * area_m2).round() as i64)
}

/// Validates that both geometric mesh parameters are strictly positive.
fn validate_dimensions(cell_size_mm: f64, wire_thickness_mm: f64) -> Result<()> {
    if cell_size_mm <= 0.0 {
        return Err(Error::InvalidDimension {
            field: "cell_size_mm",
            value: cell_size_mm,
        });
    }
    if wire_thickness_mm <= 0.0 {
        return Err(Error::InvalidDimension {
            field: "wire_thickness_mm",
            value: wire_thickness_mm,
        });
    }
    Ok(())
}
