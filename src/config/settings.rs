//! Application settings loading from config.toml.
//!
//! All business configuration the calculators consume lives here: the
//! formula calibration factors, the fleet parameters, the price-per-kg
//! table, and the minimum stock thresholds. Compiled-in defaults match the
//! shop's verified constants; a `config.toml` next to the binary overrides
//! them.

use crate::core::logistics::FleetConfig;
use crate::core::material::Material;
use crate::core::physics::PhysicsFactors;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Everything configurable about the calculation engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Formula calibration factors
    pub factors: PhysicsFactors,
    /// Fleet and delivery cost parameters
    pub fleet: FleetConfig,
    /// Price per kilogram for each material
    pub pricing: HashMap<Material, f64>,
    /// Reorder-point thresholds for each material
    pub minimum_stock: HashMap<Material, i64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            factors: PhysicsFactors::default(),
            fleet: FleetConfig::default(),
            pricing: HashMap::from([
                (Material::Galvanized, 75.0),
                (Material::Black, 55.0),
                (Material::Copper, 700.0),
                (Material::Pvc, 110.0),
            ]),
            minimum_stock: HashMap::from([
                (Material::Galvanized, 50),
                (Material::Black, 30),
                (Material::Pvc, 20),
                (Material::Copper, 10),
            ]),
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A material key or value has the wrong type
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AppSettings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back
/// to the compiled-in defaults when the file does not exist.
pub fn load_default_settings() -> Result<AppSettings> {
    if Path::new("config.toml").exists() {
        load_settings("config.toml")
    } else {
        Ok(AppSettings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_default_settings_cover_all_materials() {
        let settings = AppSettings::default();
        for material in Material::ALL {
            assert!(settings.pricing.contains_key(&material));
            assert!(settings.minimum_stock.contains_key(&material));
        }
        assert_eq!(settings.factors.weight_factor, 13.4);
        assert_eq!(settings.fleet.truck_capacity_kg, 20_000.0);
    }

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [factors]
            weight_factor = 13.4
            length_factor = 2173.0

            [fleet]
            truck_capacity_kg = 15000.0
            fuel_consumption_l_per_km = 0.4
            co2_per_liter = 2.3
            fuel_price_per_liter = 58.0
            packaging_cost_per_roll = 6.0
            driver_cost_per_trip = 450.0

            [pricing]
            Galvanized = 80.0
            Black = 60.0

            [minimum_stock]
            Galvanized = 40
            PVC = 25
        "#;

        let settings: AppSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.fleet.truck_capacity_kg, 15_000.0);
        assert_eq!(settings.fleet.driver_cost_per_trip, 450.0);
        assert_eq!(settings.pricing[&Material::Galvanized], 80.0);
        assert_eq!(settings.pricing[&Material::Black], 60.0);
        assert_eq!(settings.minimum_stock[&Material::Pvc], 25);
    }

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let toml_str = r#"
            [factors]
            weight_factor = 14.0
        "#;

        let settings: AppSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.factors.weight_factor, 14.0);
        // length_factor omitted -> serde default
        assert_eq!(settings.factors.length_factor, 2173.0);
        // Whole sections omitted -> struct default
        assert_eq!(settings.fleet.truck_capacity_kg, 20_000.0);
        assert_eq!(settings.pricing[&Material::Copper], 700.0);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = std::env::temp_dir().join("meshdesk_settings_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_config.toml");
        std::fs::write(&path, "[fleet\ntruck_capacity_kg = oops").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = load_settings("/nonexistent/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
