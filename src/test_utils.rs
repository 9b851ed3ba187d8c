//! Shared test utilities for `MeshDesk`.
//!
//! Provides common helpers for setting up test databases and standard
//! calculation inputs so individual test modules stay short.

use crate::config::settings::AppSettings;
use crate::core::cost::{MaterialPricing, MeshSpec, RollDimensions};
use crate::core::material::Material;
use crate::errors::Result;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all repository tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The shop's default pricing table as a per-call pricing value.
#[must_use]
pub fn default_pricing() -> MaterialPricing {
    MaterialPricing {
        table: AppSettings::default().pricing,
        override_price: None,
    }
}

/// A standard galvanized roll request: 25 mm cell, 1.2 mm wire,
/// 10 m x 1.5 m roll.
#[must_use]
pub fn standard_roll_request() -> (MeshSpec, RollDimensions) {
    (
        MeshSpec {
            cell_size_mm: 25.0,
            wire_thickness_mm: 1.2,
            material: Material::Galvanized,
        },
        RollDimensions {
            length_m: 10.0,
            height_m: 1.5,
        },
    )
}
