//! Inventory lot entity - one received batch of material in the warehouse.
//!
//! Material is stored as its canonical text name; the warehouse accessors
//! parse it back into [`crate::core::material::Material`] when building
//! stock snapshots.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory lot database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    /// Unique identifier for the lot
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-assigned batch label (e.g. "B001")
    pub batch_id: String,
    /// Canonical material name
    pub material: String,
    /// Units remaining in this lot
    pub quantity: i64,
    /// Purchase price per unit at arrival
    pub price_per_unit: f64,
    /// Total purchase cost of the lot
    pub total_cost: f64,
    /// Date the lot arrived at the warehouse
    pub arrival_date: Date,
}

/// Inventory lots stand alone; stock snapshots are computed by grouping.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
