//! Supplier entity - a wire or coating vendor the shop orders from.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    /// Unique identifier for the supplier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Supplier company name
    pub name: String,
    /// Tax registration number
    pub tax_id: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Name of the contact person
    pub contact_person: Option<String>,
    /// Internal rating, 0.0 to 5.0
    pub rating: f64,
    /// Date the supplier was added
    pub created_date: Date,
}

/// Defines relationships between Supplier and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One supplier has many purchase orders
    #[sea_orm(has_many = "super::purchase_order::Entity")]
    PurchaseOrders,
}

impl Related<super::purchase_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
