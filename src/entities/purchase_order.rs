//! Purchase order entity - a replenishment order placed with a supplier.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a purchase order.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    /// Order drafted but not yet sent to the supplier
    #[sea_orm(string_value = "planned")]
    Planned,
    /// Order sent to the supplier
    #[sea_orm(string_value = "ordered")]
    Ordered,
    /// Goods received into the warehouse
    #[sea_orm(string_value = "delivered")]
    Delivered,
    /// Order cancelled
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Purchase order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Supplier the order was placed with
    pub supplier_id: i64,
    /// Canonical material name
    pub material: String,
    /// Units ordered
    pub quantity: i64,
    /// Agreed price per unit
    pub price_per_unit: f64,
    /// `quantity * price_per_unit`, stored for reporting
    pub total_cost: f64,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Date the order was placed
    pub order_date: Date,
    /// Expected delivery date
    pub delivery_date: Date,
}

/// Defines relationships between `PurchaseOrder` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each purchase order belongs to one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
