//! Cash-flow entity - one dated income or expense ledger entry.
//!
//! Amounts are stored non-negative; the direction is carried by
//! `entry_type`. The ledger accessors convert rows into
//! [`crate::core::finance::LedgerEntry`] values for aggregation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry as stored in the database.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum FlowType {
    /// Money coming in
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Cash-flow ledger database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_flow")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Income or expense
    pub entry_type: FlowType,
    /// Free-form category label (e.g. "Sales", "Purchases")
    pub category: String,
    /// Non-negative amount
    pub amount: f64,
    /// Date the entry was booked
    pub date: Date,
}

/// Ledger entries stand alone.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
