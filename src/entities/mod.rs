//! SeaORM entity definitions for the `MeshDesk` store.
//!
//! One entity per table: clients, suppliers, warehouse inventory lots,
//! purchase orders, and the cash-flow ledger. Table creation happens in
//! [`crate::config::database::create_tables`] straight from these
//! definitions.

/// Cash-flow ledger entry table
pub mod cash_flow;
/// Client table
pub mod client;
/// Warehouse inventory lot table
pub mod inventory_lot;
/// Purchase order table
pub mod purchase_order;
/// Supplier table
pub mod supplier;

pub use cash_flow::Entity as CashFlow;
pub use client::Entity as Client;
pub use inventory_lot::Entity as InventoryLot;
pub use purchase_order::Entity as PurchaseOrder;
pub use supplier::Entity as Supplier;
