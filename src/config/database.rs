//! Database configuration module for `MeshDesk`.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` so the schema is always
//! generated from the entity definitions in [`crate::entities`] without
//! hand-written SQL.

use crate::entities::{CashFlow, Client, InventoryLot, PurchaseOrder, Supplier};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default local
/// `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/meshdesk.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the
/// `DATABASE_URL` environment variable, falling back to a default local
/// `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates tables for clients, suppliers, inventory lots, purchase orders,
/// and the cash-flow ledger. Safe to call on an empty database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let client_table = schema.create_table_from_entity(Client);
    let supplier_table = schema.create_table_from_entity(Supplier);
    let inventory_table = schema.create_table_from_entity(InventoryLot);
    let purchase_order_table = schema.create_table_from_entity(PurchaseOrder);
    let cash_flow_table = schema.create_table_from_entity(CashFlow);

    db.execute(builder.build(&client_table)).await?;
    db.execute(builder.build(&supplier_table)).await?;
    db.execute(builder.build(&inventory_table)).await?;
    db.execute(builder.build(&purchase_order_table)).await?;
    db.execute(builder.build(&cash_flow_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _ = Client::find().limit(1).all(&db).await?;
        let _ = Supplier::find().limit(1).all(&db).await?;
        let _ = InventoryLot::find().limit(1).all(&db).await?;
        let _ = PurchaseOrder::find().limit(1).all(&db).await?;
        let _ = CashFlow::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_default_database_url() {
        // Only check the fallback shape; the env var may be set externally.
        let url = get_database_url();
        assert!(url.starts_with("sqlite:"));
    }
}
