//! Idempotent sample-data seeding.
//!
//! Seeds a couple of suppliers, warehouse lots, and ledger entries so a
//! fresh install shows something on the dashboard. Seeding is skipped
//! entirely when the corresponding table already has rows.

use crate::core::finance::EntryType;
use crate::core::material::Material;
use crate::db::{ledger, suppliers, warehouse};
use crate::errors::Result;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, PaginatorTrait, prelude::*};
use tracing::info;

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Constant dates used only for the demo fixtures.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Seeds sample suppliers, inventory, and cash-flow entries into an empty
/// database. Tables that already contain rows are left untouched.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<()> {
    seed_suppliers(db).await?;
    seed_inventory(db).await?;
    seed_ledger(db).await?;
    Ok(())
}

async fn seed_suppliers(db: &DatabaseConnection) -> Result<()> {
    if crate::entities::Supplier::find().count(db).await? > 0 {
        return Ok(());
    }

    suppliers::create_supplier_dated(
        db,
        suppliers::NewSupplier {
            name: "MetalProm LLC".to_string(),
            tax_id: Some("1234567890".to_string()),
            address: Some("10 Metallurgists St, Kyiv".to_string()),
            phone: Some("+380671234567".to_string()),
            email: Some("sales@metalprom.example".to_string()),
            contact_person: Some("Ivan Metalenko".to_string()),
        },
        seed_date(2025, 10, 1),
    )
    .await?;
    suppliers::create_supplier_dated(
        db,
        suppliers::NewSupplier {
            name: "StalBud".to_string(),
            tax_id: Some("0987654321".to_string()),
            address: Some("5 Foundry St, Kharkiv".to_string()),
            phone: Some("+380672345678".to_string()),
            email: Some("office@stalbud.example".to_string()),
            contact_person: Some("Olena Stal".to_string()),
        },
        seed_date(2025, 10, 2),
    )
    .await?;

    info!("Seeded sample suppliers");
    Ok(())
}

async fn seed_inventory(db: &DatabaseConnection) -> Result<()> {
    if crate::entities::InventoryLot::find().count(db).await? > 0 {
        return Ok(());
    }

    warehouse::add_lot(db, "B001", Material::Galvanized, 100, 75.0, seed_date(2025, 10, 1)).await?;
    warehouse::add_lot(db, "B002", Material::Black, 60, 60.0, seed_date(2025, 10, 5)).await?;

    info!("Seeded sample inventory lots");
    Ok(())
}

async fn seed_ledger(db: &DatabaseConnection) -> Result<()> {
    if crate::entities::CashFlow::find().count(db).await? > 0 {
        return Ok(());
    }

    ledger::record_entry(db, EntryType::Income, "Sales", 45_000.0, seed_date(2025, 10, 15)).await?;
    ledger::record_entry(
        db,
        EntryType::Expense,
        "Purchases",
        30_000.0,
        seed_date(2025, 10, 16),
    )
    .await?;

    info!("Seeded sample cash-flow entries");
    Ok(())
}
