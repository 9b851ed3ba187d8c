//! Warehouse inventory accessors and stock snapshots.
//!
//! The warehouse stores received material lots; the procurement advisor
//! only ever sees the grouped totals from [`current_stock`], which is the
//! stock-repository half of the core's data contract.

use crate::core::material::Material;
use crate::entities::{InventoryLot, inventory_lot};
use crate::errors::Result;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};
use std::collections::HashMap;

/// Retrieves all inventory lots that still have stock, oldest arrival
/// first.
pub async fn get_inventory(db: &DatabaseConnection) -> Result<Vec<inventory_lot::Model>> {
    InventoryLot::find()
        .filter(inventory_lot::Column::Quantity.gt(0))
        .order_by_asc(inventory_lot::Column::ArrivalDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records a newly arrived material lot. The lot's total cost is derived
/// from quantity and unit price.
pub async fn add_lot(
    db: &DatabaseConnection,
    batch_id: &str,
    material: Material,
    quantity: i64,
    price_per_unit: f64,
    arrival_date: NaiveDate,
) -> Result<inventory_lot::Model> {
    #[allow(clippy::cast_precision_loss)]
    let total_cost = quantity as f64 * price_per_unit;
    let new_lot = inventory_lot::ActiveModel {
        batch_id: Set(batch_id.to_string()),
        material: Set(material.name().to_string()),
        quantity: Set(quantity),
        price_per_unit: Set(price_per_unit),
        total_cost: Set(total_cost),
        arrival_date: Set(arrival_date),
        ..Default::default()
    };
    new_lot.insert(db).await.map_err(Into::into)
}

/// Builds the current stock snapshot: total on-hand quantity per material,
/// summed over all positive lots. This is the input the procurement
/// advisor consumes.
///
/// # Errors
/// Returns [`crate::errors::Error::UnknownMaterial`] if a stored lot
/// carries a material name that no longer parses.
pub async fn current_stock(db: &DatabaseConnection) -> Result<HashMap<Material, i64>> {
    let lots = get_inventory(db).await?;

    let mut stock: HashMap<Material, i64> = HashMap::new();
    for lot in lots {
        let material: Material = lot.material.parse()?;
        *stock.entry(material).or_insert(0) += lot.quantity;
    }
    Ok(stock)
}

/// Draws down stock for a material across lots, oldest arrival first
/// (FIFO). Returns the quantity actually consumed, which may be less than
/// requested when stock runs out.
pub async fn consume_stock(
    db: &DatabaseConnection,
    material: Material,
    mut quantity: i64,
) -> Result<i64> {
    let lots = InventoryLot::find()
        .filter(inventory_lot::Column::Material.eq(material.name()))
        .filter(inventory_lot::Column::Quantity.gt(0))
        .order_by_asc(inventory_lot::Column::ArrivalDate)
        .all(db)
        .await?;

    let mut consumed = 0;
    for lot in lots {
        if quantity == 0 {
            break;
        }
        let take = lot.quantity.min(quantity);
        let remaining = lot.quantity - take;
        let mut active: inventory_lot::ActiveModel = lot.into();
        active.quantity = Set(remaining);
        active.update(db).await?;
        quantity -= take;
        consumed += take;
    }
    Ok(consumed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_add_lot_derives_total_cost() -> Result<()> {
        let db = setup_test_db().await?;
        let lot = add_lot(&db, "B001", Material::Galvanized, 100, 75.0, date("2025-10-01")).await?;

        assert_eq!(lot.material, "Galvanized");
        assert!((lot.total_cost - 7500.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[tokio::test]
    async fn test_current_stock_groups_by_material() -> Result<()> {
        let db = setup_test_db().await?;
        add_lot(&db, "B001", Material::Galvanized, 100, 75.0, date("2025-10-01")).await?;
        add_lot(&db, "B002", Material::Galvanized, 40, 76.0, date("2025-10-08")).await?;
        add_lot(&db, "B003", Material::Black, 60, 60.0, date("2025-10-05")).await?;

        let stock = current_stock(&db).await?;
        assert_eq!(stock.get(&Material::Galvanized), Some(&140));
        assert_eq!(stock.get(&Material::Black), Some(&60));
        assert_eq!(stock.get(&Material::Copper), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_consume_stock_is_fifo() -> Result<()> {
        let db = setup_test_db().await?;
        let old = add_lot(&db, "B001", Material::Black, 30, 60.0, date("2025-09-01")).await?;
        let new = add_lot(&db, "B002", Material::Black, 50, 62.0, date("2025-10-01")).await?;

        let consumed = consume_stock(&db, Material::Black, 40).await?;
        assert_eq!(consumed, 40);

        // Oldest lot drained first, newer lot partially drawn.
        let old_reloaded = InventoryLot::find_by_id(old.id).one(&db).await?.unwrap();
        let new_reloaded = InventoryLot::find_by_id(new.id).one(&db).await?.unwrap();
        assert_eq!(old_reloaded.quantity, 0);
        assert_eq!(new_reloaded.quantity, 40);

        let stock = current_stock(&db).await?;
        assert_eq!(stock.get(&Material::Black), Some(&40));
        Ok(())
    }

    #[tokio::test]
    async fn test_consume_more_than_available() -> Result<()> {
        let db = setup_test_db().await?;
        add_lot(&db, "B001", Material::Pvc, 10, 110.0, date("2025-10-01")).await?;

        let consumed = consume_stock(&db, Material::Pvc, 25).await?;
        assert_eq!(consumed, 10);

        let stock = current_stock(&db).await?;
        assert_eq!(stock.get(&Material::Pvc), None); // drained lots drop out
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_warehouse_is_empty_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(current_stock(&db).await?.is_empty());
        Ok(())
    }
}
