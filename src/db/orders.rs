//! Purchase order accessors.
//!
//! Orders are what close the procurement loop: the advisor recommends a
//! quantity, the user picks a supplier, and a `planned` order is written
//! here with a delivery date one week out.

use crate::core::material::Material;
use crate::entities::purchase_order::OrderStatus;
use crate::entities::{PurchaseOrder, purchase_order, supplier};
use crate::errors::Result;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Standard lead time between placing an order and expected delivery.
const DELIVERY_LEAD_DAYS: i64 = 7;

/// An active purchase order joined with its supplier's name.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithSupplier {
    /// The purchase order
    pub order: purchase_order::Model,
    /// Name of the supplier it was placed with
    pub supplier_name: String,
}

/// Creates a `planned` purchase order dated today with the standard
/// delivery lead time. Total cost is derived from quantity and unit price.
pub async fn create_purchase_order(
    db: &DatabaseConnection,
    supplier_id: i64,
    material: Material,
    quantity: i64,
    price_per_unit: f64,
) -> Result<purchase_order::Model> {
    let order_date = Utc::now().date_naive();
    create_purchase_order_dated(db, supplier_id, material, quantity, price_per_unit, order_date)
        .await
}

/// Creates a `planned` purchase order with an explicit order date. Split
/// out so tests and imports can control the date.
pub async fn create_purchase_order_dated(
    db: &DatabaseConnection,
    supplier_id: i64,
    material: Material,
    quantity: i64,
    price_per_unit: f64,
    order_date: NaiveDate,
) -> Result<purchase_order::Model> {
    #[allow(clippy::cast_precision_loss)]
    let total_cost = quantity as f64 * price_per_unit;
    let new_order = purchase_order::ActiveModel {
        supplier_id: Set(supplier_id),
        material: Set(material.name().to_string()),
        quantity: Set(quantity),
        price_per_unit: Set(price_per_unit),
        total_cost: Set(total_cost),
        status: Set(OrderStatus::Planned),
        order_date: Set(order_date),
        delivery_date: Set(order_date + Duration::days(DELIVERY_LEAD_DAYS)),
        ..Default::default()
    };
    new_order.insert(db).await.map_err(Into::into)
}

/// Retrieves active orders (`planned` or `ordered`) newest-first, each
/// joined with its supplier's name.
pub async fn get_active_orders(db: &DatabaseConnection) -> Result<Vec<OrderWithSupplier>> {
    let rows = PurchaseOrder::find()
        .filter(
            purchase_order::Column::Status
                .is_in([OrderStatus::Planned, OrderStatus::Ordered]),
        )
        .order_by_desc(purchase_order::Column::OrderDate)
        .order_by_desc(purchase_order::Column::Id)
        .find_also_related(supplier::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(order, supplier)| OrderWithSupplier {
            supplier_name: supplier.map_or_else(String::new, |s| s.name),
            order,
        })
        .collect())
}

/// Moves an order to a new lifecycle status.
pub async fn set_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<()> {
    let order = PurchaseOrder::find_by_id(order_id).one(db).await?;
    if let Some(model) = order {
        let mut active: purchase_order::ActiveModel = model.into();
        active.status = Set(status);
        active.update(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::db::suppliers::{NewSupplier, create_supplier};
    use crate::test_utils::setup_test_db;

    async fn supplier_id(db: &DatabaseConnection) -> Result<i64> {
        let supplier = create_supplier(
            db,
            NewSupplier {
                name: "MetalProm".to_string(),
                ..Default::default()
            },
        )
        .await?;
        Ok(supplier.id)
    }

    #[tokio::test]
    async fn test_create_order_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = supplier_id(&db).await?;

        let order_date = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        let order = create_purchase_order_dated(
            &db,
            supplier,
            Material::Galvanized,
            100,
            75.0,
            order_date,
        )
        .await?;

        assert_eq!(order.status, OrderStatus::Planned);
        assert_eq!(order.total_cost, 7500.0);
        assert_eq!(
            order.delivery_date,
            NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_active_orders_join_supplier_name() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = supplier_id(&db).await?;

        create_purchase_order(&db, supplier, Material::Black, 50, 55.0).await?;
        let active = get_active_orders(&db).await?;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].supplier_name, "MetalProm");
        assert_eq!(active[0].order.material, "Black");
        Ok(())
    }

    #[tokio::test]
    async fn test_delivered_orders_leave_the_active_list() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = supplier_id(&db).await?;

        let order = create_purchase_order(&db, supplier, Material::Pvc, 20, 110.0).await?;
        assert_eq!(get_active_orders(&db).await?.len(), 1);

        set_order_status(&db, order.id, OrderStatus::Delivered).await?;
        assert!(get_active_orders(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_active_orders_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = supplier_id(&db).await?;

        let early = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        create_purchase_order_dated(&db, supplier, Material::Black, 10, 55.0, early).await?;
        create_purchase_order_dated(&db, supplier, Material::Copper, 5, 700.0, late).await?;

        let active = get_active_orders(&db).await?;
        assert_eq!(active[0].order.material, "Copper");
        assert_eq!(active[1].order.material, "Black");
        Ok(())
    }
}
