//! Supplier accessors - the vendor book.

use crate::entities::{Supplier, supplier};
use crate::errors::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Details for registering a new supplier.
#[derive(Debug, Clone, Default)]
pub struct NewSupplier {
    /// Supplier company name
    pub name: String,
    /// Tax registration number
    pub tax_id: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact person name
    pub contact_person: Option<String>,
}

/// Retrieves all suppliers ordered alphabetically by name.
pub async fn get_all_suppliers(db: &DatabaseConnection) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .order_by_asc(supplier::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a supplier by its unique ID.
pub async fn get_supplier_by_id(
    db: &DatabaseConnection,
    supplier_id: i64,
) -> Result<Option<supplier::Model>> {
    Supplier::find_by_id(supplier_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Registers a new supplier. New suppliers start at the neutral top rating
/// (5.0) and are dated today.
pub async fn create_supplier(
    db: &DatabaseConnection,
    details: NewSupplier,
) -> Result<supplier::Model> {
    create_supplier_dated(db, details, Utc::now().date_naive()).await
}

/// Registers a new supplier with an explicit creation date. Split out so
/// tests and imports can control the date.
pub async fn create_supplier_dated(
    db: &DatabaseConnection,
    details: NewSupplier,
    created_date: NaiveDate,
) -> Result<supplier::Model> {
    let new_supplier = supplier::ActiveModel {
        name: Set(details.name.trim().to_string()),
        tax_id: Set(details.tax_id),
        address: Set(details.address),
        phone: Set(details.phone),
        email: Set(details.email),
        contact_person: Set(details.contact_person),
        rating: Set(5.0),
        created_date: Set(created_date),
        ..Default::default()
    };
    new_supplier.insert(db).await.map_err(Into::into)
}

/// Updates a supplier's internal rating, clamped to the 0.0-5.0 scale.
pub async fn rate_supplier(db: &DatabaseConnection, supplier_id: i64, rating: f64) -> Result<()> {
    let supplier = Supplier::find_by_id(supplier_id).one(db).await?;
    if let Some(model) = supplier {
        let mut active: supplier::ActiveModel = model.into();
        active.rating = Set(rating.clamp(0.0, 5.0));
        active.update(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_list_suppliers() -> Result<()> {
        let db = setup_test_db().await?;

        create_supplier(
            &db,
            NewSupplier {
                name: "SteelWorks".to_string(),
                contact_person: Some("I. Ferrous".to_string()),
                ..Default::default()
            },
        )
        .await?;
        create_supplier(
            &db,
            NewSupplier {
                name: "CoilCo".to_string(),
                ..Default::default()
            },
        )
        .await?;

        let suppliers = get_all_suppliers(&db).await?;
        assert_eq!(suppliers.len(), 2);
        assert_eq!(suppliers[0].name, "CoilCo");
        assert_eq!(suppliers[1].rating, 5.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_rate_supplier_clamps_to_scale() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_supplier(
            &db,
            NewSupplier {
                name: "Rated".to_string(),
                ..Default::default()
            },
        )
        .await?;

        rate_supplier(&db, supplier.id, 7.5).await?;
        let reloaded = get_supplier_by_id(&db, supplier.id).await?.unwrap();
        assert_eq!(reloaded.rating, 5.0);

        rate_supplier(&db, supplier.id, -1.0).await?;
        let reloaded = get_supplier_by_id(&db, supplier.id).await?.unwrap();
        assert_eq!(reloaded.rating, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_supplier_is_none() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_supplier_by_id(&db, 9999).await?.is_none());
        Ok(())
    }
}
