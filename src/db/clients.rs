//! Client accessors - the customer book.

use crate::entities::{Client, client};
use crate::errors::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

/// Retrieves all clients ordered alphabetically by name.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new client with a starting balance.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Client or company name
/// * `email` - Contact email, if known
/// * `phone` - Contact phone, if known
/// * `balance` - Opening account balance
pub async fn create_client(
    db: &DatabaseConnection,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    balance: f64,
) -> Result<client::Model> {
    let new_client = client::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        balance: Set(balance),
        ..Default::default()
    };
    new_client.insert(db).await.map_err(Into::into)
}

/// Adjusts a client's balance by a signed delta (payments positive,
/// invoices negative).
pub async fn adjust_client_balance(
    db: &DatabaseConnection,
    client_id: i64,
    delta: f64,
) -> Result<()> {
    Client::update_many()
        .col_expr(
            client::Column::Balance,
            Expr::col(client::Column::Balance).add(delta),
        )
        .filter(client::Column::Id.eq(client_id))
        .exec(db)
        .await?;
    Ok(())
}
