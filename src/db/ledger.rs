//! Cash-flow ledger accessors.
//!
//! The ledger is append-only: entries are recorded with a non-negative
//! amount and a direction, never edited. [`get_ledger`] hands the finance
//! aggregator its input as plain [`LedgerEntry`] values.

use crate::core::finance::{EntryType, LedgerEntry};
use crate::entities::cash_flow::FlowType;
use crate::entities::{CashFlow, cash_flow};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, QueryOrder, Set, prelude::*};

impl From<FlowType> for EntryType {
    fn from(value: FlowType) -> Self {
        match value {
            FlowType::Income => Self::Income,
            FlowType::Expense => Self::Expense,
        }
    }
}

impl From<EntryType> for FlowType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Income => Self::Income,
            EntryType::Expense => Self::Expense,
        }
    }
}

/// Appends one entry to the cash-flow ledger.
///
/// Amounts carry no sign (the direction lives in `entry_type`), so a
/// negative amount is rejected here before it can corrupt monthly sums.
pub async fn record_entry(
    db: &DatabaseConnection,
    entry_type: EntryType,
    category: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<cash_flow::Model> {
    if amount < 0.0 {
        return Err(Error::Config {
            message: format!("Ledger amounts must be non-negative, got {amount}"),
        });
    }

    let new_entry = cash_flow::ActiveModel {
        entry_type: Set(entry_type.into()),
        category: Set(category.to_string()),
        amount: Set(amount),
        date: Set(date),
        ..Default::default()
    };
    new_entry.insert(db).await.map_err(Into::into)
}

/// Retrieves the full ledger, ordered by date ascending, as the plain
/// entries the finance aggregator consumes.
pub async fn get_ledger(db: &DatabaseConnection) -> Result<Vec<LedgerEntry>> {
    let rows = CashFlow::find()
        .order_by_asc(cash_flow::Column::Date)
        .order_by_asc(cash_flow::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| LedgerEntry {
            entry_type: row.entry_type.into(),
            category: row.category,
            amount: row.amount,
            date: row.date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::finance;
    use crate::test_utils::setup_test_db;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_record_and_fetch_ordered() -> Result<()> {
        let db = setup_test_db().await?;

        // Inserted out of date order; fetched chronologically.
        record_entry(&db, EntryType::Expense, "Purchases", 30_000.0, date("2025-10-16")).await?;
        record_entry(&db, EntryType::Income, "Sales", 45_000.0, date("2025-10-15")).await?;

        let ledger = get_ledger(&db).await?;
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].category, "Sales");
        assert_eq!(ledger[1].category, "Purchases");
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let result = record_entry(&db, EntryType::Income, "Sales", -1.0, date("2025-10-15")).await;
        assert!(matches!(result, Err(Error::Config { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_ledger_feeds_the_aggregator() -> Result<()> {
        let db = setup_test_db().await?;
        record_entry(&db, EntryType::Income, "Sales", 45_000.0, date("2025-10-15")).await?;
        record_entry(&db, EntryType::Expense, "Purchases", 30_000.0, date("2025-10-16")).await?;
        record_entry(&db, EntryType::Income, "Sales", 12_000.0, date("2025-11-02")).await?;

        let rows = finance::aggregate(&get_ledger(&db).await?);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period(), "2025-10");
        assert_eq!(rows[0].profit, 15_000.0);
        assert_eq!(rows[1].period(), "2025-11");
        assert_eq!(rows[1].income, 12_000.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_ledger() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_ledger(&db).await?.is_empty());
        Ok(())
    }
}
