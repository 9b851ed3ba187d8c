//! Monthly profit/loss aggregation over the cash-flow ledger.
//!
//! Turns a raw sequence of dated income/expense entries into one
//! chronologically ordered profit/loss row per calendar month. The ledger
//! itself lives in the store (see [`crate::db::ledger`]); this module only
//! does the arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a cash-flow entry. Amounts are stored non-negative; the
/// sign is implied by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in (sales, client payments)
    Income,
    /// Money going out (material purchases, wages, fuel)
    Expense,
}

/// One dated cash-flow ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Income or expense
    pub entry_type: EntryType,
    /// Free-form category label (e.g. "Sales", "Purchases")
    pub category: String,
    /// Non-negative amount
    pub amount: f64,
    /// Date the entry was booked
    pub date: NaiveDate,
}

/// Profit/loss summary for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossRow {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Sum of income entries for the month
    pub income: f64,
    /// Sum of expense entries for the month
    pub expense: f64,
    /// `income - expense`
    pub profit: f64,
}

impl ProfitLossRow {
    /// Period label in `YYYY-MM` form.
    #[must_use]
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Aggregates ledger entries into a monthly profit/loss time series.
///
/// Entries are grouped by the calendar month of their date; income and
/// expense sums are accumulated independently within each group. Rows come
/// back in chronological order. An empty ledger yields an empty series,
/// not an error.
#[must_use]
pub fn aggregate(ledger: &[LedgerEntry]) -> Vec<ProfitLossRow> {
    // BTreeMap keys keep the months chronologically sorted for free.
    let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();

    for entry in ledger {
        let key = (entry.date.year(), entry.date.month());
        let sums = months.entry(key).or_insert((0.0, 0.0));
        match entry.entry_type {
            EntryType::Income => sums.0 += entry.amount,
            EntryType::Expense => sums.1 += entry.amount,
        }
    }

    months
        .into_iter()
        .map(|((year, month), (income, expense))| ProfitLossRow {
            year,
            month,
            income,
            expense,
            profit: income - expense,
        })
        .collect()
}
