//! Async repository accessors over the `SQLite` store.
//!
//! This is the narrow data contract between the persistence layer and the
//! pure calculators in [`crate::core`]: each submodule reads or writes one
//! domain's tables and hands the core plain values (stock snapshots, ledger
//! entries) rather than ORM models.

/// Client accessors
pub mod clients;
/// Cash-flow ledger accessors
pub mod ledger;
/// Purchase order accessors
pub mod orders;
/// Idempotent sample-data seeding
pub mod seed;
/// Supplier accessors
pub mod suppliers;
/// Warehouse inventory accessors and stock snapshots
pub mod warehouse;
