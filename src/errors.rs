//! Unified error type for `MeshDesk`.
//!
//! Every calculator validates its inputs at the boundary and surfaces one of
//! the variants below immediately; no partial results are returned on
//! failure. The presentation layer is responsible for turning these into
//! user-facing messages.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A geometric mesh parameter (cell size or wire thickness) was zero or
    /// negative.
    #[error("Invalid dimension: {field} must be > 0, got {value}")]
    InvalidDimension {
        /// Which parameter failed validation
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// The resolved price per kilogram was zero or negative.
    #[error("Invalid price: resolved unit price must be > 0, got {value}")]
    InvalidPrice {
        /// The offending resolved price
        value: f64,
    },

    /// A logistics input (distance or shipment weight) was negative.
    #[error("Invalid shipment: {field} must be >= 0, got {value}")]
    InvalidShipment {
        /// Which parameter failed validation
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// A stock quantity in a procurement input map was negative.
    #[error("Invalid stock: quantity for {material} must be >= 0, got {quantity}")]
    InvalidStock {
        /// Material whose quantity was negative
        material: String,
        /// The offending quantity
        quantity: i64,
    },

    /// A stored material name did not match any known material variant.
    #[error("Unknown material: {name}")]
    UnknownMaterial {
        /// The unrecognized material name
        name: String,
    },

    /// Configuration loading or parsing failure.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database error from the SeaORM layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
