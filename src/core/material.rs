//! Mesh wire material - the closed set of materials the shop fabricates with.
//!
//! Materials used to be free-form strings matched by name throughout the
//! codebase; this enum makes the set closed so that adding a material is a
//! compile-time-checked change (pricing tables, coefficients, and stock
//! thresholds all match exhaustively).

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire material for a mesh roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    /// Zinc-coated steel wire, the default product line
    Galvanized,
    /// Uncoated low-carbon steel wire
    Black,
    /// Copper wire (density ratio 8960/7850 versus steel)
    Copper,
    /// PVC-coated steel wire
    #[serde(rename = "PVC", alias = "Pvc")]
    Pvc,
}

impl Material {
    /// All known materials, in display order.
    pub const ALL: [Self; 4] = [Self::Galvanized, Self::Black, Self::Copper, Self::Pvc];

    /// Canonical name used for display, sorting, and database storage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Galvanized => "Galvanized",
            Self::Black => "Black",
            Self::Copper => "Copper",
            Self::Pvc => "PVC",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Galvanized" => Ok(Self::Galvanized),
            "Black" => Ok(Self::Black),
            "Copper" => Ok(Self::Copper),
            "PVC" | "Pvc" => Ok(Self::Pvc),
            other => Err(Error::UnknownMaterial {
                name: other.to_string(),
            }),
        }
    }
}
