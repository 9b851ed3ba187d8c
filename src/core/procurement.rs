//! Reorder-point procurement recommendations.
//!
//! Compares current warehouse stock against the configured minimum
//! thresholds and produces a ranked list of what to reorder. Stock levels
//! are supplied by the caller (see [`crate::db::warehouse::current_stock`]);
//! this module never reads the database itself.

use crate::core::material::Material;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Urgency of a reorder recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Stock is below the minimum threshold; reorder now
    High,
    /// Stock is at or above the minimum threshold
    Ok,
}

/// One reorder recommendation for a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    /// Material to reorder
    pub material: Material,
    /// Current stock quantity
    pub current: i64,
    /// Configured minimum stock threshold
    pub minimum: i64,
    /// Quantity to order: `max(0, minimum - current)`
    pub to_order: i64,
    /// Recommendation urgency
    pub priority: Priority,
}

/// Produces ranked reorder recommendations.
///
/// Every material in `minimum_stock` is checked; materials absent from
/// `current_stock` count as zero on hand. Only materials that actually need
/// ordering (`to_order > 0`) are surfaced, sorted by `to_order` descending
/// with ties broken by material name ascending so the ordering is
/// deterministic.
///
/// # Errors
/// Returns [`Error::InvalidStock`] when any quantity in either map is
/// negative.
pub fn recommend(
    current_stock: &HashMap<Material, i64>,
    minimum_stock: &HashMap<Material, i64>,
) -> Result<Vec<ReorderRecommendation>> {
    for (material, &quantity) in current_stock.iter().chain(minimum_stock) {
        if quantity < 0 {
            return Err(Error::InvalidStock {
                material: material.to_string(),
                quantity,
            });
        }
    }

    let mut recommendations: Vec<ReorderRecommendation> = minimum_stock
        .iter()
        .filter_map(|(&material, &minimum)| {
            let current = current_stock.get(&material).copied().unwrap_or(0);
            let to_order = (minimum - current).max(0);
            (to_order > 0).then_some(ReorderRecommendation {
                material,
                current,
                minimum,
                to_order,
                priority: Priority::High,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.to_order
            .cmp(&a.to_order)
            .then_with(|| a.material.name().cmp(b.material.name()))
    });

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_recommends_only_materials_below_minimum() {
        let current = HashMap::from([(Material::Galvanized, 100), (Material::Black, 10)]);
        let minimum = HashMap::from([(Material::Galvanized, 50), (Material::Black, 30)]);

        let recommendations = recommend(&current, &minimum).unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].material, Material::Black);
        assert_eq!(recommendations[0].current, 10);
        assert_eq!(recommendations[0].minimum, 30);
        assert_eq!(recommendations[0].to_order, 20);
        assert_eq!(recommendations[0].priority, Priority::High);
    }

    #[test]
    fn test_missing_current_stock_counts_as_zero() {
        let current = HashMap::new();
        let minimum = HashMap::from([(Material::Copper, 10)]);

        let recommendations = recommend(&current, &minimum).unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].current, 0);
        assert_eq!(recommendations[0].to_order, 10);
    }

    #[test]
    fn test_sorted_by_to_order_descending() {
        let current = HashMap::from([
            (Material::Galvanized, 5),
            (Material::Black, 25),
            (Material::Pvc, 18),
        ]);
        let minimum = HashMap::from([
            (Material::Galvanized, 50), // to_order 45
            (Material::Black, 30),      // to_order 5
            (Material::Pvc, 20),        // to_order 2
        ]);

        let recommendations = recommend(&current, &minimum).unwrap();
        let order: Vec<i64> = recommendations.iter().map(|r| r.to_order).collect();
        assert_eq!(order, vec![45, 5, 2]);
    }

    #[test]
    fn test_ties_break_by_material_name_ascending() {
        let current = HashMap::from([(Material::Black, 10)]);
        let minimum = HashMap::from([(Material::Black, 30), (Material::Pvc, 20)]);

        // Both need 20; "Black" sorts before "PVC".
        let recommendations = recommend(&current, &minimum).unwrap();
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].material, Material::Black);
        assert_eq!(recommendations[0].to_order, 20);
        assert_eq!(recommendations[1].material, Material::Pvc);
        assert_eq!(recommendations[1].to_order, 20);
    }

    #[test]
    fn test_fully_stocked_warehouse_yields_no_recommendations() {
        let current = HashMap::from([(Material::Galvanized, 60), (Material::Black, 30)]);
        let minimum = HashMap::from([(Material::Galvanized, 50), (Material::Black, 30)]);

        let recommendations = recommend(&current, &minimum).unwrap();
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_negative_current_quantity_is_rejected() {
        let current = HashMap::from([(Material::Black, -5)]);
        let minimum = HashMap::from([(Material::Black, 30)]);

        let result = recommend(&current, &minimum);
        assert!(matches!(
            result,
            Err(Error::InvalidStock { quantity: -5, .. })
        ));
    }

    #[test]
    fn test_negative_minimum_quantity_is_rejected() {
        let current = HashMap::new();
        let minimum = HashMap::from([(Material::Pvc, -1)]);

        assert!(recommend(&current, &minimum).is_err());
    }
}
