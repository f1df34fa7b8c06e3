//! Filter-predicate selection.
//!
//! # Responsibility
//! - Resolve search predicates into position selections over the store.
//! - Keep predicate semantics (case folding, comparison tolerance) in one
//!   place.
//!
//! # Invariants
//! - Zero matches yield an empty selection, never an error.
//! - Name matching compares lower-cased forms on both sides.

use crate::select::Selection;
use crate::store::inventory::Inventory;

/// Absolute tolerance for approximate-equality comparisons on the derived
/// idle-workshop percentage.
pub const IDLE_PERCENT_TOLERANCE: f64 = 0.01;

/// Comparison operator for numeric filter predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericCmp {
    Greater,
    Less,
    /// Matches when `|value - target| <= IDLE_PERCENT_TOLERANCE`.
    Approx,
}

impl NumericCmp {
    pub fn matches(self, value: f64, target: f64) -> bool {
        match self {
            Self::Greater => value > target,
            Self::Less => value < target,
            Self::Approx => (value - target).abs() <= IDLE_PERCENT_TOLERANCE,
        }
    }
}

/// Pipes whose name contains `term`, case-insensitively.
pub fn pipes_by_name(inventory: &Inventory, term: &str) -> Selection {
    let needle = term.to_lowercase();
    Selection::from_positions(
        inventory
            .pipes()
            .iter()
            .enumerate()
            .filter(|(_, pipe)| pipe.name.to_lowercase().contains(&needle))
            .map(|(position, _)| position)
            .collect(),
    )
}

/// Stations whose name contains `term`, case-insensitively.
pub fn stations_by_name(inventory: &Inventory, term: &str) -> Selection {
    let needle = term.to_lowercase();
    Selection::from_positions(
        inventory
            .stations()
            .iter()
            .enumerate()
            .filter(|(_, station)| station.name.to_lowercase().contains(&needle))
            .map(|(position, _)| position)
            .collect(),
    )
}

/// Pipes whose repair flag equals `under_repair` exactly.
pub fn pipes_by_repair(inventory: &Inventory, under_repair: bool) -> Selection {
    Selection::from_positions(
        inventory
            .pipes()
            .iter()
            .enumerate()
            .filter(|(_, pipe)| pipe.under_repair == under_repair)
            .map(|(position, _)| position)
            .collect(),
    )
}

/// Stations whose idle-workshop percentage satisfies `cmp` against `target`.
pub fn stations_by_idle_percent(inventory: &Inventory, cmp: NumericCmp, target: f64) -> Selection {
    Selection::from_positions(
        inventory
            .stations()
            .iter()
            .enumerate()
            .filter(|(_, station)| cmp.matches(station.inactive_percent(), target))
            .map(|(position, _)| position)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::NumericCmp;

    #[test]
    fn approx_uses_absolute_tolerance() {
        assert!(NumericCmp::Approx.matches(30.0, 30.0));
        assert!(NumericCmp::Approx.matches(30.0, 30.005));
        assert!(NumericCmp::Approx.matches(30.0, 29.995));
        assert!(!NumericCmp::Approx.matches(30.0, 30.02));
    }

    #[test]
    fn greater_and_less_are_strict() {
        assert!(!NumericCmp::Greater.matches(30.0, 30.0));
        assert!(NumericCmp::Greater.matches(30.1, 30.0));
        assert!(!NumericCmp::Less.matches(30.0, 30.0));
        assert!(NumericCmp::Less.matches(29.9, 30.0));
    }
}
