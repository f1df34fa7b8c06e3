//! Selection resolution for bulk operations and search.
//!
//! # Responsibility
//! - Turn user-entered ID token lists (or the `all` wildcard) into validated
//!   position sets.
//! - Turn filter predicates into the same kind of position set.
//!
//! # Invariants
//! - A selection is always deduplicated and sorted ascending.
//! - Deletion consumers must iterate via [`Selection::for_removal`], which
//!   yields positions descending so earlier removals cannot shift later
//!   targets.

pub mod filter;
pub mod tokens;

/// Deduplicated, ascending set of record positions within one collection.
///
/// Positions are only valid until the next mutating store call; selections
/// are resolved at use time and never cached across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    positions: Vec<usize>,
}

impl Selection {
    /// Normalizes arbitrary positions into a selection: sorted ascending,
    /// duplicates removed.
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    /// Selection covering every position of a collection with `len` records.
    pub fn all(len: usize) -> Self {
        Self {
            positions: (0..len).collect(),
        }
    }

    /// Positions in ascending order, for display and edit walks.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Positions in descending order, for deletion batches.
    pub fn for_removal(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Empty selections mean "operation aborted, no records touched".
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn from_positions_sorts_and_dedups() {
        let selection = Selection::from_positions(vec![4, 1, 4, 0, 1]);
        assert_eq!(selection.positions(), &[0, 1, 4]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn for_removal_yields_descending_positions() {
        let selection = Selection::from_positions(vec![2, 0, 5]);
        let order: Vec<usize> = selection.for_removal().collect();
        assert_eq!(order, vec![5, 2, 0]);
    }

    #[test]
    fn all_covers_every_position() {
        let selection = Selection::all(3);
        assert_eq!(selection.positions(), &[0, 1, 2]);
        assert!(Selection::all(0).is_empty());
    }
}
