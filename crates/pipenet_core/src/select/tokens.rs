//! Explicit ID-token selection parsing.
//!
//! # Responsibility
//! - Parse comma-separated ID lists and the case-insensitive `all` wildcard.
//! - Map surviving IDs to store positions, collecting per-token warnings.
//!
//! # Invariants
//! - A bad token never fails the whole selection; it is skipped and reported
//!   as a warning.
//! - The resulting position set is deduplicated and ascending.

use crate::model::RecordId;
use crate::select::Selection;
use crate::store::inventory::Inventory;
use log::debug;
use std::fmt::{Display, Formatter};

const ALL_WILDCARD: &str = "all";

/// Per-token problem encountered while resolving a selection.
///
/// Warnings are data, not errors: the selection proceeds with the remaining
/// valid tokens and the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenWarning {
    /// Token is not a valid positive integer.
    Unparsable(String),
    /// Token parsed, but no live record carries this ID.
    UnknownId(RecordId),
}

impl Display for TokenWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparsable(token) => write!(f, "skipped token `{token}`: not a record ID"),
            Self::UnknownId(id) => write!(f, "skipped ID {id}: no such record"),
        }
    }
}

/// Outcome of token resolution: the usable selection plus skipped tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSelection {
    pub selection: Selection,
    pub warnings: Vec<TokenWarning>,
}

/// Resolves a token list against the pipe collection.
pub fn select_pipes(inventory: &Inventory, input: &str) -> TokenSelection {
    resolve(input, inventory.pipe_count(), |id| inventory.find_pipe(id))
}

/// Resolves a token list against the station collection.
pub fn select_stations(inventory: &Inventory, input: &str) -> TokenSelection {
    resolve(input, inventory.station_count(), |id| {
        inventory.find_station(id)
    })
}

fn resolve(
    input: &str,
    record_count: usize,
    find: impl Fn(RecordId) -> Option<usize>,
) -> TokenSelection {
    if input.trim().eq_ignore_ascii_case(ALL_WILDCARD) {
        return TokenSelection {
            selection: Selection::all(record_count),
            warnings: Vec::new(),
        };
    }

    let mut positions = Vec::new();
    let mut warnings = Vec::new();

    for raw in input.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<RecordId>() {
            Ok(id) => match find(id) {
                Some(position) => positions.push(position),
                None => warnings.push(TokenWarning::UnknownId(id)),
            },
            Err(_) => warnings.push(TokenWarning::Unparsable(token.to_string())),
        }
    }

    if !warnings.is_empty() {
        debug!(
            "event=selection_tokens_skipped module=select skipped={}",
            warnings.len()
        );
    }

    TokenSelection {
        selection: Selection::from_positions(positions),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::select::tokens::TokenWarning;

    // Five fake records with IDs 10, 20, 30, 40, 50 at positions 0..5.
    fn find_fake(id: u64) -> Option<usize> {
        (id >= 10 && id <= 50 && id % 10 == 0).then(|| (id / 10 - 1) as usize)
    }

    #[test]
    fn wildcard_is_case_insensitive() {
        for input in ["all", "ALL", " All "] {
            let resolved = resolve(input, 5, find_fake);
            assert_eq!(resolved.selection.positions(), &[0, 1, 2, 3, 4]);
            assert!(resolved.warnings.is_empty());
        }
    }

    #[test]
    fn bad_tokens_are_skipped_with_warnings() {
        let resolved = resolve("10,oops,20,99", 5, find_fake);
        assert_eq!(resolved.selection.positions(), &[0, 1]);
        assert_eq!(
            resolved.warnings,
            vec![
                TokenWarning::Unparsable("oops".to_string()),
                TokenWarning::UnknownId(99),
            ]
        );
    }

    #[test]
    fn empty_tokens_between_commas_are_ignored() {
        let resolved = resolve("10,,20,", 5, find_fake);
        assert_eq!(resolved.selection.positions(), &[0, 1]);
        assert!(resolved.warnings.is_empty());
    }
}
