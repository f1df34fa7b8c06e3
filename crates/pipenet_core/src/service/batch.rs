//! Batch mutator: one rule applied across a whole selection.
//!
//! # Responsibility
//! - Walk a position selection once and apply a single mutation rule per
//!   record.
//! - Own the descending-order walk for deletion batches.
//!
//! # Invariants
//! - Workshop start/stop respects the `[0, total_workshops]` bound per
//!   record; saturated records are silently left unchanged.
//! - The reported count is the selection size, regardless of how many
//!   records actually changed.
//! - There is no rollback; each record's mutation is independent and final.

use crate::select::Selection;
use crate::store::inventory::Inventory;
use log::info;

/// Mutation rule for a pipe selection.
///
/// Overwrite values are assumed range-checked by the caller (the input
/// collaborator), matching the store's draft validation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeBatchEdit {
    /// Overwrite `diameter_mm` on every selected pipe.
    SetDiameter(u32),
    /// Force the repair flag to the given state.
    SetRepair(bool),
    /// Invert the repair flag per record.
    ToggleRepair,
}

/// Mutation rule for a station selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationBatchEdit {
    /// Start one workshop per station, where capacity allows.
    StartWorkshop,
    /// Stop one workshop per station, where any is running.
    StopWorkshop,
    /// Overwrite `station_class` on every selected station.
    SetClass(u32),
}

/// Applies one rule to every selected pipe. Returns the selection size.
pub fn apply_pipe_edit(
    inventory: &mut Inventory,
    selection: &Selection,
    edit: PipeBatchEdit,
) -> usize {
    for &position in selection.positions() {
        inventory.with_pipe_mut(position, |pipe| match edit {
            PipeBatchEdit::SetDiameter(diameter_mm) => pipe.diameter_mm = diameter_mm,
            PipeBatchEdit::SetRepair(under_repair) => pipe.under_repair = under_repair,
            PipeBatchEdit::ToggleRepair => {
                pipe.toggle_repair();
            }
        });
    }
    info!(
        "event=batch_pipe_edit module=service rule={edit:?} selected={}",
        selection.len()
    );
    selection.len()
}

/// Applies one rule to every selected station. Returns the selection size.
///
/// Workshop rules skip records already at the relevant bound without
/// reporting them separately.
pub fn apply_station_edit(
    inventory: &mut Inventory,
    selection: &Selection,
    edit: StationBatchEdit,
) -> usize {
    for &position in selection.positions() {
        inventory.with_station_mut(position, |station| match edit {
            StationBatchEdit::StartWorkshop => {
                station.start_workshop();
            }
            StationBatchEdit::StopWorkshop => {
                station.stop_workshop();
            }
            StationBatchEdit::SetClass(station_class) => station.station_class = station_class,
        });
    }
    info!(
        "event=batch_station_edit module=service rule={edit:?} selected={}",
        selection.len()
    );
    selection.len()
}

/// Deletes every selected pipe. Returns the number of records removed.
///
/// Walks positions descending so earlier removals cannot shift later
/// targets within the same batch.
pub fn remove_selected_pipes(inventory: &mut Inventory, selection: &Selection) -> usize {
    let mut removed = 0;
    for position in selection.for_removal() {
        if inventory.remove_pipe_at(position).is_some() {
            removed += 1;
        }
    }
    info!("event=batch_pipe_delete module=service removed={removed}");
    removed
}

/// Deletes every selected station. Returns the number of records removed.
pub fn remove_selected_stations(inventory: &mut Inventory, selection: &Selection) -> usize {
    let mut removed = 0;
    for position in selection.for_removal() {
        if inventory.remove_station_at(position).is_some() {
            removed += 1;
        }
    }
    info!("event=batch_station_delete module=service removed={removed}");
    removed
}
