//! Single-record edit use-cases.
//!
//! # Responsibility
//! - Resolve one target by ID and apply a validated field update.
//! - Own the clamp-on-shrink rule when station capacity is reduced.
//!
//! # Invariants
//! - Record `id` is never touched by an update.
//! - A not-found target aborts only that single operation.

use crate::model::pipe::PipeValidationError;
use crate::model::station::StationValidationError;
use crate::model::RecordId;
use crate::store::inventory::Inventory;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for single-record edit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    PipeNotFound(RecordId),
    StationNotFound(RecordId),
    InvalidPipe(PipeValidationError),
    InvalidStation(StationValidationError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PipeNotFound(id) => write!(f, "pipe not found: {id}"),
            Self::StationNotFound(id) => write!(f, "station not found: {id}"),
            Self::InvalidPipe(err) => write!(f, "{err}"),
            Self::InvalidStation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPipe(err) => Some(err),
            Self::InvalidStation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PipeValidationError> for EditError {
    fn from(value: PipeValidationError) -> Self {
        Self::InvalidPipe(value)
    }
}

impl From<StationValidationError> for EditError {
    fn from(value: StationValidationError) -> Self {
        Self::InvalidStation(value)
    }
}

/// Replacement fields for a pipe edit. `under_repair` is left alone; the
/// repair flag has its own toggle path.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeUpdate {
    pub name: String,
    pub length_km: f64,
    pub diameter_mm: u32,
}

/// Replacement fields for a station edit. `active_workshops` is not part of
/// the update; it only moves through workshop start/stop and the shrink
/// clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationUpdate {
    pub name: String,
    pub total_workshops: u32,
    pub station_class: u32,
}

/// Direction for a single-station workshop adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkshopAction {
    Start,
    Stop,
}

/// Overwrites a pipe's editable fields.
pub fn update_pipe(
    inventory: &mut Inventory,
    id: RecordId,
    update: PipeUpdate,
) -> Result<(), EditError> {
    let position = inventory.find_pipe(id).ok_or(EditError::PipeNotFound(id))?;
    let staged = {
        let current = inventory
            .pipe_at(position)
            .ok_or(EditError::PipeNotFound(id))?;
        let mut staged = current.clone();
        staged.name = update.name;
        staged.length_km = update.length_km;
        staged.diameter_mm = update.diameter_mm;
        staged
    };
    staged.validate()?;
    inventory.with_pipe_mut(position, |pipe| *pipe = staged);
    info!("event=pipe_updated module=service id={id}");
    Ok(())
}

/// Toggles a pipe's repair flag and returns the new state.
pub fn toggle_pipe_repair(inventory: &mut Inventory, id: RecordId) -> Result<bool, EditError> {
    let position = inventory.find_pipe(id).ok_or(EditError::PipeNotFound(id))?;
    let now_under_repair = inventory
        .with_pipe_mut(position, |pipe| pipe.toggle_repair())
        .ok_or(EditError::PipeNotFound(id))?;
    info!("event=pipe_repair_toggled module=service id={id} under_repair={now_under_repair}");
    Ok(now_under_repair)
}

/// Overwrites a station's editable fields, clamping the active-workshop
/// count when the new capacity is below it.
pub fn update_station(
    inventory: &mut Inventory,
    id: RecordId,
    update: StationUpdate,
) -> Result<(), EditError> {
    let position = inventory
        .find_station(id)
        .ok_or(EditError::StationNotFound(id))?;
    let staged = {
        let current = inventory
            .station_at(position)
            .ok_or(EditError::StationNotFound(id))?;
        let mut staged = current.clone();
        staged.name = update.name;
        staged.set_total_workshops(update.total_workshops);
        staged.station_class = update.station_class;
        staged
    };
    staged.validate()?;
    inventory.with_station_mut(position, |station| *station = staged);
    info!("event=station_updated module=service id={id}");
    Ok(())
}

/// Starts or stops one workshop on a single station.
///
/// Returns `false` when the station is already at the relevant bound; the
/// record is left unchanged and this is not an error.
pub fn adjust_workshops(
    inventory: &mut Inventory,
    id: RecordId,
    action: WorkshopAction,
) -> Result<bool, EditError> {
    let position = inventory
        .find_station(id)
        .ok_or(EditError::StationNotFound(id))?;
    let changed = inventory
        .with_station_mut(position, |station| match action {
            WorkshopAction::Start => station.start_workshop(),
            WorkshopAction::Stop => station.stop_workshop(),
        })
        .ok_or(EditError::StationNotFound(id))?;
    info!("event=station_workshops_adjusted module=service id={id} changed={changed}");
    Ok(changed)
}
