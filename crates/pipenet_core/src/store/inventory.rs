//! Inventory record store.
//!
//! # Responsibility
//! - Own the pipe and station collections plus their ID allocators.
//! - Expose read-only slices for display/search and targeted mutation
//!   handles for edit/delete paths.
//!
//! # Invariants
//! - Every live record has passed validation before insertion.
//! - `id` is pinned across mutation handles; no closure can change it.
//! - Lookups return position sentinels (`Option`), never panic.

use crate::model::pipe::{Pipe, PipeDraft, PipeValidationError};
use crate::model::station::{CompressorStation, StationDraft, StationValidationError};
use crate::model::RecordId;
use crate::store::id_alloc::IdAllocator;
use log::debug;

/// Owned store for both record kinds.
///
/// Collections keep insertion order. Positions shift down on deletion; IDs
/// never do, so callers must re-resolve positions after any mutating call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pipes: Vec<Pipe>,
    stations: Vec<CompressorStation>,
    pipe_ids: IdAllocator,
    station_ids: IdAllocator,
}

impl Inventory {
    /// Empty store with fresh allocators (first IDs will be 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that resumes ID allocation from persisted counters.
    pub fn resume_ids(next_pipe_id: RecordId, next_station_id: RecordId) -> Self {
        Self {
            pipes: Vec::new(),
            stations: Vec::new(),
            pipe_ids: IdAllocator::resume_at(next_pipe_id),
            station_ids: IdAllocator::resume_at(next_station_id),
        }
    }

    /// Validates a draft and appends it as a live pipe.
    ///
    /// Returns the allocator-issued ID of the new record.
    pub fn add_pipe(&mut self, draft: PipeDraft) -> Result<RecordId, PipeValidationError> {
        draft.validate()?;
        let id = self.pipe_ids.allocate();
        self.pipes.push(draft.into_pipe(id));
        debug!("event=pipe_added module=store id={id}");
        Ok(id)
    }

    /// Validates a draft and appends it as a live station.
    pub fn add_station(&mut self, draft: StationDraft) -> Result<RecordId, StationValidationError> {
        draft.validate()?;
        let id = self.station_ids.allocate();
        self.stations.push(draft.into_station(id));
        debug!("event=station_added module=store id={id}");
        Ok(id)
    }

    /// Read-only view of all pipes in insertion order.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Read-only view of all stations in insertion order.
    pub fn stations(&self) -> &[CompressorStation] {
        &self.stations
    }

    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty() && self.stations.is_empty()
    }

    /// Position of the pipe with the given ID, if any.
    ///
    /// Linear scan by design: volumes are small and no side index can drift
    /// out of sync with insert/delete.
    pub fn find_pipe(&self, id: RecordId) -> Option<usize> {
        self.pipes.iter().position(|pipe| pipe.id == id)
    }

    /// Position of the station with the given ID, if any.
    pub fn find_station(&self, id: RecordId) -> Option<usize> {
        self.stations.iter().position(|station| station.id == id)
    }

    pub fn pipe_at(&self, position: usize) -> Option<&Pipe> {
        self.pipes.get(position)
    }

    pub fn station_at(&self, position: usize) -> Option<&CompressorStation> {
        self.stations.get(position)
    }

    /// Runs a mutation closure against the pipe at `position`.
    ///
    /// The record's `id` is restored after the closure returns, so identity
    /// cannot be rewritten through this handle. Returns `None` when the
    /// position is out of range.
    pub fn with_pipe_mut<T>(
        &mut self,
        position: usize,
        mutate: impl FnOnce(&mut Pipe) -> T,
    ) -> Option<T> {
        let pipe = self.pipes.get_mut(position)?;
        let id = pipe.id;
        let out = mutate(pipe);
        pipe.id = id;
        Some(out)
    }

    /// Runs a mutation closure against the station at `position`.
    ///
    /// Same identity-pinning contract as [`with_pipe_mut`](Self::with_pipe_mut).
    pub fn with_station_mut<T>(
        &mut self,
        position: usize,
        mutate: impl FnOnce(&mut CompressorStation) -> T,
    ) -> Option<T> {
        let station = self.stations.get_mut(position)?;
        let id = station.id;
        let out = mutate(station);
        station.id = id;
        Some(out)
    }

    /// Removes the pipe at `position` and returns it.
    ///
    /// Positions after `position` shift down by one; batches must remove in
    /// descending position order (see `Selection::for_removal`).
    pub fn remove_pipe_at(&mut self, position: usize) -> Option<Pipe> {
        if position >= self.pipes.len() {
            return None;
        }
        let pipe = self.pipes.remove(position);
        debug!("event=pipe_removed module=store id={}", pipe.id);
        Some(pipe)
    }

    /// Removes the station at `position` and returns it.
    pub fn remove_station_at(&mut self, position: usize) -> Option<CompressorStation> {
        if position >= self.stations.len() {
            return None;
        }
        let station = self.stations.remove(position);
        debug!("event=station_removed module=store id={}", station.id);
        Some(station)
    }

    /// ID the pipe allocator would issue next. Persisted by the codec.
    pub fn next_pipe_id(&self) -> RecordId {
        self.pipe_ids.next_id()
    }

    /// ID the station allocator would issue next. Persisted by the codec.
    pub fn next_station_id(&self) -> RecordId {
        self.station_ids.next_id()
    }

    /// Re-inserts a decoded pipe with its persisted ID.
    ///
    /// The allocator is advanced past the record's ID so a later insert can
    /// never collide, even when the save file carried no counter header.
    pub fn restore_pipe(&mut self, pipe: Pipe) -> Result<(), PipeValidationError> {
        pipe.validate()?;
        self.pipe_ids.ensure_above(pipe.id);
        self.pipes.push(pipe);
        Ok(())
    }

    /// Re-inserts a decoded station with its persisted ID.
    pub fn restore_station(
        &mut self,
        station: CompressorStation,
    ) -> Result<(), StationValidationError> {
        station.validate()?;
        self.station_ids.ensure_above(station.id);
        self.stations.push(station);
        Ok(())
    }
}
