//! Core domain logic for PipeNet, an interactive pipeline and
//! compressor-station inventory.
//!
//! This crate is the single source of truth for business invariants: unique
//! monotonic record IDs, workshop-capacity bounds, selection semantics and
//! the save-file format. The interactive front end lives in `pipenet_cli`.

pub mod codec;
pub mod logging;
pub mod model;
pub mod select;
pub mod service;
pub mod store;

pub use codec::{load_from_path, read_inventory, save_to_path, write_inventory};
pub use codec::{CodecError, CodecResult};
pub use logging::{default_log_level, init_logging};
pub use model::pipe::{Pipe, PipeDraft, PipeValidationError};
pub use model::station::{CompressorStation, StationDraft, StationValidationError};
pub use model::RecordId;
pub use select::filter::{
    pipes_by_name, pipes_by_repair, stations_by_idle_percent, stations_by_name, NumericCmp,
    IDLE_PERCENT_TOLERANCE,
};
pub use select::tokens::{select_pipes, select_stations, TokenSelection, TokenWarning};
pub use select::Selection;
pub use service::batch::{
    apply_pipe_edit, apply_station_edit, remove_selected_pipes, remove_selected_stations,
    PipeBatchEdit, StationBatchEdit,
};
pub use service::edit::{
    adjust_workshops, toggle_pipe_repair, update_pipe, update_station, EditError, PipeUpdate,
    StationUpdate, WorkshopAction,
};
pub use store::id_alloc::IdAllocator;
pub use store::inventory::Inventory;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
