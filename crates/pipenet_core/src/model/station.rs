//! Compressor station domain model.
//!
//! # Responsibility
//! - Define the station record, its draft form, and workshop bookkeeping.
//! - Own the workshop-capacity invariant and the clamp-on-shrink rule.
//!
//! # Invariants
//! - `id` is positive, stable, and never reused for another station.
//! - `0 <= active_workshops <= total_workshops` holds after every mutation.
//! - `total_workshops` and `station_class` are at least 1.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for station drafts and decoded station records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationValidationError {
    /// `id` must be a positive integer.
    NonPositiveId,
    /// `name` must contain at least one non-whitespace character.
    EmptyName,
    /// `name` must fit on a single line of the save format.
    NameHoldsLineBreak,
    /// `total_workshops` must be at least 1.
    ZeroWorkshops,
    /// `active_workshops` must not exceed `total_workshops`.
    ActiveExceedsTotal { active: u32, total: u32 },
    /// `station_class` must be at least 1.
    ZeroClass,
}

impl Display for StationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "station id must be positive"),
            Self::EmptyName => write!(f, "station name cannot be empty"),
            Self::NameHoldsLineBreak => write!(f, "station name cannot contain line breaks"),
            Self::ZeroWorkshops => write!(f, "station must have at least one workshop"),
            Self::ActiveExceedsTotal { active, total } => write!(
                f,
                "active workshops ({active}) cannot exceed total workshops ({total})"
            ),
            Self::ZeroClass => write!(f, "station class must be at least 1"),
        }
    }
}

impl Error for StationValidationError {}

/// Compressor station record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorStation {
    /// Stable allocator-issued ID. Immutable after creation.
    pub id: RecordId,
    /// Human-readable station name.
    pub name: String,
    /// Total workshop capacity. At least 1.
    pub total_workshops: u32,
    /// Currently running workshops. Never exceeds `total_workshops`.
    pub active_workshops: u32,
    /// Station class rating. At least 1.
    pub station_class: u32,
}

impl CompressorStation {
    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), StationValidationError> {
        if self.id == 0 {
            return Err(StationValidationError::NonPositiveId);
        }
        validate_name(&self.name)?;
        if self.total_workshops == 0 {
            return Err(StationValidationError::ZeroWorkshops);
        }
        if self.active_workshops > self.total_workshops {
            return Err(StationValidationError::ActiveExceedsTotal {
                active: self.active_workshops,
                total: self.total_workshops,
            });
        }
        if self.station_class == 0 {
            return Err(StationValidationError::ZeroClass);
        }
        Ok(())
    }

    /// Starts one workshop if capacity allows.
    ///
    /// Returns `false` when all workshops are already running; the record is
    /// left unchanged in that case.
    pub fn start_workshop(&mut self) -> bool {
        if self.active_workshops < self.total_workshops {
            self.active_workshops += 1;
            return true;
        }
        false
    }

    /// Stops one workshop if any is running.
    ///
    /// Returns `false` when no workshop is running; the record is left
    /// unchanged in that case.
    pub fn stop_workshop(&mut self) -> bool {
        if self.active_workshops > 0 {
            self.active_workshops -= 1;
            return true;
        }
        false
    }

    /// Replaces the workshop capacity, clamping `active_workshops` down when
    /// the new total is smaller than the current running count.
    pub fn set_total_workshops(&mut self, new_total: u32) {
        if self.active_workshops > new_total {
            self.active_workshops = new_total;
        }
        self.total_workshops = new_total;
    }

    /// Share of idle workshops as a percentage in `[0, 100]`.
    ///
    /// Defined as 0 for a zero-capacity station so the metric stays total,
    /// although validation never lets such a station become live.
    pub fn inactive_percent(&self) -> f64 {
        if self.total_workshops == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.total_workshops - self.active_workshops)
            / f64::from(self.total_workshops)
    }
}

impl Display for CompressorStation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | workshops {}/{} active | class {}",
            self.id, self.name, self.active_workshops, self.total_workshops, self.station_class
        )
    }
}

/// Draft for a station that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDraft {
    pub name: String,
    pub total_workshops: u32,
    pub active_workshops: u32,
    pub station_class: u32,
}

impl StationDraft {
    pub fn validate(&self) -> Result<(), StationValidationError> {
        validate_name(&self.name)?;
        if self.total_workshops == 0 {
            return Err(StationValidationError::ZeroWorkshops);
        }
        if self.active_workshops > self.total_workshops {
            return Err(StationValidationError::ActiveExceedsTotal {
                active: self.active_workshops,
                total: self.total_workshops,
            });
        }
        if self.station_class == 0 {
            return Err(StationValidationError::ZeroClass);
        }
        Ok(())
    }

    /// Materializes the draft into a live record with the given ID.
    pub(crate) fn into_station(self, id: RecordId) -> CompressorStation {
        CompressorStation {
            id,
            name: self.name,
            total_workshops: self.total_workshops,
            active_workshops: self.active_workshops,
            station_class: self.station_class,
        }
    }
}

fn validate_name(name: &str) -> Result<(), StationValidationError> {
    if name.trim().is_empty() {
        return Err(StationValidationError::EmptyName);
    }
    if name.contains(['\n', '\r']) {
        return Err(StationValidationError::NameHoldsLineBreak);
    }
    Ok(())
}
