//! Pipe domain model.
//!
//! # Responsibility
//! - Define the pipeline-segment record and its draft form.
//! - Validate physical dimensions before a record becomes live.
//!
//! # Invariants
//! - `id` is positive, stable, and never reused for another pipe.
//! - `length_km` is strictly positive; `diameter_mm` is at least 1.
//! - `name` is non-empty and holds no line breaks (the save format is
//!   line-oriented).

use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for pipe drafts and decoded pipe records.
#[derive(Debug, Clone, PartialEq)]
pub enum PipeValidationError {
    /// `id` must be a positive integer.
    NonPositiveId,
    /// `name` must contain at least one non-whitespace character.
    EmptyName,
    /// `name` must fit on a single line of the save format.
    NameHoldsLineBreak,
    /// `length_km` must be a finite number greater than zero.
    InvalidLength(f64),
    /// `diameter_mm` must be at least 1.
    ZeroDiameter,
}

impl Display for PipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "pipe id must be positive"),
            Self::EmptyName => write!(f, "pipe name cannot be empty"),
            Self::NameHoldsLineBreak => write!(f, "pipe name cannot contain line breaks"),
            Self::InvalidLength(value) => {
                write!(f, "pipe length must be a positive number, got {value}")
            }
            Self::ZeroDiameter => write!(f, "pipe diameter must be at least 1 mm"),
        }
    }
}

impl Error for PipeValidationError {}

/// Pipeline segment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Stable allocator-issued ID. Immutable after creation.
    pub id: RecordId,
    /// Human-readable segment name.
    pub name: String,
    /// Segment length in kilometers. Strictly positive.
    pub length_km: f64,
    /// Segment diameter in millimeters. At least 1.
    pub diameter_mm: u32,
    /// Whether the segment is currently pulled out of service for repair.
    pub under_repair: bool,
}

impl Pipe {
    /// Checks record-level invariants.
    ///
    /// Called by the store before a pipe becomes live and by the codec on
    /// every decoded record.
    pub fn validate(&self) -> Result<(), PipeValidationError> {
        if self.id == 0 {
            return Err(PipeValidationError::NonPositiveId);
        }
        validate_name(&self.name)?;
        if !self.length_km.is_finite() || self.length_km <= 0.0 {
            return Err(PipeValidationError::InvalidLength(self.length_km));
        }
        if self.diameter_mm == 0 {
            return Err(PipeValidationError::ZeroDiameter);
        }
        Ok(())
    }

    /// Flips the repair flag and returns the new state.
    pub fn toggle_repair(&mut self) -> bool {
        self.under_repair = !self.under_repair;
        self.under_repair
    }
}

impl Display for Pipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | length {} km | diameter {} mm | {}",
            self.id,
            self.name,
            self.length_km,
            self.diameter_mm,
            if self.under_repair {
                "under repair"
            } else {
                "in service"
            }
        )
    }
}

/// Draft for a pipe that has not been assigned an ID yet.
///
/// The store validates a draft and turns it into a live [`Pipe`] with an
/// allocator-issued ID.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeDraft {
    pub name: String,
    pub length_km: f64,
    pub diameter_mm: u32,
}

impl PipeDraft {
    pub fn validate(&self) -> Result<(), PipeValidationError> {
        validate_name(&self.name)?;
        if !self.length_km.is_finite() || self.length_km <= 0.0 {
            return Err(PipeValidationError::InvalidLength(self.length_km));
        }
        if self.diameter_mm == 0 {
            return Err(PipeValidationError::ZeroDiameter);
        }
        Ok(())
    }

    /// Materializes the draft into a live record with the given ID.
    pub(crate) fn into_pipe(self, id: RecordId) -> Pipe {
        Pipe {
            id,
            name: self.name,
            length_km: self.length_km,
            diameter_mm: self.diameter_mm,
            under_repair: false,
        }
    }
}

fn validate_name(name: &str) -> Result<(), PipeValidationError> {
    if name.trim().is_empty() {
        return Err(PipeValidationError::EmptyName);
    }
    if name.contains(['\n', '\r']) {
        return Err(PipeValidationError::NameHoldsLineBreak);
    }
    Ok(())
}
