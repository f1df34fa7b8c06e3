//! Domain model for pipeline inventory records.
//!
//! # Responsibility
//! - Define the two canonical record kinds: pipes and compressor stations.
//! - Keep field-level validation next to the data it protects.
//!
//! # Invariants
//! - Every record carries a positive `RecordId` that is never reassigned.
//! - Station records always satisfy `active_workshops <= total_workshops`.

pub mod pipe;
pub mod station;

/// Stable per-kind identifier for inventory records.
///
/// Issued by the store's ID allocator, strictly increasing, never reused
/// after deletion. Kept as a type alias to make semantic intent explicit in
/// signatures.
pub type RecordId = u64;
