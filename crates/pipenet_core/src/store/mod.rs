//! Record store: identity allocation and the owned inventory collections.
//!
//! # Responsibility
//! - Issue unique, monotonically increasing IDs per record kind.
//! - Own both record collections and every mutation path into them.
//!
//! # Invariants
//! - IDs are never reused within a kind, even after deletion.
//! - Collection order is insertion order; positions shift on deletion, IDs
//!   do not.

pub mod id_alloc;
pub mod inventory;
