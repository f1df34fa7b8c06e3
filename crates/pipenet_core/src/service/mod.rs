//! Use-case services over the record store.
//!
//! # Responsibility
//! - Orchestrate store calls into single-record and bulk edit operations.
//! - Keep the interactive front end decoupled from storage details.

pub mod batch;
pub mod edit;
