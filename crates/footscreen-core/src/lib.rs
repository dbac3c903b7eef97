//! footscreen-core
//!
//! Pure domain types and storage key conventions.
//! No I/O. This is the shared vocabulary of the Footscreen system.

pub mod error;
pub mod keys;
pub mod models;
pub mod report;
