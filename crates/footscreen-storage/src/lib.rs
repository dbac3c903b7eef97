//! footscreen-storage
//!
//! Local record store. Every record is a JSON object under a root
//! directory, addressed by the keys in `footscreen_core::keys`.

pub mod error;
pub mod history;
pub mod json;
pub mod objects;
pub mod records;
