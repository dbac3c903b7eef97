//! Object key conventions.
//!
//! Pure string functions, no I/O. These define the canonical layout of
//! records under the store's root directory.

use uuid::Uuid;

pub const PATIENTS_PREFIX: &str = "patients/";

pub const SCREENINGS_PREFIX: &str = "screenings/";

pub fn patient(id: Uuid) -> String {
    format!("{PATIENTS_PREFIX}{id}.json")
}

pub fn screening(id: Uuid) -> String {
    format!("{SCREENINGS_PREFIX}{id}.json")
}
