//! Core domain logic for the Ordo propers model.
//! This crate is the single source of truth for reading/propers invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::propers::Propers;
pub use model::reading::{is_latin, Reading, LATIN};
pub use model::slot::{Slot, SlotParseError};
pub use service::export::{
    export_propers, export_propers_json, export_reading, PropersExport, ReadingExport, VERSE,
};
pub use service::render::{print_set_fields, render_propers, render_reading};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
