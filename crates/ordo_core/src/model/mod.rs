//! Domain model for the propers of a Mass.
//!
//! # Responsibility
//! - Define the reading and propers records read by render/export.
//! - Define the closed slot set and its canonical order.
//!
//! # Invariants
//! - Records are built once by the caller and only read afterwards.

pub mod propers;
pub mod reading;
pub mod slot;
