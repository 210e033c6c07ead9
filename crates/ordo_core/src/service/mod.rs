//! Read-only operations over propers.
//!
//! # Responsibility
//! - Render propers for a terminal or any other byte sink.
//! - Export propers as a nested mapping for serialization layers.
//!
//! # Invariants
//! - Both operations walk slots through `Propers::slots`.
//! - Neither operation mutates its input.

pub mod export;
pub mod render;
