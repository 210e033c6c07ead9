//! Structured export of propers texts.
//!
//! # Responsibility
//! - Flatten populated slots into `slot key -> field -> text` mappings.
//! - Serialize that mapping for downstream consumers.
//!
//! # Invariants
//! - Exactly the populated slots appear; absent slots have no entry.
//! - Every field mapping carries `verse` (possibly empty) and `latin`.
//! - Vernacular entries are inserted after the fixed keys and win on collision.

use crate::model::propers::Propers;
use crate::model::reading::{Reading, LATIN};
use log::debug;
use std::collections::BTreeMap;

/// Field key holding the citation in an exported reading.
pub const VERSE: &str = "verse";

/// Field mapping of one reading: `verse`, `latin`, then one key per language.
pub type ReadingExport = BTreeMap<String, String>;

/// Export mapping of one Mass, keyed by lowercase slot name.
pub type PropersExport = BTreeMap<String, ReadingExport>;

/// Flattens one reading into its field mapping.
pub fn export_reading(reading: &Reading) -> ReadingExport {
    let mut fields = ReadingExport::new();
    fields.insert(VERSE.to_string(), reading.verse.clone());
    fields.insert(LATIN.to_string(), reading.latin.clone());
    // A language literally named `verse` or `latin` overwrites the fixed key.
    for (language, text) in &reading.vernacular {
        fields.insert(language.clone(), text.clone());
    }
    fields
}

/// Exports every populated slot of `propers`.
pub fn export_propers(propers: &Propers) -> PropersExport {
    let exported: PropersExport = propers
        .slots()
        .filter_map(|(slot, reading)| {
            reading.map(|reading| (slot.key().to_string(), export_reading(reading)))
        })
        .collect();
    debug!(
        "event=propers_export module=export status=ok slots={}",
        exported.len()
    );
    exported
}

/// Exports `propers` as pretty-printed JSON.
///
/// # Errors
/// - Returns serializer errors unchanged.
pub fn export_propers_json(propers: &Propers) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_propers(propers))
}
