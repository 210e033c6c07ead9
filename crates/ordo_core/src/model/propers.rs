//! Propers domain model.
//!
//! # Responsibility
//! - Group the readings of one Mass under their slots.
//! - Provide the single slot walk used by render and export.
//!
//! # Invariants
//! - Slot presence is independent; any subset may be populated.
//! - `slots()` always yields all eleven slots in canonical order.
//! - `id` is carried for cross-referencing and never validated here.

use crate::model::reading::Reading;
use crate::model::slot::Slot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The variable texts assigned to one Mass.
///
/// Serialized as `{"id": ..., "<slot key>": {reading}, ...}`; absent slots
/// are not written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Propers {
    /// Cross-reference handle, e.g. for commemorations reusing texts.
    pub id: String,
    #[serde(flatten)]
    readings: BTreeMap<Slot, Reading>,
}

impl Propers {
    /// Creates propers with every slot absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            readings: BTreeMap::new(),
        }
    }

    /// Places `reading` into `slot`, replacing any earlier reading there.
    pub fn with_reading(mut self, slot: Slot, reading: Reading) -> Self {
        self.readings.insert(slot, reading);
        self
    }

    /// Returns the reading held by `slot`, if any.
    pub fn reading(&self, slot: Slot) -> Option<&Reading> {
        self.readings.get(&slot)
    }

    pub fn is_populated(&self, slot: Slot) -> bool {
        self.readings.contains_key(&slot)
    }

    /// Populated slots in canonical order.
    pub fn populated_slots(&self) -> Vec<Slot> {
        self.readings.keys().copied().collect()
    }

    /// Returns a copy holding only the readings of `slots`.
    ///
    /// Slots that are absent here stay absent; `id` is kept.
    pub fn select(&self, slots: &[Slot]) -> Propers {
        let readings = self
            .readings
            .iter()
            .filter(|(slot, _)| slots.contains(*slot))
            .map(|(slot, reading)| (*slot, reading.clone()))
            .collect();
        Propers {
            id: self.id.clone(),
            readings,
        }
    }

    /// Walks all eleven slots in canonical order with their optional reading.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Option<&Reading>)> + '_ {
        Slot::ALL
            .into_iter()
            .map(move |slot| (slot, self.readings.get(&slot)))
    }
}
