//! Slot identifiers for the variable parts of one Mass.
//!
//! # Responsibility
//! - Name the eleven positions a reading may occupy within propers.
//! - Own the canonical ordering shared by render and export.
//!
//! # Invariants
//! - `Slot::ALL` lists every variant exactly once, in liturgical order.
//! - `key()` is lowercase and stable; it is the export/wire name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One named position within the propers of a Mass.
///
/// Variant declaration order is the canonical order, so the derived `Ord`
/// sorts slots the way they are sung/read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Introit,
    Collect,
    Epistle,
    Gradual,
    /// Only present on some days; nothing enforces that.
    Sequence,
    Gospel,
    Offertory,
    Secret,
    Preface,
    Communion,
    Postcommunion,
}

impl Slot {
    /// Every slot in canonical order.
    pub const ALL: [Slot; 11] = [
        Slot::Introit,
        Slot::Collect,
        Slot::Epistle,
        Slot::Gradual,
        Slot::Sequence,
        Slot::Gospel,
        Slot::Offertory,
        Slot::Secret,
        Slot::Preface,
        Slot::Communion,
        Slot::Postcommunion,
    ];

    /// Capitalized label used by human-readable output, e.g. `Introit`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Introit => "Introit",
            Self::Collect => "Collect",
            Self::Epistle => "Epistle",
            Self::Gradual => "Gradual",
            Self::Sequence => "Sequence",
            Self::Gospel => "Gospel",
            Self::Offertory => "Offertory",
            Self::Secret => "Secret",
            Self::Preface => "Preface",
            Self::Communion => "Communion",
            Self::Postcommunion => "Postcommunion",
        }
    }

    /// Lowercase key used by the export mapping, e.g. `introit`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Introit => "introit",
            Self::Collect => "collect",
            Self::Epistle => "epistle",
            Self::Gradual => "gradual",
            Self::Sequence => "sequence",
            Self::Gospel => "gospel",
            Self::Offertory => "offertory",
            Self::Secret => "secret",
            Self::Preface => "preface",
            Self::Communion => "communion",
            Self::Postcommunion => "postcommunion",
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Failure to resolve a slot from user-provided text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    /// Input was empty after trimming.
    Empty,
    /// Input does not name any known slot.
    Unknown(String),
}

impl Display for SlotParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "slot name cannot be empty"),
            Self::Unknown(name) => write!(f, "unknown slot `{name}`"),
        }
    }
}

impl Error for SlotParseError {}

impl FromStr for Slot {
    type Err = SlotParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SlotParseError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SlotParseError::Unknown(trimmed.to_string()))
    }
}
