//! Reading domain model.
//!
//! # Responsibility
//! - Hold one liturgical text unit: citation, Latin body, translations.
//! - Resolve requested languages against the stored texts.
//!
//! # Invariants
//! - An empty `verse` means no citation was recorded.
//! - Vernacular keys are case-sensitive; only the Latin token is folded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language token that always resolves to the Latin text.
pub const LATIN: &str = "latin";

/// One text unit of the propers, e.g. the introit of a given Mass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Citation such as `Psalm 1:1`. Empty when none was recorded.
    #[serde(default)]
    pub verse: String,
    /// Latin body text.
    pub latin: String,
    /// Translations keyed by language name, e.g. `english`.
    #[serde(default)]
    pub vernacular: BTreeMap<String, String>,
}

impl Reading {
    /// Creates a reading without translations.
    pub fn new(verse: impl Into<String>, latin: impl Into<String>) -> Self {
        Self {
            verse: verse.into(),
            latin: latin.into(),
            vernacular: BTreeMap::new(),
        }
    }

    /// Adds a translation, replacing any earlier text for the same language.
    pub fn with_translation(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.vernacular.insert(language.into(), text.into());
        self
    }

    /// Returns whether a citation was recorded.
    pub fn has_verse(&self) -> bool {
        !self.verse.is_empty()
    }

    /// Exact-key vernacular lookup. Does not special-case Latin.
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.vernacular.get(language).map(String::as_str)
    }

    /// Resolves a requested language token to its text.
    ///
    /// `latin` matches in any ASCII case and wins over a vernacular entry of
    /// the same name; every other token must match a vernacular key exactly.
    pub fn text_in(&self, language: &str) -> Option<&str> {
        if is_latin(language) {
            return Some(self.latin.as_str());
        }
        self.translation(language)
    }

    /// Returns the citation plus every available text.
    ///
    /// The map holds `latin` and one entry per vernacular language. A
    /// vernacular key literally named `latin` replaces the Latin entry.
    pub fn full_text(&self) -> (String, BTreeMap<String, String>) {
        let mut texts = BTreeMap::new();
        texts.insert(LATIN.to_string(), self.latin.clone());
        for (language, text) in &self.vernacular {
            texts.insert(language.clone(), text.clone());
        }
        (self.verse.clone(), texts)
    }
}

/// Returns whether `language` is the Latin token.
pub fn is_latin(language: &str) -> bool {
    language.eq_ignore_ascii_case(LATIN)
}
