//! Human-readable rendering of readings and propers.
//!
//! # Responsibility
//! - Write populated slots in canonical order, in requested languages.
//! - Degrade gracefully for languages a reading does not carry.
//!
//! # Invariants
//! - The verse line is written iff the reading has a citation.
//! - One entry is written per requested language, in request order.
//! - Absent slots produce no output at all.

use crate::model::propers::Propers;
use crate::model::reading::{is_latin, Reading};
use log::debug;
use std::io::{self, Write};

const LATIN_LABEL: &str = "Latin";

/// Writes one reading in the requested languages.
///
/// The Latin token is matched case-insensitively and labelled `Latin`. Other
/// tokens are echoed verbatim as their label. A token with no translation
/// yields a `<token> translation not found` line instead of an error.
///
/// Texts are written verbatim, so a text containing a line break spans
/// several lines; one line per language holds only for single-line texts.
///
/// # Errors
/// - Returns the sink's I/O error, if any.
pub fn render_reading<W, S>(out: &mut W, reading: &Reading, languages: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    if reading.has_verse() {
        writeln!(out, "{}", reading.verse)?;
    }
    for language in languages {
        let language = language.as_ref();
        match reading.text_in(language) {
            Some(text) => {
                let label = if is_latin(language) {
                    LATIN_LABEL
                } else {
                    language
                };
                writeln!(out, "{label}: {text}")?;
            }
            None => writeln!(out, "{language} translation not found")?,
        }
    }
    Ok(())
}

/// Writes every populated slot of `propers`, headed by its display name.
///
/// # Errors
/// - Returns the sink's I/O error, if any.
pub fn render_propers<W, S>(out: &mut W, propers: &Propers, languages: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    let mut rendered = 0usize;
    for (slot, reading) in propers.slots() {
        let Some(reading) = reading else {
            continue;
        };
        writeln!(out, "{}", slot.display_name())?;
        render_reading(out, reading, languages)?;
        rendered += 1;
    }
    debug!(
        "event=propers_render module=render status=ok slots={} languages={}",
        rendered,
        languages.len()
    );
    Ok(())
}

/// Prints every populated slot of `propers` to standard output.
pub fn print_set_fields<S: AsRef<str>>(propers: &Propers, languages: &[S]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render_propers(&mut handle, propers, languages)
}
