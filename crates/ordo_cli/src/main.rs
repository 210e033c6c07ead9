//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build one fixed sample Mass and exercise render and export end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! # Environment
//! - `ORDO_LOG_DIR`: absolute directory; enables file logging when set.
//! - `ORDO_LOG_LEVEL`: log level, defaults to the build-mode default.
//! - `ORDO_LANGUAGES`: comma-separated render languages, default `latin,english`.
//! - `ORDO_SLOTS`: comma-separated slot names to keep; all slots when unset.

use log::info;
use ordo_core::{Propers, Reading, Slot, SlotParseError};
use std::process::ExitCode;

const DEFAULT_LANGUAGES: &str = "latin,english";

fn main() -> ExitCode {
    init_logging_from_env();

    let propers = match slots_from_env() {
        Ok(Some(slots)) => sample_propers().select(&slots),
        Ok(None) => sample_propers(),
        Err(err) => {
            eprintln!("invalid ORDO_SLOTS: {err}");
            return ExitCode::FAILURE;
        }
    };
    let languages = languages_from_env();

    println!("ordo_core version={}", ordo_core::core_version());
    if let Err(err) = ordo_core::print_set_fields(&propers, languages.as_slice()) {
        eprintln!("failed to render propers: {err}");
        return ExitCode::FAILURE;
    }

    match ordo_core::export_propers_json(&propers) {
        Ok(json) => {
            println!("{json}");
            info!(
                "event=smoke_test module=cli status=ok id={} slots={}",
                propers.id,
                propers.populated_slots().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to export propers: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var("ORDO_LOG_DIR") else {
        return;
    };
    let level = std::env::var("ORDO_LOG_LEVEL")
        .unwrap_or_else(|_| ordo_core::default_log_level().to_string());
    if let Err(err) = ordo_core::init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn languages_from_env() -> Vec<String> {
    let raw = std::env::var("ORDO_LANGUAGES").unwrap_or_else(|_| DEFAULT_LANGUAGES.to_string());
    split_list(&raw).map(str::to_string).collect()
}

fn slots_from_env() -> Result<Option<Vec<Slot>>, SlotParseError> {
    match std::env::var("ORDO_SLOTS") {
        Ok(raw) => parse_slots(&raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_slots(raw: &str) -> Result<Vec<Slot>, SlotParseError> {
    split_list(raw).map(str::parse).collect()
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn sample_propers() -> Propers {
    Propers::new("test")
        .with_reading(
            Slot::Introit,
            Reading::new("Psalm 23:1", "Dominus regit me, nihil mihi deerit.")
                .with_translation("english", "The Lord is my shepherd; I shall not want.")
                .with_translation("spanish", "El Señor es mi pastor; nada me faltará."),
        )
        .with_reading(
            Slot::Gospel,
            Reading::new(
                "John 3:16",
                "Sic enim dilexit Deus mundum ut Filium suum unigenitum daret.",
            )
            .with_translation(
                "english",
                "For God so loved the world, that he gave his only Son.",
            )
            .with_translation("japanese", "神はこうして世を愛され、ご自身のひとり子を賜わった。"),
        )
}

#[cfg(test)]
mod tests {
    use super::{parse_slots, sample_propers, split_list};
    use ordo_core::{Slot, SlotParseError};

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" latin, english ,,French").collect::<Vec<_>>(),
            vec!["latin", "english", "French"]
        );
    }

    #[test]
    fn parse_slots_accepts_any_case_and_rejects_unknown() {
        assert_eq!(
            parse_slots("Gospel, introit"),
            Ok(vec![Slot::Gospel, Slot::Introit])
        );
        assert_eq!(
            parse_slots("gospel,tract"),
            Err(SlotParseError::Unknown("tract".to_string()))
        );
    }

    #[test]
    fn sample_populates_only_introit_and_gospel() {
        assert_eq!(
            sample_propers().populated_slots(),
            vec![Slot::Introit, Slot::Gospel]
        );
    }

    #[test]
    fn sample_export_matches_expected_json() {
        let json = ordo_core::export_propers_json(&sample_propers()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "introit": {
                    "verse": "Psalm 23:1",
                    "latin": "Dominus regit me, nihil mihi deerit.",
                    "english": "The Lord is my shepherd; I shall not want.",
                    "spanish": "El Señor es mi pastor; nada me faltará."
                },
                "gospel": {
                    "verse": "John 3:16",
                    "latin": "Sic enim dilexit Deus mundum ut Filium suum unigenitum daret.",
                    "english": "For God so loved the world, that he gave his only Son.",
                    "japanese": "神はこうして世を愛され、ご自身のひとり子を賜わった。"
                }
            })
        );
    }
}
