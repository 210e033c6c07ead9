use ordo_core::{export_propers, export_propers_json, Propers, Reading, Slot};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn introit_only_exports_single_flat_entry() {
    let propers = Propers::new("test").with_reading(
        Slot::Introit,
        Reading::new("Psalm 23:1", "Dominus regit me...")
            .with_translation("english", "The Lord is my shepherd...")
            .with_translation("spanish", "El Señor..."),
    );

    let json = serde_json::to_value(export_propers(&propers)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "introit": {
                "verse": "Psalm 23:1",
                "latin": "Dominus regit me...",
                "english": "The Lord is my shepherd...",
                "spanish": "El Señor..."
            }
        })
    );
}

#[test]
fn vernacular_named_latin_overwrites_latin_field() {
    let propers = Propers::new("collision").with_reading(
        Slot::Secret,
        Reading::new("", "Munera").with_translation("latin", "overwritten"),
    );

    let exported = export_propers(&propers);
    assert_eq!(exported["secret"]["latin"], "overwritten");
    assert_eq!(exported["secret"]["verse"], "");
}

#[test]
fn json_export_parses_back_to_same_mapping() {
    let propers = Propers::new("test")
        .with_reading(Slot::Gospel, Reading::new("John 3:16", "Sic enim dilexit Deus mundum..."));

    let text = export_propers_json(&propers).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["gospel"]["verse"], "John 3:16");
    assert_eq!(parsed.as_object().unwrap().len(), 1);
}

fn propers_strategy() -> impl Strategy<Value = Propers> {
    proptest::collection::vec(
        (
            proptest::sample::select(Slot::ALL.to_vec()),
            prop_oneof![Just(String::new()), "[A-Z][a-z]{2,6} [0-9]{1,2}:[0-9]{1,2}"],
            "[a-z ]{1,20}",
            proptest::collection::btree_map("[a-z]{3,8}", "[a-z ]{1,12}", 0..3),
        ),
        0..11,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .fold(Propers::new("generated"), |acc, (slot, verse, latin, vernacular)| {
                acc.with_reading(
                    slot,
                    Reading {
                        verse,
                        latin,
                        vernacular,
                    },
                )
            })
    })
}

proptest! {
    /// Exported keys are exactly the populated slots.
    #[test]
    fn export_keys_match_populated_slots(propers in propers_strategy()) {
        let exported = export_propers(&propers);
        let keys: BTreeSet<&str> = exported.keys().map(String::as_str).collect();
        let populated: BTreeSet<&str> =
            propers.populated_slots().into_iter().map(Slot::key).collect();
        prop_assert_eq!(keys, populated);
    }

    /// Verse and Latin are carried verbatim unless a language shadows them.
    #[test]
    fn export_carries_verse_and_latin(propers in propers_strategy()) {
        let exported = export_propers(&propers);
        for (slot, reading) in propers.slots() {
            let Some(reading) = reading else { continue };
            let fields = &exported[slot.key()];
            if !reading.vernacular.contains_key("latin") {
                prop_assert_eq!(&fields["latin"], &reading.latin);
            }
            if !reading.vernacular.contains_key("verse") {
                prop_assert_eq!(&fields["verse"], &reading.verse);
            }
        }
    }

    /// Export is idempotent on unmodified input.
    #[test]
    fn export_is_idempotent(propers in propers_strategy()) {
        prop_assert_eq!(export_propers(&propers), export_propers(&propers));
    }
}
