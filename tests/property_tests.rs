//! Property-based tests for the save/load round-trip and the lookup guarantees.

use ini_doc::{from_str, to_string, Document};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z_]{1,12}"
}

/// Strings the dialect can carry unchanged: printable ASCII without the ` ;` marker.
fn plain_string() -> impl Strategy<Value = String> {
    "[ -~]{0,40}".prop_filter("contains inline comment marker", |s| !s.contains(" ;"))
}

proptest! {
    #[test]
    fn prop_string_roundtrip(
        entries in prop::collection::vec((name(), name(), plain_string()), 1..20)
    ) {
        let mut doc = Document::new();
        for (section, key, value) in &entries {
            doc.add_value(section, key, value.as_str()).unwrap();
        }

        let back = from_str(&to_string(&doc)).unwrap();
        for (section, key, _) in &entries {
            prop_assert_eq!(back.get_value(section, key), doc.get_value(section, key));
        }
    }

    #[test]
    fn prop_integer_roundtrip(section in name(), key in name(), n in any::<i64>()) {
        let mut doc = Document::new();
        doc.add_value(&section, &key, n).unwrap();

        let back = from_str(&to_string(&doc)).unwrap();
        prop_assert_eq!(back.get_int_value(&section, &key), n);
    }

    #[test]
    fn prop_float_roundtrip(section in name(), key in name(), x in -1.0e12f64..1.0e12) {
        let mut doc = Document::new();
        doc.add_value(&section, &key, x).unwrap();

        let back = from_str(&to_string(&doc)).unwrap();
        prop_assert_eq!(back.get_float_value(&section, &key), x);
    }

    #[test]
    fn prop_bool_roundtrip(section in name(), key in name(), b in any::<bool>()) {
        let mut doc = Document::new();
        doc.add_value(&section, &key, b).unwrap();

        let back = from_str(&to_string(&doc)).unwrap();
        prop_assert_eq!(back.get_bool_value(&section, &key), b);
    }

    #[test]
    fn prop_lookup_ignores_case(section in name(), key in name(), value in plain_string()) {
        let mut doc = Document::new();
        doc.add_value(&section, &key, value.as_str()).unwrap();

        prop_assert_eq!(doc.get_value(&section.to_uppercase(), &key.to_uppercase()), value.clone());
        prop_assert_eq!(doc.get_value(&section.to_lowercase(), &key.to_lowercase()), value);
    }

    #[test]
    fn prop_reads_are_total(section in ".{0,16}", key in ".{0,16}") {
        let doc = Document::new();
        prop_assert_eq!(doc.get_value(&section, &key), "");
        prop_assert_eq!(doc.get_int_value(&section, &key), 0);
        prop_assert_eq!(doc.get_float_value(&section, &key), 0.0);
        prop_assert!(!doc.get_bool_value(&section, &key));
    }

    #[test]
    fn prop_parser_never_panics(input in "[\\[\\]a-z_=; \"\n]{0,200}") {
        let _ = from_str(&input);
    }
}
