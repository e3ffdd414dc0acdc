//! Property-based tests for the extraction/translation duality.
//!
//! These tests use proptest to generate random documents and verify that:
//! 1. **Normalizer idempotence**: trimming stabilizes after one application
//! 2. **Duality**: the units extraction emits are exactly the values
//!    translation rewrites
//! 3. **Structure preservation**: identity translation changes nothing but
//!    candidate whitespace, and is idempotent

use proptest::prelude::*;

use docbabel::{Codelist, Identity, Lookup, Result, Schema};
use indexmap::IndexMap;
use serde_json::Value;

/// A total lookup that brackets every requested text, so rewritten values
/// are recognizable in the output.
#[derive(Debug)]
struct Marker;

impl Lookup for Marker {
    fn get(&self, text: &str) -> Result<String> {
        Ok(format!("\u{ab}{text}\u{bb}"))
    }
}

// =============================================================================
// Test Strategies
// =============================================================================

/// Cell content: plain words, possibly padded with whitespace, possibly blank.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z0-9]{1,8}".prop_map(|s| format!("  {s}  ")),
        "[a-zA-Z0-9 ]{1,12}",
    ]
}

/// Lowercase object keys, JSON-Pointer-safe by construction.
fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Arbitrary nested documents: scalars, arrays, and objects.
fn document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        cell().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key(), inner), 0..4).prop_map(|entries| {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

// =============================================================================
// Normalizer
// =============================================================================

proptest! {
    #[test]
    fn normalizer_is_idempotent(s in "\\PC{0,40}") {
        match docbabel::text::clean_text(&s) {
            Some(text) => prop_assert_eq!(docbabel::text::clean_text(text), Some(text)),
            None => prop_assert!(s.trim().is_empty()),
        }
    }
}

// =============================================================================
// Nested documents
// =============================================================================

proptest! {
    /// Every extracted unit is rewritten by translation, and nothing else:
    /// the marked values in the translated tree sit exactly at the extracted
    /// locations.
    #[test]
    fn schema_extraction_and_translation_are_dual(root in document()) {
        let schema = Schema::from_value(root);
        let units = schema.units();
        let translated = schema.translate(&Marker, &IndexMap::new()).unwrap();

        for unit in &units {
            let rewritten = translated
                .as_value()
                .pointer(&unit.location.to_string())
                .expect("extracted location must exist in translated document");
            let expected = format!("\u{ab}{}\u{bb}", unit.text);
            prop_assert_eq!(rewritten, &Value::String(expected));
        }

        // No value outside the extracted set was marked.
        prop_assert_eq!(count_marked(translated.as_value()), units.len());
    }

    /// Identity translation only trims candidate strings, so applying it
    /// twice is the same as applying it once.
    #[test]
    fn schema_identity_translation_is_idempotent(root in document()) {
        let schema = Schema::from_value(root);
        let once = schema.translate(&Identity, &IndexMap::new()).unwrap();
        let twice = once.translate(&Identity, &IndexMap::new()).unwrap();
        prop_assert_eq!(once.as_value(), twice.as_value());
    }

    /// Translation preserves the unit set: re-extracting from an
    /// identity-translated document yields the same locations and texts.
    #[test]
    fn schema_identity_translation_preserves_units(root in document()) {
        let schema = Schema::from_value(root);
        let translated = schema.translate(&Identity, &IndexMap::new()).unwrap();
        prop_assert_eq!(schema.units(), translated.units());
    }
}

fn count_marked(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_marked).sum(),
        Value::Object(map) => map.values().map(count_marked).sum(),
        Value::String(s) => usize::from(s.starts_with('\u{ab}')),
        _ => 0,
    }
}

// =============================================================================
// Codelists
// =============================================================================

proptest! {
    /// Identity translation of a codelist is idempotent and keeps the unit
    /// sequence intact.
    #[test]
    fn codelist_identity_translation_is_idempotent(
        rows in prop::collection::vec(prop::collection::vec(cell(), 3), 1..5),
    ) {
        let mut input = String::from("code,title,description\n");
        for row in &rows {
            let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
            writer.write_record(row).unwrap();
            input.push_str(&String::from_utf8(writer.into_inner().unwrap()).unwrap());
        }

        let codelist = Codelist::parse(&input).unwrap();
        let once = codelist.translate(&Identity).unwrap();

        let reparsed = Codelist::parse(&once).unwrap();
        let twice = reparsed.translate(&Identity).unwrap();
        prop_assert_eq!(&once, &twice);

        let original_units: Vec<_> = codelist.units().collect();
        let translated_units: Vec<_> = reparsed.units().collect();
        prop_assert_eq!(original_units, translated_units);
    }
}
