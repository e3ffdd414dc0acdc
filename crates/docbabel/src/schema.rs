//! Nested-document traversal: extraction and translation of JSON schema files.
//!
//! Documents are trees of maps, sequences, and scalars. Units are addressed
//! by a slash-delimited path from the root (`/key` for map descent, `/index`
//! for sequence descent). Only map values are ever candidates; sequence
//! elements contribute units solely through their nested contents. Within a
//! branch, children are emitted before the owning entry's own unit, while
//! sibling keys keep map insertion order.
//!
//! Translation rebuilds the tree bottom-up and never mutates the input, so
//! structure, non-string scalars, and untranslated strings come out
//! byte-identical. Serialization preserves key insertion order (serde_json's
//! `preserve_order` feature) and emits non-ASCII characters literally.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::catalog::Lookup;
use crate::error::Result;
use crate::text::{TRANSLATABLE_SCHEMA_KEYWORDS, text_to_translate};
use crate::unit::{Location, TextUnit};

/// A parsed schema document. The root may be an object or an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Value,
}

impl Schema {
    /// Parse JSON content.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            root: serde_json::from_str(input)?,
        })
    }

    /// Wrap an already-parsed document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The underlying document.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Extract every text unit, depth-first from the root.
    pub fn units(&self) -> Vec<TextUnit> {
        let mut units = Vec::new();
        collect_units(&self.root, "", &mut units);
        units
    }

    /// Translate every candidate map value through `lookup`, then apply
    /// `{{name}}` placeholder substitutions to the translated strings.
    ///
    /// Substitutions are applied after translation, to the translated text
    /// only; untranslated values never see them.
    pub fn translate(
        &self,
        lookup: &dyn Lookup,
        substitutions: &IndexMap<String, String>,
    ) -> Result<Schema> {
        Ok(Schema {
            root: translate_value(&self.root, lookup, substitutions)?,
        })
    }

    /// Serialize as multi-line JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

fn collect_units(value: &Value, pointer: &str, units: &mut Vec<TextUnit>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_units(item, &format!("{pointer}/{index}"), units);
            }
        }
        Value::Object(map) => {
            for (key, entry) in map {
                let path = format!("{pointer}/{key}");
                collect_units(entry, &path, units);
                let fixed = TRANSLATABLE_SCHEMA_KEYWORDS.contains(&key.as_str());
                if let Some(text) = text_to_translate(entry, fixed) {
                    units.push(TextUnit::new(Location::pointer(path), text));
                }
            }
        }
        _ => {}
    }
}

fn translate_value(
    value: &Value,
    lookup: &dyn Lookup,
    substitutions: &IndexMap<String, String>,
) -> Result<Value> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| translate_value(item, lookup, substitutions))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut translated = Map::with_capacity(map.len());
            for (key, entry) in map {
                let mut entry = translate_value(entry, lookup, substitutions)?;
                let fixed = TRANSLATABLE_SCHEMA_KEYWORDS.contains(&key.as_str());
                if let Some(text) = text_to_translate(&entry, fixed) {
                    entry = Value::String(substitute(lookup.get(text)?, substitutions));
                }
                translated.insert(key.clone(), entry);
            }
            Ok(Value::Object(translated))
        }
        scalar => Ok(scalar.clone()),
    }
}

/// Replace every literal `{{name}}` token with its named replacement.
///
/// Tokens are disjoint by construction; behavior is undefined if a
/// replacement itself introduces another substitution's token.
fn substitute(mut text: String, substitutions: &IndexMap<String, String>) -> String {
    for (name, replacement) in substitutions {
        text = text.replace(&format!("{{{{{name}}}}}"), replacement);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Identity};
    use serde_json::json;

    const NESTED: &str = r#"{
        "title": {
            "oneOf": [{
                "title": "  foo  ",
                "description": "  bar  "
            }, {
                "title": "  baz  ",
                "description": "  bzz  "
            }]
        },
        "description": {
            "title": "  zzz  ",
            "description": "    "
        }
    }"#;

    #[test]
    fn test_units_children_before_own_entry() {
        let schema = Schema::parse(NESTED).unwrap();
        let units: Vec<(String, String)> = schema
            .units()
            .into_iter()
            .map(|u| (u.location.to_string(), u.text))
            .collect();

        assert_eq!(
            units,
            vec![
                ("/title/oneOf/0/title".to_string(), "foo".to_string()),
                ("/title/oneOf/0/description".to_string(), "bar".to_string()),
                ("/title/oneOf/1/title".to_string(), "baz".to_string()),
                ("/title/oneOf/1/description".to_string(), "bzz".to_string()),
                ("/description/title".to_string(), "zzz".to_string()),
            ]
        );
    }

    #[test]
    fn test_units_skip_non_strings() {
        let schema = Schema::from_value(json!({
            "title": "Person",
            "propertyOrder": 2,
            "openCodelist": false,
            "enum": ["personStatement"]
        }));
        let units = schema.units();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "Person");
    }

    #[test]
    fn test_translate_leaves_structure_untouched() {
        let catalog: Catalog = [
            ("Statement type".to_string(), "Тип заявления".to_string()),
            (
                "This should always be 'personStatement'.".to_string(),
                "Всегда 'personStatement'.".to_string(),
            ),
        ]
        .into_iter()
        .collect();

        let schema = Schema::from_value(json!({
            "statementType": {
                "title": "Statement type",
                "description": "This should always be 'personStatement'.",
                "enum": ["personStatement"]
            }
        }));
        let translated = schema.translate(&catalog, &IndexMap::new()).unwrap();

        assert_eq!(
            translated.as_value(),
            &json!({
                "statementType": {
                    "title": "Тип заявления",
                    "description": "Всегда 'personStatement'.",
                    "enum": ["personStatement"]
                }
            })
        );
    }

    #[test]
    fn test_translate_never_mutates_input() {
        let schema = Schema::from_value(json!({"title": "  padded  "}));
        let before = schema.as_value().clone();
        schema.translate(&Identity, &IndexMap::new()).unwrap();
        assert_eq!(schema.as_value(), &before);
    }

    #[test]
    fn test_placeholder_substitution_after_translation() {
        let catalog: Catalog = [("Hello".to_string(), "Bonjour {{lang}}".to_string())]
            .into_iter()
            .collect();
        let subs: IndexMap<String, String> = [("lang".to_string(), "fr".to_string())]
            .into_iter()
            .collect();

        let schema = Schema::from_value(json!({"title": "Hello"}));
        let translated = schema.translate(&catalog, &subs).unwrap();
        assert_eq!(translated.as_value(), &json!({"title": "Bonjour fr"}));
    }

    #[test]
    fn test_blank_values_bypass_lookup() {
        // An empty catalog fails any lookup, so passing means no lookup
        // was attempted for the blank value or the number.
        let schema = Schema::from_value(json!({"title": "   ", "count": 3}));
        let translated = schema
            .translate(&Catalog::default(), &IndexMap::new())
            .unwrap();
        assert_eq!(translated.as_value(), &json!({"title": "   ", "count": 3}));
    }

    #[test]
    fn test_pretty_json_preserves_key_order_and_non_ascii() {
        let schema = Schema::parse(r#"{"zeta": "я", "alpha": 1}"#).unwrap();
        let output = schema.to_pretty_json().unwrap();
        assert_eq!(output, "{\n  \"zeta\": \"я\",\n  \"alpha\": 1\n}");
    }

    #[test]
    fn test_array_root() {
        let schema = Schema::parse(r#"[{"title": "First"}, {"title": "Second"}]"#).unwrap();
        let units = schema.units();
        assert_eq!(units[0].location.to_string(), "/0/title");
        assert_eq!(units[1].location.to_string(), "/1/title");
    }
}
