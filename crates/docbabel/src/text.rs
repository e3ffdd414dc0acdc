//! Deciding whether a scalar value is a translatable text candidate.

use serde_json::Value;

/// Codelist column names whose values are nominally translatable.
///
/// Membership is checked disjunctively with "is this a non-empty string":
/// any stripped non-empty string cell is already a candidate, so the set
/// documents intent rather than filtering further.
pub const TRANSLATABLE_CODELIST_HEADERS: &[&str] = &["title", "description", "technical note"];

/// Schema keywords whose values are nominally translatable.
pub const TRANSLATABLE_SCHEMA_KEYWORDS: &[&str] = &["title", "description"];

/// Trim a string and return it if anything remains.
///
/// An empty or all-whitespace string is never a candidate. Internal
/// whitespace, casing, and punctuation are preserved verbatim.
pub fn clean_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Cell-level counterpart of [`text_to_translate`] for tabular documents,
/// where every value is already a string.
pub fn cell_text(value: &str, key_in_fixed_set: bool) -> Option<&str> {
    let _ = key_in_fixed_set;
    clean_text(value)
}

/// Return the translatable text of a scalar value, if any.
///
/// Non-string values (numbers, booleans, null, containers) are never
/// candidates and must pass through both traversals untouched. The
/// `key_in_fixed_set` flag records that the enclosing key belongs to one of
/// the fixed translatable sets; it does not change the content test.
pub fn text_to_translate(value: &Value, key_in_fixed_set: bool) -> Option<&str> {
    let _ = key_in_fixed_set;
    match value {
        Value::String(s) => clean_text(s),
        _ => None,
    }
}
