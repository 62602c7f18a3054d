//! Nullness classification for field values.
//!
//! The enum table arrives from spreadsheets and hand-edited CSV exports, so
//! "absent" shows up in many disguises: empty cells, literal `null`/`none`
//! strings, `N/A` markers, NaN values from numeric tooling. This module
//! provides the single predicate that decides whether a value counts as
//! semantically absent, distinct from strict emptiness checks.

use serde_yaml::Value;

/// String spellings that classify as null after trimming and lowercasing.
const NULL_STRINGS: [&str; 9] = [
    "",
    "null",
    "none",
    "nan",
    "n/a",
    "na",
    "not available",
    "not applicable",
    "missing",
];

/// Returns true if the value is considered 'null' or missing.
///
/// Null-classified values are: YAML null, floating-point NaN, a string that
/// matches the null vocabulary after trimming and lowercasing, and empty
/// sequences or mappings. Everything else is non-null, including `0`,
/// `false`, and non-empty collections. Never panics.
pub fn is_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(num) => num.as_f64().is_some_and(f64::is_nan),
        Value::String(text) => is_null_str(text),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        // Bools and tagged values are never absent
        _ => false,
    }
}

/// String fast path: true when the trimmed, lowercased text is in the null
/// vocabulary.
pub fn is_null_str(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    NULL_STRINGS.contains(&normalized.as_str())
}
