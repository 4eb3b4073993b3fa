//! JSON codec with container-type preservation.
//!
//! This module converts a [`Value`] to JSON text and back such that the two
//! distinguished container shapes (sets and maps) survive the round trip
//! with their original type. On the wire they travel as tagged records:
//!
//! ```text
//! Set {1, 2}        ->  {"kind":"Set","value":[1,2]}
//! Map {"a" -> 1}    ->  {"kind":"Map","value":[["a",1]]}
//! ```
//!
//! The rewrite applies recursively at every nesting level, both ways.
//! Text that is not valid JSON decodes to itself as a plain string, so
//! entries written by earlier plain-text writers remain readable.

mod de;
mod error;
mod ser;
mod value;

pub use error::CodecError;
pub use value::{Number, Value};

/// Discriminant field of a tagged container record.
pub(crate) const KIND_FIELD: &str = "kind";
/// Payload field of a tagged container record.
pub(crate) const VALUE_FIELD: &str = "value";
pub(crate) const KIND_SET: &str = "Set";
pub(crate) const KIND_MAP: &str = "Map";

/// Serialize a value to JSON text.
///
/// Deterministic for a given input. Fails only if the underlying serializer
/// rejects the value, which no reachable [`Value`] does.
pub fn encode(value: &Value) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse JSON text back into a value, reviving tagged container records.
///
/// If `text` is not syntactically valid JSON the text itself is returned as
/// a [`Value::String`]. This is the deliberate fallback for entries stored
/// before this codec existed or written as plain text by another writer.
pub fn decode(text: &str) -> Value {
    // Value deserialization is total over valid JSON, so a parse attempt
    // doubles as the parseability check.
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => Value::String(text.to_string()),
    }
}

/// Check whether `text` is syntactically valid JSON.
///
/// A result-returning parse attempt; never panics.
pub fn is_parseable(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}
