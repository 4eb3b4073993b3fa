//! Serialization of [`Value`] into the wire form.
//!
//! Plain values follow standard JSON rules. The two distinguished containers
//! are rewritten into tagged records on the way out, at every nesting level:
//! a set becomes `{"kind":"Set","value":[...]}` and a map becomes
//! `{"kind":"Map","value":[[k,v],...]}`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Value;
use super::{KIND_FIELD, KIND_MAP, KIND_SET, VALUE_FIELD};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => elements.serialize(serializer),
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Set(elements) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(KIND_FIELD, KIND_SET)?;
                map.serialize_entry(VALUE_FIELD, elements)?;
                map.end()
            }
            Value::Map(entries) => {
                // Pairs serialize as two-element arrays, so the payload is
                // [[k, v], ...] without an intermediate representation.
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(KIND_FIELD, KIND_MAP)?;
                map.serialize_entry(VALUE_FIELD, entries)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::super::value::Value;

    #[test]
    fn test_primitives_use_standard_json() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Value::from(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Value::from("hi")).unwrap(), "\"hi\"");
    }

    #[test]
    fn test_set_becomes_tagged_record() {
        let set = Value::set_of([1, 2, 3]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"{"kind":"Set","value":[1,2,3]}"#
        );
    }

    #[test]
    fn test_map_becomes_tagged_record() {
        let map = Value::map_of([("a", 1), ("b", 2)]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"kind":"Map","value":[["a",1],["b",2]]}"#
        );
    }

    #[test]
    fn test_object_preserves_entry_order() {
        let obj = Value::object_of([("z", 1), ("a", 2)]);
        assert_eq!(serde_json::to_string(&obj).unwrap(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_nested_set_is_rewritten() {
        let obj = Value::object_of([("tags", Value::set_of(["x"]))]);
        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"tags":{"kind":"Set","value":["x"]}}"#
        );
    }
}
