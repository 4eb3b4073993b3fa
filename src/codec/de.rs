//! Deserialization of the wire form back into [`Value`].
//!
//! The visitor reconstructs plain JSON structurally. Whenever a finished
//! object matches a container tag exactly, it is revived into the original
//! container type; anything that only looks tagged passes through unchanged
//! as a plain object.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::value::{Number, Value};
use super::{KIND_FIELD, KIND_MAP, KIND_SET, VALUE_FIELD};

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        // The parser never produces non-finite floats, but the conversion is
        // total either way.
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Value::Array(elements))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, Value)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            entries.push((key, value));
        }
        Ok(revive(entries))
    }
}

/// Container tag recognized in a finished object.
enum Tag {
    Set,
    Map,
}

/// Check whether `entries` is exactly a container tag record: two fields,
/// a string `kind` of a known value, and an array `value` payload. For maps
/// the payload elements must all be two-element arrays.
fn container_tag(entries: &[(String, Value)]) -> Option<Tag> {
    if entries.len() != 2 {
        return None;
    }
    let (_, kind) = entries.iter().find(|(k, _)| k == KIND_FIELD)?;
    let (_, payload) = entries.iter().find(|(k, _)| k == VALUE_FIELD)?;
    let Value::String(kind) = kind else {
        return None;
    };
    let Value::Array(elements) = payload else {
        return None;
    };
    match kind.as_str() {
        KIND_SET => Some(Tag::Set),
        KIND_MAP => elements
            .iter()
            .all(|e| matches!(e, Value::Array(pair) if pair.len() == 2))
            .then_some(Tag::Map),
        _ => None,
    }
}

/// Turn a finished object back into a container if it carries a valid tag,
/// otherwise keep it as a plain object.
fn revive(mut entries: Vec<(String, Value)>) -> Value {
    let Some(tag) = container_tag(&entries) else {
        return Value::Object(entries);
    };

    let payload = entries
        .iter()
        .position(|(k, _)| k == VALUE_FIELD)
        .map(|i| entries.swap_remove(i).1);
    let Some(Value::Array(elements)) = payload else {
        // container_tag only matches an array payload
        return Value::Object(entries);
    };

    match tag {
        Tag::Set => Value::set_of(elements),
        Tag::Map => {
            let pairs = elements.into_iter().filter_map(|element| match element {
                Value::Array(pair) if pair.len() == 2 => {
                    let mut pair = pair.into_iter();
                    Some((pair.next()?, pair.next()?))
                }
                _ => None,
            });
            Value::map_of(pairs)
        }
    }
}
