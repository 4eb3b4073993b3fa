//! The value model for the codec.
//!
//! [`Value`] is a closed sum over everything the codec can transport: the
//! JSON primitives, plain arrays and objects, and the two distinguished
//! container shapes (unique-value sets and value-keyed maps) that must
//! survive a round trip with their type intact.

use std::fmt;

pub use serde_json::Number;

/// A structured value storable through the facade.
///
/// Objects, sets and maps all preserve insertion order. Sets hold unique
/// elements (first occurrence wins); maps hold unique keys (a later equal
/// key overwrites the value but keeps the original position).
///
/// # Example
///
/// ```ignore
/// use duostore::Value;
///
/// let v = Value::object_of([
///     ("name", Value::from("ada")),
///     ("tags", Value::set_of([1, 2, 3])),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The JSON `null` value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number (integer or float, per [`serde_json::Number`]).
    Number(Number),
    /// A string.
    String(String),
    /// A plain array.
    Array(Vec<Value>),
    /// A plain object; entries keep insertion order.
    Object(Vec<(String, Value)>),
    /// A unique-value collection; elements keep insertion order.
    Set(Vec<Value>),
    /// An ordered key-to-value mapping; keys may be any value.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a [`Value::Set`], dropping duplicate elements.
    ///
    /// The first occurrence of each element keeps its position.
    pub fn set_of<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut elements: Vec<Value> = Vec::new();
        for item in items {
            let value = item.into();
            if !elements.contains(&value) {
                elements.push(value);
            }
        }
        Value::Set(elements)
    }

    /// Build a [`Value::Map`] from key/value pairs.
    ///
    /// A later pair with an equal key overwrites the value in place, keeping
    /// the position of the first occurrence.
    pub fn map_of<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut entries: Vec<(Value, Value)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Value::Map(entries)
    }

    /// Build a [`Value::Object`] from string-keyed pairs.
    ///
    /// Same overwrite rule as [`Value::map_of`].
    pub fn object_of<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut entries: Vec<(String, Value)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Value::Object(entries)
    }

    /// Returns `true` if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it is an integer number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Array`].
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Set`].
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Value::Set(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries if this is a [`Value::Map`].
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the entries if this is a [`Value::Object`].
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == field).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // Non-finite floats have no JSON representation; map them to null
        // the way serde_json's own Value conversion does.
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    /// Formats the value as JSON text, using the codec's wire form for
    /// sets and maps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_set_of_deduplicates_keeping_first() {
        let set = Value::set_of([1, 2, 1, 3, 2]);
        assert_eq!(set, Value::Set(vec![1.into(), 2.into(), 3.into()]));
    }

    #[test]
    fn test_map_of_overwrites_in_place() {
        let map = Value::map_of([("a", 1), ("b", 2), ("a", 3)]);
        let entries = map.as_map().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("a".into(), 3.into()));
        assert_eq!(entries[1], ("b".into(), 2.into()));
    }

    #[test]
    fn test_object_field_lookup() {
        let obj = Value::object_of([("x", 10), ("y", 20)]);
        assert_eq!(obj.get("y"), Some(&Value::from(20)));
        assert_eq!(obj.get("z"), None);
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(f64::INFINITY), Value::Null);
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(42).as_str(), None);
    }
}
