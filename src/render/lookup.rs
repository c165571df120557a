//! Default-valued lookups into a node's open-ended parameter record.
//!
//! A missing key or a value of the wrong type resolves to "nothing" so that the
//! calling renderer can substitute its documented default.

use serde_json::{Map, Value};

/// Follows `path` through nested objects.
pub fn get<'a>(params: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(params.get(*first)?, |value, key| value.get(*key))
}

/// A non-empty string at `path`.
pub fn text<'a>(params: &'a Map<String, Value>, path: &[&str]) -> Option<&'a str> {
    get(params, path)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// The first key among `keys` holding a non-empty string.
pub fn first_text<'a>(params: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| text(params, &[*key]))
}

/// The array at `path`, or an empty slice.
pub fn list<'a>(params: &'a Map<String, Value>, path: &[&str]) -> &'a [Value] {
    get(params, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// The boolean at `key`, or `default` when absent or not a boolean.
pub fn flag(params: &Map<String, Value>, key: &str, default: bool) -> bool {
    params.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// A non-empty string field of an object value.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Whether a value carries content: not null, `false` or the empty string.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// The first key among `keys` whose value is set.
pub fn first_set<'a>(params: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| params.get(*key).filter(|v| is_set(v)))
}
