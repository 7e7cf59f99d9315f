//! JSON round-tripping for plain records.
//!
//! Serialization is plain `serde_json`. Reconstruction is positional: the
//! object's field values are taken in the order they appear in the text and
//! handed to a constructor, and the field names are thrown away. Reordering or
//! omitting fields in the input therefore changes which value lands where.
//! Treat this as a convenience for text produced by [`to_json`], not as a
//! general deserializer; use `serde_json::from_str` when names matter.

use serde::Serialize;
use serde_json::Value;

use crate::error::{RecordError, Result};

/// Types that can be rebuilt from field values given in positional order.
pub trait FromFieldValues: Sized {
    /// Number of values the constructor takes.
    const ARITY: usize;

    fn from_field_values(values: Vec<Value>) -> Result<Self>;
}

/// Serializes `value` to compact JSON text.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a JSON object and returns its values in source order.
pub fn field_values(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map.into_iter().map(|(_, value)| value).collect()),
        other => Err(RecordError::NotAnObject(json_type(&other))),
    }
}

/// Parses `text` and applies `ctor` to the field values in source order.
///
/// ```rust
/// use records::roundtrip::from_json_with;
///
/// let sum: f64 = from_json_with(r#"{"a": 1, "b": 2}"#, |values| {
///     Ok(values.iter().filter_map(|v| v.as_f64()).sum())
/// })?;
/// assert_eq!(sum, 3.0);
/// # Ok::<(), records::RecordError>(())
/// ```
pub fn from_json_with<T, F>(text: &str, ctor: F) -> Result<T>
where
    F: FnOnce(Vec<Value>) -> Result<T>,
{
    let values = field_values(text)?;
    log::debug!("reconstructing record from {} field values", values.len());
    ctor(values)
}

/// Parses `text` and rebuilds a `T` from its field values in source order.
pub fn from_json<T: FromFieldValues>(text: &str) -> Result<T> {
    from_json_with(text, T::from_field_values)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
