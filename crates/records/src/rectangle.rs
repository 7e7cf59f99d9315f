use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RecordError, Result};
use crate::roundtrip::FromFieldValues;

/// Axis-aligned rectangle given by its side lengths.
///
/// Inputs are not validated; negative or non-finite sides are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Positional order is `(width, height)`.
impl FromFieldValues for Rectangle {
    const ARITY: usize = 2;

    fn from_field_values(values: Vec<Value>) -> Result<Self> {
        let [width, height] = <[Value; 2]>::try_from(values).map_err(|values| {
            RecordError::Arity {
                expected: Self::ARITY,
                found: values.len(),
            }
        })?;
        Ok(Self::new(number(&width, 0)?, number(&height, 1)?))
    }
}

fn number(value: &Value, position: usize) -> Result<f64> {
    value.as_f64().ok_or(RecordError::FieldType {
        position,
        expected: "a number",
    })
}
