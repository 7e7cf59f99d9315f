//! Integration tests for rectangle records and JSON round-tripping.

use records::{Rectangle, RecordError, from_json, from_json_with, to_json};
use serde::Serialize;

// ============================================================================
// RECTANGLE
// ============================================================================

#[test]
fn test_rectangle_fields_and_area() {
    let rect = Rectangle::new(4.0, 2.5);
    assert_eq!(rect.width, 4.0);
    assert_eq!(rect.height, 2.5);
    assert_eq!(rect.area(), 10.0);
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_rectangle_round_trip() {
    let rect = Rectangle::new(7.0, 0.5);
    let text = to_json(&rect).unwrap();
    let back: Rectangle = from_json(&text).unwrap();
    assert_eq!(back, rect);
}

#[test]
fn test_integer_fields_are_accepted() {
    let rect: Rectangle = from_json(r#"{"width": 3, "height": 4}"#).unwrap();
    assert_eq!(rect.area(), 12.0);
}

#[test]
fn test_reordered_fields_swap_positions() {
    let rect: Rectangle = from_json(r#"{"height": 10, "width": 2}"#).unwrap();
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 2.0);
}

#[test]
fn test_field_names_are_ignored() {
    let rect: Rectangle = from_json(r#"{"a": 1.5, "b": 2}"#).unwrap();
    assert_eq!(rect, Rectangle::new(1.5, 2.0));
}

#[test]
fn test_custom_constructor() {
    #[derive(Serialize, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u64,
    }

    let text = to_json(&Person {
        name: "Ada".to_string(),
        age: 36,
    })
    .unwrap();
    assert_eq!(text, r#"{"name":"Ada","age":36}"#);

    let person = from_json_with(&text, |values| {
        let name = values[0].as_str().unwrap_or_default().to_string();
        let age = values[1].as_u64().unwrap_or_default();
        Ok(Person { name, age })
    })
    .unwrap();
    assert_eq!(
        person,
        Person {
            name: "Ada".to_string(),
            age: 36
        }
    );
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_field_is_arity_error() {
    let err = from_json::<Rectangle>(r#"{"width": 3}"#).unwrap_err();
    assert!(matches!(
        err,
        RecordError::Arity {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_extra_field_is_arity_error() {
    let err = from_json::<Rectangle>(r#"{"width": 3, "height": 4, "depth": 5}"#).unwrap_err();
    assert!(matches!(err, RecordError::Arity { found: 3, .. }));
}

#[test]
fn test_non_numeric_field() {
    let err = from_json::<Rectangle>(r#"{"width": "wide", "height": 4}"#).unwrap_err();
    assert_eq!(err.to_string(), "field at position 0 should be a number");
}

#[test]
fn test_top_level_must_be_object() {
    let err = from_json::<Rectangle>("42").unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON object, found a number");
}

#[test]
fn test_invalid_json() {
    let err = from_json::<Rectangle>("{width: 1}").unwrap_err();
    assert!(matches!(err, RecordError::Json(_)));
}
