//! Locate the list of items inside a response envelope.
//!
//! Payloads arrive in a handful of shapes:
//!
//! ```text
//! [ ... ]                              Bare
//! { "results": [ ... ] }               Enveloped
//! { "data": { "items": [ ... ] } }     Nested
//! ```
//!
//! `PayloadShape::detect` decides which one a payload is, and
//! `get_collection` returns its items.

use crate::fields::aliases;
use serde_json::Value;

/// The envelope shapes we know how to read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadShape<'a> {
    /// The payload is the list itself
    Bare(&'a [Value]),
    /// The list sits directly under `field`
    Enveloped { field: &'static str, items: &'a [Value] },
    /// The list sits under `field.items`
    Nested { field: &'static str, items: &'a [Value] },
    /// Nothing recognizable
    Unrecognized,
}

impl<'a> PayloadShape<'a> {
    /// Classify a payload.
    ///
    /// Envelope fields are tried in a fixed order; for each field a direct
    /// array wins over a nested `items` array.
    pub fn detect(raw: &'a Value) -> Self {
        match raw {
            Value::Array(items) => PayloadShape::Bare(items),
            Value::Object(record) => {
                for &field in aliases::COLLECTION {
                    match record.get(field) {
                        Some(Value::Array(items)) => {
                            return PayloadShape::Enveloped { field, items };
                        }
                        Some(Value::Object(inner)) => {
                            if let Some(Value::Array(items)) = inner.get(aliases::NESTED_ITEMS) {
                                return PayloadShape::Nested { field, items };
                            }
                        }
                        _ => {}
                    }
                }
                PayloadShape::Unrecognized
            }
            _ => PayloadShape::Unrecognized,
        }
    }

    /// The raw items carried by this shape (empty when unrecognized)
    pub fn items(&self) -> &'a [Value] {
        match *self {
            PayloadShape::Bare(items) => items,
            PayloadShape::Enveloped { items, .. } | PayloadShape::Nested { items, .. } => items,
            PayloadShape::Unrecognized => &[],
        }
    }
}

/// Raw items of a payload, in payload order
pub fn get_collection(raw: &Value) -> &[Value] {
    PayloadShape::detect(raw).items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let raw = json!([{"id": 1}, {"id": 2}]);
        assert!(matches!(PayloadShape::detect(&raw), PayloadShape::Bare(_)));
        assert_eq!(get_collection(&raw).len(), 2);
    }

    #[test]
    fn test_envelope_field_priority() {
        let raw = json!({
            "recommendations": [1, 2, 3],
            "results": [1],
            "items": "not a list",
        });

        let shape = PayloadShape::detect(&raw);
        assert_eq!(
            shape,
            PayloadShape::Enveloped { field: "results", items: &[json!(1)] }
        );
    }

    #[test]
    fn test_nested_items() {
        let raw = json!({"data": {"items": [{"id": 1}], "page": 2}});

        match PayloadShape::detect(&raw) {
            PayloadShape::Nested { field, items } => {
                assert_eq!(field, "data");
                assert_eq!(items.len(), 1);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_nested_checked_before_later_fields() {
        let raw = json!({"movies": {"items": [1, 2]}, "data": [1, 2, 3]});
        assert_eq!(get_collection(&raw).len(), 2);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        assert!(get_collection(&json!({"foo": [1]})).is_empty());
        assert!(get_collection(&json!({"data": {"rows": [1]}})).is_empty());
        assert!(get_collection(&json!("text")).is_empty());
        assert!(get_collection(&json!(42)).is_empty());
        assert!(get_collection(&Value::Null).is_empty());
    }
}
