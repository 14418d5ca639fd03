//! Data models for the social backend.
//!
//! Records are free-form JSON objects: callers may attach any field, and the
//! handful of fields the services read (`id`, `email`, `likes`, ...) are
//! accessed through the helpers in this module and its submodules.

mod post;
mod request;
mod user;

pub use post::*;
pub use request::*;
pub use user::*;

use serde_json::{Map, Value};

/// A single stored record: a JSON object with arbitrary fields.
pub type Record = Map<String, Value>;

/// Field holding the creation-time identifier of every record.
pub const ID_FIELD: &str = "id";

/// Build a freshly created record: `id` first, then the caller's fields.
///
/// Caller fields are merged after the id, so a body carrying its own `id`
/// replaces the generated one.
pub fn new_record(id: i64, fields: Record) -> Record {
    let mut record = Record::new();
    record.insert(ID_FIELD.to_string(), Value::from(id));
    record.extend(fields);
    record
}

/// Strict equality between two JSON values, comparing numbers by value.
///
/// `1` and `1.0` are equal; `1` and `"1"` are not.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        _ => a == b,
    }
}

/// Compare an optional record field against an optional expected value.
///
/// Two absent values compare equal.
pub fn field_eq(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match (actual, expected) {
        (Some(a), Some(b)) => json_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Whether `record[field]` equals `expected`.
pub fn matches_field(record: &Record, field: &str, expected: Option<&Value>) -> bool {
    field_eq(record.get(field), expected)
}

/// JavaScript-style truthiness of an optional JSON value.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_new_record_sets_id_and_merges_fields() {
        let record = new_record(42, obj(json!({"email": "a@x.com"})));
        assert_eq!(record["id"], json!(42));
        assert_eq!(record["email"], json!("a@x.com"));
    }

    #[test]
    fn test_new_record_keeps_id_first() {
        let record = new_record(42, obj(json!({"zeta": 1, "alpha": 2})));
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "zeta", "alpha"]);

        let overridden = new_record(42, obj(json!({"text": "hi", "id": 7})));
        let keys: Vec<&str> = overridden.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "text"]);
        assert_eq!(overridden["id"], json!(7));
    }

    #[test]
    fn test_new_record_caller_id_wins() {
        let record = new_record(42, obj(json!({"id": 7})));
        assert_eq!(record["id"], json!(7));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_json_eq_numbers_by_value() {
        assert!(json_eq(&json!(1), &json!(1.0)));
        assert!(json_eq(&json!(-3), &json!(-3)));
        assert!(!json_eq(&json!(1), &json!("1")));
        assert!(!json_eq(&json!(1), &json!(2)));
        assert!(json_eq(&json!("a"), &json!("a")));
    }

    #[test]
    fn test_field_eq_absent_matches_absent() {
        assert!(field_eq(None, None));
        assert!(!field_eq(None, Some(&Value::Null)));
        assert!(!field_eq(Some(&Value::Null), None));
        assert!(field_eq(Some(&Value::Null), Some(&Value::Null)));
        assert!(!field_eq(Some(&json!(1)), None));
        assert!(!field_eq(None, Some(&json!(1))));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(2))));
        assert!(is_truthy(Some(&json!("yes"))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }
}
