//! Response normalization.
//!
//! The Golf Genius API answers the same kind of request with a bare list, a
//! map wrapping the list under a resource key, or a map carrying an
//! `error`. [`Envelope`] captures those three shapes in one decode step, and
//! [`sanitize_ids`] rewrites numeric identifiers into strings so no caller
//! ever sees an ID above 2^53 - 1 as a lossy number.

use serde_json::{Map, Value};

/// Decoded body of a Golf Genius API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The API returned a JSON array.
    List(Vec<Value>),
    /// The API returned a JSON object, possibly wrapping a collection.
    Map(Map<String, Value>),
    /// A map carrying an `error` key, kept exactly as received.
    ErrorBody(Map<String, Value>),
}

impl Envelope {
    /// Classify an already decoded JSON value.
    ///
    /// Objects with an `error` key become [`Envelope::ErrorBody`]. Scalars are
    /// wrapped as `{"result": value}` and `null` becomes an empty map.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::Object(map) if map.contains_key("error") => Self::ErrorBody(map),
            Value::Object(map) => Self::Map(map),
            Value::Null => Self::Map(Map::new()),
            scalar => {
                let mut map = Map::new();
                map.insert("result".to_string(), scalar);
                Self::Map(map)
            }
        }
    }

    /// Decode a raw response body. Empty bodies decode to an empty map.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Self::Map(Map::new()));
        }
        serde_json::from_str(body).map(Self::from_value)
    }

    /// Create an `{"error": message}` envelope.
    pub fn error(message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("error".to_string(), Value::String(message.into()));
        Self::ErrorBody(map)
    }

    /// Human-readable failure text, if this envelope is an error.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::ErrorBody(map) => Some(match map.get("error") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            }),
            _ => None,
        }
    }

    /// Whether this envelope represents a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorBody(_))
    }

    /// Unwrap the collection stored under `key`.
    ///
    /// Lists are returned as-is, error bodies unchanged, and maps without
    /// `key` are returned whole. Every non-error result is ID-sanitized.
    pub fn extract(self, key: &str) -> Value {
        match self {
            Self::List(items) => sanitize_ids(Value::Array(items)),
            Self::ErrorBody(map) => Value::Object(map),
            Self::Map(mut map) => match map.remove(key) {
                Some(inner) => sanitize_ids(inner),
                None => sanitize_ids(Value::Object(map)),
            },
        }
    }

    /// Convert the whole envelope into a sanitized JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::List(items) => sanitize_ids(Value::Array(items)),
            Self::Map(map) => sanitize_ids(Value::Object(map)),
            Self::ErrorBody(map) => Value::Object(map),
        }
    }
}

/// Recursively rewrite every `id` field into its string form.
///
/// When a map carries both `id` and `id_str`, `id` takes the value of `id_str`
/// (the API's precision-safe copy). A numeric `id` without `id_str` becomes its
/// integer string, truncating toward zero for floats. Everything else recurses
/// unchanged; scalars pass through.
pub fn sanitize_ids(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_ids).collect()),
        Value::Object(map) => Value::Object(sanitize_map(map)),
        leaf => leaf,
    }
}

fn sanitize_map(map: Map<String, Value>) -> Map<String, Value> {
    let id_str = map.get("id_str").map(string_form);

    map.into_iter()
        .map(|(key, value)| {
            let value = match (key.as_str(), &id_str) {
                ("id", Some(id_str)) => Value::String(id_str.clone()),
                ("id", None) => match value {
                    Value::Number(number) => Value::String(integer_string(&number)),
                    other => sanitize_ids(other),
                },
                _ => sanitize_ids(value),
            };
            (key, value)
        })
        .collect()
}

fn string_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(number) => integer_string(number),
        other => other.to_string(),
    }
}

fn integer_string(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        let f = number.as_f64().unwrap_or_default().trunc();
        format!("{f:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn has_numeric_id(value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().any(has_numeric_id),
            Value::Object(map) => map.iter().any(|(k, v)| {
                (k == "id" && v.is_number()) || has_numeric_id(v)
            }),
            _ => false,
        }
    }

    #[test]
    fn test_extract_list_unchanged_for_any_key() {
        let body = json!([{ "name": "Spring Open" }, { "name": "Fall Classic" }]);
        for key in ["events", "seasons", "anything"] {
            let result = Envelope::from_value(body.clone()).extract(key);
            assert_eq!(result, body);
        }
    }

    #[test]
    fn test_extract_empty_list() {
        assert_eq!(Envelope::from_value(json!([])).extract("seasons"), json!([]));
    }

    #[test]
    fn test_extract_error_passthrough() {
        for key in ["events", "seasons"] {
            let result = Envelope::from_value(json!({ "error": "X" })).extract(key);
            assert_eq!(result, json!({ "error": "X" }));
        }
    }

    #[test]
    fn test_extract_nested_key() {
        let body = json!({ "events": [{ "id": 1, "name": "Spring Open" }] });
        let result = Envelope::from_value(body).extract("events");
        assert_eq!(result, json!([{ "id": "1", "name": "Spring Open" }]));
    }

    #[test]
    fn test_extract_missing_key_returns_whole_map() {
        let body = json!({ "other": [1, 2, 3] });
        let result = Envelope::from_value(body.clone()).extract("events");
        assert_eq!(result, body);
    }

    #[test]
    fn test_from_body_shapes() {
        assert_eq!(Envelope::from_body("").unwrap(), Envelope::Map(Map::new()));
        assert_eq!(Envelope::from_body("null").unwrap(), Envelope::Map(Map::new()));
        assert_eq!(
            Envelope::from_body(r#"{"error": "bad"}"#).unwrap(),
            Envelope::error("bad")
        );
        assert_eq!(
            Envelope::from_body("true").unwrap().into_value(),
            json!({ "result": true })
        );
        assert!(Envelope::from_body("<html>").is_err());
    }

    #[test]
    fn test_error_map_keeps_every_field() {
        let body = json!({ "error": "Event locked", "code": 42, "id": 7 });
        for key in ["events", "rounds"] {
            let result = Envelope::from_value(body.clone()).extract(key);
            assert_eq!(result, body);
        }
        assert_eq!(Envelope::from_value(body.clone()).into_value(), body);
    }

    #[test]
    fn test_non_string_error_is_kept_as_is() {
        let body = json!({ "error": null, "events": [{ "id": 1 }] });
        let envelope = Envelope::from_value(body.clone());
        assert!(envelope.is_error());
        assert_eq!(envelope.error_message().as_deref(), Some("null"));
        assert_eq!(envelope.extract("events"), body);

        let envelope = Envelope::from_value(json!({ "error": { "code": 7 } }));
        assert_eq!(envelope.error_message().as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(Envelope::error("bad").error_message().as_deref(), Some("bad"));
        assert_eq!(Envelope::from_value(json!([])).error_message(), None);
    }

    #[test]
    fn test_sanitize_prefers_id_str() {
        let value = json!({ "id": 9007199254740993u64, "id_str": "9007199254740993" });
        assert_eq!(
            sanitize_ids(value),
            json!({ "id": "9007199254740993", "id_str": "9007199254740993" })
        );
    }

    #[test]
    fn test_sanitize_numeric_id_without_id_str() {
        assert_eq!(sanitize_ids(json!({ "id": 42 })), json!({ "id": "42" }));
        assert_eq!(sanitize_ids(json!({ "id": -7 })), json!({ "id": "-7" }));
        assert_eq!(sanitize_ids(json!({ "id": 42.9 })), json!({ "id": "42" }));
        assert_eq!(sanitize_ids(json!({ "id": -42.9 })), json!({ "id": "-42" }));
    }

    #[test]
    fn test_sanitize_recurses_and_keeps_other_fields() {
        let value = json!({
            "event": {
                "id": 12,
                "rounds": [{ "id": 3, "name": "R1", "course_id": 77 }],
            },
            "count": 1,
        });
        assert_eq!(
            sanitize_ids(value),
            json!({
                "event": {
                    "id": "12",
                    "rounds": [{ "id": "3", "name": "R1", "course_id": 77 }],
                },
                "count": 1,
            })
        );
    }

    #[test]
    fn test_sanitize_leaves_scalars() {
        assert_eq!(sanitize_ids(json!(5)), json!(5));
        assert_eq!(sanitize_ids(json!("id")), json!("id"));
        assert_eq!(sanitize_ids(json!({ "id": "abc" })), json!({ "id": "abc" }));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let value = json!([
            { "id": 1, "members": [{ "id": 2.5 }, { "id": 3, "id_str": "3" }] },
            { "id": { "id": 4 } },
            "leaf",
        ]);
        let once = sanitize_ids(value);
        let twice = sanitize_ids(once.clone());
        assert_eq!(once, twice);
        assert!(!has_numeric_id(&once));
    }
}
