//! Common utilities shared by the Golf Genius tools.
//!
//! Every validator runs before any request is issued and reports a
//! [`ToolError::Validation`] whose message ends up in `{"error": ...}`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

use crate::domains::tools::ToolError;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// Longest name accepted for events.
pub const MAX_NAME_LEN: usize = 255;

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Identifier as sent by a client: a JSON integer or its string form.
///
/// Responses carry every `id` as a string, so the same value must be accepted
/// back as a parameter.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Int(i64),
    Text(String),
}

impl IdInput {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer: {text:?}"))),
        }
    }
}

/// `deserialize_with` for ID fields that accept `42` or `"42"`.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IdInput::deserialize(deserializer)?.into_i64()
}

/// Optional form of [`lenient_id`]; pair with `#[serde(default)]`.
pub fn lenient_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdInput>::deserialize(deserializer)?
        .map(IdInput::into_i64)
        .transpose()
}

/// Percent-encode `raw` for use as a single URL path segment.
pub fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Require `value` to be a positive integer.
pub fn positive_id(name: &str, value: i64) -> Result<u64, ToolError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ToolError::validation(format!("{name} must be a positive integer.")))
}

/// Validate an optional page number.
pub fn optional_page(page: Option<i64>) -> Result<Option<u64>, ToolError> {
    page.map(|p| positive_id("page", p)).transpose()
}

/// Validate an optional positive integer filter.
pub fn optional_id(name: &str, value: Option<i64>) -> Result<Option<u64>, ToolError> {
    value.map(|v| positive_id(name, v)).transpose()
}

/// Require a `YYYY-MM-DD` date naming a real calendar day.
pub fn iso_date(name: &str, value: &str) -> Result<NaiveDate, ToolError> {
    if !DATE_PATTERN.is_match(value) {
        return Err(ToolError::validation(format!(
            "Validation error: {name} must be in YYYY-MM-DD format"
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ToolError::validation(format!(
            "Validation error: {name} is not a valid calendar date"
        ))
    })
}

/// Validate an optional date, keeping the caller's spelling.
pub fn optional_date(name: &str, value: Option<String>) -> Result<Option<String>, ToolError> {
    match value {
        Some(value) => iso_date(name, &value).map(|_| Some(value)),
        None => Ok(None),
    }
}

/// Require `end` not to precede `start` when both are present.
pub fn date_order(start: Option<&str>, end: Option<&str>) -> Result<(), ToolError> {
    if let (Some(start), Some(end)) = (start, end) {
        let start = iso_date("start_date", start)?;
        let end = iso_date("end_date", end)?;
        if end < start {
            return Err(ToolError::validation(
                "Validation error: end_date must not be before start_date",
            ));
        }
    }
    Ok(())
}

/// Require a syntactically valid email address.
pub fn email(value: &str) -> Result<&str, ToolError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(ToolError::validation("Validation error: Invalid email format"))
    }
}

/// Require non-blank text of at most `max_len` characters; returns it trimmed.
pub fn required_text(name: &str, value: &str, max_len: Option<usize>) -> Result<String, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::validation(format!(
            "Validation error: {name} must not be empty"
        )));
    }
    match max_len {
        Some(max) if trimmed.chars().count() > max => Err(ToolError::validation(format!(
            "Validation error: {name} must be at most {max} characters"
        ))),
        _ => Ok(trimmed.to_string()),
    }
}

/// Like [`required_text`] for optional fields.
pub fn optional_text(
    name: &str,
    value: Option<String>,
    max_len: Option<usize>,
) -> Result<Option<String>, ToolError> {
    value
        .map(|v| required_text(name, &v, max_len))
        .transpose()
}

/// Require `value` to be one of `allowed`.
pub fn one_of<'a>(name: &str, value: &'a str, allowed: &[&str]) -> Result<&'a str, ToolError> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ToolError::validation(format!(
            "{name} must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Require a non-empty list.
pub fn non_empty<T>(name: &str, items: &[T]) -> Result<(), ToolError> {
    if items.is_empty() {
        Err(ToolError::validation(format!(
            "{name} must contain at least one entry."
        )))
    } else {
        Ok(())
    }
}

/// JSON request body built from optional fields; absent fields are omitted.
#[derive(Debug, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn set_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Body for an update: fails when no field was supplied.
    pub fn into_update(self) -> Result<Value, ToolError> {
        if self.0.is_empty() {
            Err(ToolError::validation("No fields provided to update."))
        } else {
            Ok(Value::Object(self.0))
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positive_id() {
        assert_eq!(positive_id("event_id", 42).unwrap(), 42);
        let err = positive_id("event_id", 0).unwrap_err();
        assert_eq!(err.to_string(), "event_id must be a positive integer.");
        assert!(positive_id("event_id", -5).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct IdFields {
        #[serde(deserialize_with = "lenient_id")]
        event_id: i64,
        #[serde(default, deserialize_with = "lenient_optional_id")]
        season_id: Option<i64>,
    }

    #[test]
    fn test_lenient_id_accepts_returned_string_ids() {
        let fields: IdFields = serde_json::from_value(json!({ "event_id": "42" })).unwrap();
        assert_eq!(fields.event_id, 42);
        assert_eq!(fields.season_id, None);

        let fields: IdFields =
            serde_json::from_value(json!({ "event_id": 7, "season_id": "9" })).unwrap();
        assert_eq!(fields.event_id, 7);
        assert_eq!(fields.season_id, Some(9));

        let fields: IdFields =
            serde_json::from_value(json!({ "event_id": "-3", "season_id": null })).unwrap();
        assert_eq!(fields.event_id, -3);
        assert_eq!(fields.season_id, None);
    }

    #[test]
    fn test_lenient_id_rejects_non_numeric() {
        let err = serde_json::from_value::<IdFields>(json!({ "event_id": "abc" })).unwrap_err();
        assert!(err.to_string().contains("invalid integer"));
        assert!(serde_json::from_value::<IdFields>(json!({ "event_id": true })).is_err());
        assert!(
            serde_json::from_value::<IdFields>(json!({ "event_id": 1, "season_id": "x" })).is_err()
        );
    }

    #[test]
    fn test_path_segment_escapes_reserved_characters() {
        assert_eq!(path_segment("tiger@example.com"), "tiger%40example.com");
        assert_eq!(path_segment("ab#c@example.com"), "ab%23c%40example.com");
        assert_eq!(path_segment("a/b?c%d+e@x.io"), "a%2Fb%3Fc%25d%2Be%40x.io");
    }

    #[test]
    fn test_optional_page() {
        assert_eq!(optional_page(None).unwrap(), None);
        assert_eq!(optional_page(Some(2)).unwrap(), Some(2));
        assert!(optional_page(Some(0)).is_err());
    }

    #[test]
    fn test_iso_date_format_and_calendar() {
        assert!(iso_date("start_date", "2025-04-15").is_ok());
        assert!(iso_date("start_date", "2025/13/40").is_err());
        assert!(iso_date("start_date", "bad-date").is_err());
        let err = iso_date("start_date", "2025-02-30").unwrap_err();
        assert!(err.to_string().contains("calendar"));
    }

    #[test]
    fn test_date_order() {
        assert!(date_order(Some("2025-01-01"), Some("2025-12-31")).is_ok());
        assert!(date_order(Some("2025-01-01"), Some("2025-01-01")).is_ok());
        assert!(date_order(Some("2025-02-01"), Some("2025-01-01")).is_err());
        assert!(date_order(None, Some("2025-01-01")).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(email("tiger@example.com").is_ok());
        assert!(email("not-an-email").is_err());
        assert!(email("a b@example.com").is_err());
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("name", "  B Flight ", None).unwrap(), "B Flight");
        assert!(required_text("name", "   ", None).is_err());
        assert!(required_text("name", &"x".repeat(256), Some(MAX_NAME_LEN)).is_err());
        assert!(required_text("name", &"x".repeat(255), Some(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_one_of() {
        assert_eq!(one_of("format", "xml", &["json", "html", "xml"]).unwrap(), "xml");
        let err = one_of("format", "pdf", &["json", "html", "xml"]).unwrap_err();
        assert_eq!(err.to_string(), "format must be one of: json, html, xml");
    }

    #[test]
    fn test_payload_update() {
        assert_eq!(
            Payload::new().into_update().unwrap_err().to_string(),
            "No fields provided to update."
        );
        let body = Payload::new()
            .set_opt("name", Some("Updated"))
            .set_opt("date", None::<String>)
            .into_update()
            .unwrap();
        assert_eq!(body, json!({ "name": "Updated" }));
    }
}
