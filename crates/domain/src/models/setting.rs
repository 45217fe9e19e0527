//! Typed setting values.
//!
//! Settings are stored as strings in the per-scope settings tables
//! (`journal_settings`, `section_settings`, `category_settings`). The domain
//! layer never hands raw stored strings to callers: every field is declared
//! with a [`SettingKind`] in its area schema and decoded through
//! [`SettingValue::decode`], so a malformed stored value surfaces as a typed
//! [`SettingParseError`] instead of a silent fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locale under which journal-level settings are written.
pub const DEFAULT_LOCALE: &str = "en";

/// The closed set of value kinds a setting field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Text,
    Number,
    Bool,
    Json,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Text => "text",
            SettingKind::Number => "number",
            SettingKind::Bool => "bool",
            SettingKind::Json => "json",
        }
    }
}

/// A decoded setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Number(i64),
    Bool(bool),
    Json(serde_json::Value),
}

/// Error decoding a stored string or a request payload into a typed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingParseError {
    #[error("expected a number, got `{0}`")]
    InvalidNumber(String),

    #[error("expected true or false, got `{0}`")]
    InvalidBool(String),

    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("expected a {expected} value, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl SettingValue {
    /// Encodes the value into its stored string form.
    pub fn encode(&self) -> String {
        match self {
            SettingValue::Text(s) => s.clone(),
            SettingValue::Number(n) => n.to_string(),
            SettingValue::Bool(b) => b.to_string(),
            // A Json variant always originates from a parsed serde_json
            // value, so re-serialization cannot fail.
            SettingValue::Json(v) => v.to_string(),
        }
    }

    /// Decodes a stored string against the declared kind.
    pub fn decode(kind: SettingKind, raw: &str) -> Result<Self, SettingParseError> {
        match kind {
            SettingKind::Text => Ok(SettingValue::Text(raw.to_string())),
            SettingKind::Number => raw
                .trim()
                .parse::<i64>()
                .map(SettingValue::Number)
                .map_err(|_| SettingParseError::InvalidNumber(raw.to_string())),
            SettingKind::Bool => match raw.trim() {
                "true" => Ok(SettingValue::Bool(true)),
                "false" => Ok(SettingValue::Bool(false)),
                other => Err(SettingParseError::InvalidBool(other.to_string())),
            },
            SettingKind::Json => serde_json::from_str(raw)
                .map(SettingValue::Json)
                .map_err(|e| SettingParseError::InvalidJson(e.to_string())),
        }
    }

    /// Converts a JSON request value (PUT body, legacy payload) into a typed
    /// value of the declared kind.
    pub fn from_json(
        kind: SettingKind,
        value: &serde_json::Value,
    ) -> Result<Self, SettingParseError> {
        match kind {
            SettingKind::Text => value
                .as_str()
                .map(|s| SettingValue::Text(s.to_string()))
                .ok_or(SettingParseError::WrongType {
                    expected: "text",
                    found: json_type_name(value),
                }),
            SettingKind::Number => value
                .as_i64()
                .map(SettingValue::Number)
                .ok_or(SettingParseError::WrongType {
                    expected: "number",
                    found: json_type_name(value),
                }),
            SettingKind::Bool => value
                .as_bool()
                .map(SettingValue::Bool)
                .ok_or(SettingParseError::WrongType {
                    expected: "bool",
                    found: json_type_name(value),
                }),
            SettingKind::Json => Ok(SettingValue::Json(value.clone())),
        }
    }

    /// Converts the value into its JSON response representation.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SettingValue::Text(s) => serde_json::Value::String(s.clone()),
            SettingValue::Number(n) => serde_json::Value::from(*n),
            SettingValue::Bool(b) => serde_json::Value::Bool(*b),
            SettingValue::Json(v) => v.clone(),
        }
    }

    /// Returns the text content if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
