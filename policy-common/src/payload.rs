//! Card payload carried in a card's `data-json` attribute
//!
//! The backend writes whatever it has for a policy, so every key is optional.
//! Values follow the page script's truthiness rules: `null`, `""`, `0` and
//! `false` all count as "not provided" and fall back at display time.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::error::ModalError;

/// Attribute on a card element holding its serialized payload
pub const PAYLOAD_ATTRIBUTE: &str = "data-json";

/// Policy identifier as emitted by the backend (numeric row id or slug)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyId::Number(n) => write!(f, "{}", n),
            PolicyId::Text(s) => f.write_str(s),
        }
    }
}

/// Parsed card payload. Lives for a single open attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    #[serde(default, deserialize_with = "truthy_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "policy_id")]
    pub id: Option<PolicyId>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub color_code: Option<String>,
}

impl CardPayload {
    /// Parse the raw attribute value.
    ///
    /// `None` and `""` mean the attribute is missing. Anything else must be a
    /// JSON object; other JSON values are rejected as malformed.
    /// Repeated keys resolve to the last occurrence.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ModalError> {
        let text = match raw {
            None | Some("") => return Err(ModalError::MissingPayload(PAYLOAD_ATTRIBUTE)),
            Some(text) => text,
        };
        // Arrays must not fill title, desc, ... by position.
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(serde_json::from_value(Value::Object(map))?),
            other => Err(ModalError::MalformedPayload(serde::de::Error::custom(
                format!("expected object, found {}", json_kind(&other)),
            ))),
        }
    }

    /// `img` wins over `image`; the backend has used both names.
    pub fn image_url(&self) -> Option<&str> {
        self.img.as_deref().or(self.image.as_deref())
    }
}

fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(number_text(&n))),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {}",
            json_kind(&other)
        ))),
    }
}

/// Integral floats print without a fraction (`2025.0` -> `2025`), as the page
/// would show them.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
        }
    }
    n.to_string()
}

fn policy_id<'de, D>(deserializer: D) -> Result<Option<PolicyId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(PolicyId::Text(s))),
        Value::Number(n) => match n.as_i64() {
            Some(id) => Ok(Some(PolicyId::Number(id))),
            None => Ok(Some(PolicyId::Text(number_text(&n)))),
        },
        other => Err(serde::de::Error::custom(format!(
            "expected policy id, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
