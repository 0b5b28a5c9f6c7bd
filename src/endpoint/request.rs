use axum::http::{header, HeaderMap};
use serde_json::Value;
use std::collections::HashMap;

use super::error::EndpointError;

pub const DEFAULT_FROM: &str = "ja";
pub const DEFAULT_TO: &str = "en";

/// Decoded request with defaults applied, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: Option<String>,
    pub from: String,
    pub to: String,
}

impl TranslationRequest {
    /// Build from a query string or form parameter map
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            text: params.get("text").cloned(),
            from: or_default(params.get("from").cloned(), DEFAULT_FROM),
            to: or_default(params.get("to").cloned(), DEFAULT_TO),
        }
    }

    /// Build from a JSON request body. A body that is valid JSON but not an
    /// object carries no parameters.
    ///
    /// Values are typed, not JS-truthy: `"text": 42` counts as missing and
    /// `"from": false` is kept as `"false"` (and fails validation) instead of
    /// falling back to the default.
    pub fn from_json(body: &[u8]) -> Result<Self, EndpointError> {
        let value: Value = serde_json::from_slice(body)?;

        let text = match value.get("text") {
            Some(Value::String(text)) => Some(text.clone()),
            _ => None,
        };

        Ok(Self {
            text,
            from: or_default(json_param(&value, "from"), DEFAULT_FROM),
            to: or_default(json_param(&value, "to"), DEFAULT_TO),
        })
    }
}

/// Strings are taken as-is; other non-null values keep their JSON text so
/// that they fail the language code check instead of silently defaulting.
fn json_param(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// True when the media type is `application/json`, ignoring parameters and case
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
