//! Error values returned at the `ChatApi` boundary.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx answers and undecodable bodies are distinct
//! variants. A non-2xx body is reduced to a single detail string once, here,
//! so views never probe backend JSON shapes themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("backend returned {status}{}", detail_suffix(.detail.as_deref()))]
    Backend { status: u16, detail: Option<String> },
    /// The backend answered 2xx but the body did not match the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Backend`] from a status code and raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Backend {
            status,
            detail: extract_detail(body),
        }
    }

    /// Human-readable message declared by the backend, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the backend rejected the session token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Backend { status: 401 | 403, .. })
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Reduce a backend error body to one message.
///
/// First match wins: `message`, `detail`, `non_field_errors[0]`, then the
/// first field error rendered as `<field>: <text>`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["message", "detail"] {
        if let Some(text) = object.get(key).and_then(first_text) {
            return Some(text);
        }
    }
    if let Some(text) = object.get("non_field_errors").and_then(first_text) {
        return Some(text);
    }
    object
        .iter()
        .find_map(|(field, value)| first_text(value).map(|text| format!("{field}: {text}")))
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
