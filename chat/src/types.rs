//! REST payload types exchanged with the chat backend.
//!
//! DESIGN
//! ======
//! Decoding is lenient where the backend has more than one shape for the same
//! thing (nested vs. flat message authors, bare vs. paginated message lists)
//! so callers always see one normalized Rust type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair sent to the register and login endpoints.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful register/login response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Opaque session token; the backend's token model calls this `key`.
    #[serde(alias = "key")]
    pub token: String,
    /// The member the token belongs to, when the backend includes it.
    #[serde(default)]
    pub user: Option<Member>,
}

/// A registered chat member as returned by `/api/members/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Backend row id, if present in the payload.
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    /// Registration timestamp.
    pub created_at: DateTime<FixedOffset>,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    /// Author username. Accepts a plain string or a nested member object.
    #[serde(deserialize_with = "deserialize_author")]
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Body of `POST /api/messages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessage<'a> {
    pub text: &'a str,
}

/// Paging parameters for `GET /api/messages`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Query pairs in the order the backend documents them.
    #[must_use]
    pub fn query(self) -> [(&'static str, String); 2] {
        [("limit", self.limit.to_string()), ("offset", self.offset.to_string())]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Response of `GET /api/messages`: either a bare array or a limit/offset page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessagePage {
    Plain(Vec<Message>),
    Paged {
        #[serde(default)]
        count: Option<u64>,
        results: Vec<Message>,
    },
}

impl MessagePage {
    /// Messages in backend order.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Plain(messages) | Self::Paged { results: messages, .. } => messages,
        }
    }
}

fn deserialize_author<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(name) => Ok(name),
        serde_json::Value::Object(map) => map
            .get("username")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| D::Error::custom("author object without username")),
        _ => Err(D::Error::custom("expected author string or object")),
    }
}
