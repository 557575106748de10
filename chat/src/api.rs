//! The REST contract with the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends implement [`ChatApi`] over their own HTTP stack (`gloo-net` in
//! the browser, `reqwest` in the CLI). The endpoint table and header format
//! live here so both implementations stay byte-for-byte compatible.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{AuthResponse, Credentials, Member, Message, PageRequest};

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const CURRENT_MEMBER_PATH: &str = "/api/members/me";
pub const MESSAGES_PATH: &str = "/api/messages";

/// Value of the `Authorization` header for a session token.
#[must_use]
pub fn authorization(token: &str) -> String {
    format!("Token {token}")
}

/// Join a base URL and an absolute endpoint path.
///
/// An empty base yields the bare path (same-origin requests).
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Decode a response body into `T`, or into an [`ApiError`] for non-2xx.
///
/// # Errors
///
/// [`ApiError::Backend`] for non-success statuses, [`ApiError::Decode`] if a
/// success body does not parse as `T`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`decode_body`] for endpoints whose success body is ignored.
///
/// # Errors
///
/// [`ApiError::Backend`] for non-success statuses.
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

/// One async operation per backend endpoint.
///
/// Futures are not `Send`: the browser implementation runs on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait ChatApi {
    /// `POST /api/auth/register`.
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /api/auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /api/auth/logout`. The response body is empty.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// `GET /api/members/me`.
    async fn current_member(&self, token: &str) -> Result<Member, ApiError>;

    /// `GET /api/messages?limit=&offset=`.
    async fn messages(&self, token: &str, page: PageRequest) -> Result<Vec<Message>, ApiError>;

    /// `POST /api/messages`.
    async fn send_message(&self, token: &str, text: &str) -> Result<Message, ApiError>;

    /// First page with the default paging (`limit=50, offset=0`).
    async fn latest_messages(&self, token: &str) -> Result<Vec<Message>, ApiError> {
        self.messages(token, PageRequest::default()).await
    }
}
