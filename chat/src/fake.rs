//! Scripted in-memory `ChatApi` for flow tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::DateTime;

use crate::api::ChatApi;
use crate::error::ApiError;
use crate::types::{AuthResponse, Credentials, Member, Message, PageRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Register { username: String },
    Login { username: String },
    Logout { token: String },
    CurrentMember { token: String },
    Messages { token: String, limit: u32, offset: u32 },
    SendMessage { token: String, text: String },
}

pub(crate) fn member(username: &str) -> Member {
    Member {
        id: Some(1),
        username: username.to_owned(),
        created_at: DateTime::parse_from_rfc3339("2024-05-01T12:34:00+03:00").unwrap(),
    }
}

pub(crate) fn message(id: i64, author: &str, text: &str) -> Message {
    Message {
        id,
        author: author.to_owned(),
        text: text.to_owned(),
        created_at: None,
    }
}

pub(crate) fn backend_error(status: u16, body: &str) -> ApiError {
    ApiError::from_status(status, body)
}

/// Backend double. Sent messages are appended to the stored list so a
/// refetch observes them, the way the real backend behaves.
pub(crate) struct FakeApi {
    calls: RefCell<Vec<Call>>,
    token: String,
    auth_error: Option<ApiError>,
    logout_error: Option<ApiError>,
    member_error: Option<ApiError>,
    messages_error: Option<ApiError>,
    send_error: Option<ApiError>,
    stored: RefCell<Vec<Message>>,
    next_id: Cell<i64>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            token: "abc123".to_owned(),
            auth_error: None,
            logout_error: None,
            member_error: None,
            messages_error: None,
            send_error: None,
            stored: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }
}

impl FakeApi {
    pub(crate) fn with_messages(self, messages: Vec<Message>) -> Self {
        let next = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.next_id.set(next);
        *self.stored.borrow_mut() = messages;
        self
    }

    pub(crate) fn failing_auth(mut self, error: ApiError) -> Self {
        self.auth_error = Some(error);
        self
    }

    pub(crate) fn failing_logout(mut self, error: ApiError) -> Self {
        self.logout_error = Some(error);
        self
    }

    pub(crate) fn failing_member(mut self, error: ApiError) -> Self {
        self.member_error = Some(error);
        self
    }

    pub(crate) fn failing_messages(mut self, error: ApiError) -> Self {
        self.messages_error = Some(error);
        self
    }

    pub(crate) fn failing_send(mut self, error: ApiError) -> Self {
        self.send_error = Some(error);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn auth_result(&self, username: &str) -> Result<AuthResponse, ApiError> {
        match &self.auth_error {
            Some(error) => Err(error.clone()),
            None => Ok(AuthResponse {
                token: self.token.clone(),
                user: Some(member(username)),
            }),
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for FakeApi {
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.record(Call::Register {
            username: credentials.username.clone(),
        });
        self.auth_result(&credentials.username)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.record(Call::Login {
            username: credentials.username.clone(),
        });
        self.auth_result(&credentials.username)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.record(Call::Logout {
            token: token.to_owned(),
        });
        self.logout_error.clone().map_or(Ok(()), Err)
    }

    async fn current_member(&self, token: &str) -> Result<Member, ApiError> {
        self.record(Call::CurrentMember {
            token: token.to_owned(),
        });
        self.member_error.clone().map_or_else(|| Ok(member("alice")), Err)
    }

    async fn messages(&self, token: &str, page: PageRequest) -> Result<Vec<Message>, ApiError> {
        self.record(Call::Messages {
            token: token.to_owned(),
            limit: page.limit,
            offset: page.offset,
        });
        if let Some(error) = &self.messages_error {
            return Err(error.clone());
        }
        let stored = self.stored.borrow();
        Ok(stored
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn send_message(&self, token: &str, text: &str) -> Result<Message, ApiError> {
        self.record(Call::SendMessage {
            token: token.to_owned(),
            text: text.to_owned(),
        });
        if let Some(error) = &self.send_error {
            return Err(error.clone());
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = message(id, "alice", text);
        self.stored.borrow_mut().push(created.clone());
        Ok(created)
    }
}

/// Store whose writes always fail, e.g. browser storage disabled.
pub(crate) struct ReadOnlyStore;

impl crate::session::TokenStore for ReadOnlyStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), crate::session::StoreError> {
        Err(crate::session::StoreError::Unavailable)
    }

    fn clear(&self) {}
}
