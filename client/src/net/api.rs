//! REST API for the chat backend, one method per endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages never see transport
//! exceptions. Logout is best-effort at the flow level, not here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use chat::api::{
    CURRENT_MEMBER_PATH, ChatApi, LOGIN_PATH, LOGOUT_PATH, MESSAGES_PATH, REGISTER_PATH,
};
use chat::types::{AuthResponse, Credentials, Member, Message, MessagePage, NewMessage, PageRequest};
use chat::ApiError;

use super::http::HttpClient;

/// Logout carries an empty JSON object as its body.
fn logout_body() -> serde_json::Value {
    serde_json::json!({})
}

/// Browser implementation of [`ChatApi`], provided to pages via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestApi {
    http: HttpClient,
}

impl RestApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for RestApi {
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.http.post(REGISTER_PATH, None, credentials).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.http.post(LOGIN_PATH, None, credentials).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.http
            .post_empty(LOGOUT_PATH, Some(token), &logout_body())
            .await
    }

    async fn current_member(&self, token: &str) -> Result<Member, ApiError> {
        self.http.get(CURRENT_MEMBER_PATH, Some(token), &[]).await
    }

    async fn messages(&self, token: &str, page: PageRequest) -> Result<Vec<Message>, ApiError> {
        let page: MessagePage = self.http.get(MESSAGES_PATH, Some(token), &page.query()).await?;
        Ok(page.into_messages())
    }

    async fn send_message(&self, token: &str, text: &str) -> Result<Message, ApiError> {
        self.http
            .post(MESSAGES_PATH, Some(token), &NewMessage { text })
            .await
    }
}
