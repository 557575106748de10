//! `ChatApi` over `reqwest`.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use async_trait::async_trait;
use chat::api::{
    CURRENT_MEMBER_PATH, LOGIN_PATH, LOGOUT_PATH, MESSAGES_PATH, REGISTER_PATH, authorization,
    decode_body, decode_empty, endpoint_url,
};
use chat::types::{AuthResponse, Credentials, Member, Message, MessagePage, NewMessage, PageRequest};
use chat::{ApiError, ChatApi};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Map, Value};

/// Backend client bound to one base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let request = self.http.request(method, endpoint_url(&self.base_url, path));
        match token {
            Some(token) => request.header(AUTHORIZATION, authorization(token)),
            None => request,
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        tracing::debug!(url = %response.url(), status, "response");
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ChatApi for RestClient {
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = self.request(reqwest::Method::POST, REGISTER_PATH, None).json(credentials);
        let (status, body) = self.execute(request).await?;
        decode_body(status, &body)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = self.request(reqwest::Method::POST, LOGIN_PATH, None).json(credentials);
        let (status, body) = self.execute(request).await?;
        decode_body(status, &body)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let request = self
            .request(reqwest::Method::POST, LOGOUT_PATH, Some(token))
            .json(&Value::Object(Map::new()));
        let (status, body) = self.execute(request).await?;
        decode_empty(status, &body)
    }

    async fn current_member(&self, token: &str) -> Result<Member, ApiError> {
        let request = self.request(reqwest::Method::GET, CURRENT_MEMBER_PATH, Some(token));
        let (status, body) = self.execute(request).await?;
        decode_body(status, &body)
    }

    async fn messages(&self, token: &str, page: PageRequest) -> Result<Vec<Message>, ApiError> {
        let request = self
            .request(reqwest::Method::GET, MESSAGES_PATH, Some(token))
            .query(&page.query());
        let (status, body) = self.execute(request).await?;
        decode_body::<MessagePage>(status, &body).map(MessagePage::into_messages)
    }

    async fn send_message(&self, token: &str, text: &str) -> Result<Message, ApiError> {
        let request = self
            .request(reqwest::Method::POST, MESSAGES_PATH, Some(token))
            .json(&NewMessage { text });
        let (status, body) = self.execute(request).await?;
        decode_body(status, &body)
    }
}
