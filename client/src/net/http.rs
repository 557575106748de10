//! Shared HTTP instance for the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since the backend
//! is only called from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use chat::ApiError;
use chat::api::endpoint_url;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// HTTP client bound to the backend base URL.
///
/// Every request carries `Accept: application/json`; authenticated requests
/// add `Authorization: Token <token>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
        }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// `GET path?query` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(path))
                .header("Accept", "application/json")
                .query(query.iter().map(|(k, v)| (*k, v.as_str())));
            if let Some(token) = token {
                request = request.header("Authorization", &chat::api::authorization(token));
            }
            let request = request.build().map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, body) = send(request).await?;
            chat::api::decode_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, token, query);
            Err(unavailable())
        }
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let (status, text) = self.post_raw(path, token, body).await?;
        chat::api::decode_body(status, &text)
    }

    /// `POST path` with a JSON body, ignoring the success body.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses.
    pub async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError> {
        let (status, text) = self.post_raw(path, token, body).await?;
        chat::api::decode_empty(status, &text)
    }

    async fn post_raw<B: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request =
                gloo_net::http::Request::post(&self.url(path)).header("Accept", "application/json");
            if let Some(token) = token {
                request = request.header("Authorization", &chat::api::authorization(token));
            }
            let request = request.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, token, body);
            Err(unavailable())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let method = request.method();
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("{method:?} {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    log::debug!("{method:?} {url} -> {status}");
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}
