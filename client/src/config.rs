//! Browser-side configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server knows the backend base URL from its environment and
//! writes it into the SSR shell; the hydrated bundle reads it back from the
//! document so one build serves any backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `name` of the `<meta>` tag carrying the backend base URL.
pub const API_BASE_META: &str = "chat-api-base";

/// Settings the browser bundle needs at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash. Empty means same origin.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Read the configuration embedded in the current document.
    ///
    /// Falls back to same-origin requests when the tag is missing or when
    /// running outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            content.map_or_else(Self::default, |base| Self::new(&base))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
