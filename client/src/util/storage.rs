//! Browser `localStorage` backing for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that touches `localStorage` for the session. Pages
//! go through `chat::Session`, which wraps this store and pins the key.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR paths behave like an empty, read-only store so
//! server rendering always takes the "not yet known" branch.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
use chat::session::SESSION_KEY;
use chat::session::{StoreError, TokenStore};

/// Session token slot in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(SESSION_KEY, token)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}
