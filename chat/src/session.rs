//! Session token storage behind a single interface.
//!
//! DESIGN
//! ======
//! Every protected view reads the token through [`Session`], which is handed
//! to views explicitly. There is exactly one storage key, so views can never
//! disagree about whether the user is logged in.
//!
//! Logout is locally authoritative: [`Session::end`] always clears the store,
//! and telling the backend is the caller's best-effort business.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::route::Route;

/// Storage key of the session token.
pub const SESSION_KEY: &str = "token";

/// Error raised by a [`TokenStore`] write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Persistent key-value slot holding the session token.
///
/// Reads are infallible by contract: an unreadable store is an absent token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the token could not be persisted.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    fn clear(&self);
}

/// Store kept in process memory. Used where no persistent storage exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Explicit session context passed to every view.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    #[must_use]
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// A session over an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Current token, ignoring blank values left by other writers.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.trim().is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Token for a protected view, or the route to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`Route::Login`] when no token is stored.
    pub fn require(&self) -> Result<String, Route> {
        self.token().ok_or(Route::Login)
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure.
    pub fn begin(&self, token: &str) -> Result<(), StoreError> {
        self.store.save(token)
    }

    /// Drop the local session.
    pub fn end(&self) {
        self.store.clear();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
