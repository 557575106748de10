//! View flows: the state machines behind the login, registration, chat and
//! profile views.
//!
//! ARCHITECTURE
//! ============
//! Each flow splits into plain state with synchronous transitions
//! (`begin_*`, `apply`) and async functions that talk to a [`ChatApi`] and
//! return an outcome. Front ends hold the state wherever their UI model wants
//! it (Leptos signals, a CLI local) and navigate when an outcome names a
//! [`Route`]. Protected flows consult the [`Session`] before any backend call.
//!
//! [`ChatApi`]: crate::api::ChatApi
//! [`Route`]: crate::route::Route
//! [`Session`]: crate::session::Session

pub mod chat;
pub mod login;
pub mod profile;
pub mod register;
