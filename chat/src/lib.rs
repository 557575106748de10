//! Shared core of the group chat client.
//!
//! This crate owns everything the web client (`client`) and the terminal
//! client (`cli`) agree on: the REST payload types, the `ChatApi` contract,
//! the session seam, and the view flows that gate data fetching on a stored
//! session token. It has no HTTP stack of its own; each front end plugs one in
//! by implementing [`api::ChatApi`].

pub mod api;
pub mod datetime;
pub mod error;
pub mod flow;
pub mod route;
pub mod session;
pub mod text;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod fake;

pub use api::ChatApi;
pub use error::ApiError;
pub use route::Route;
pub use session::{Session, TokenStore};
