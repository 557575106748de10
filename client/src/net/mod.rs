//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared HTTP instance (base URL + default headers) and `api`
//! maps each backend endpoint onto it by implementing `chat::ChatApi`.

pub mod api;
pub mod http;
