//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds its flow state in a
//! signal, runs the `chat` flows, and delegates rendering details to
//! `components` where they are shared.

pub mod chat;
pub mod login;
pub mod profile;
pub mod register;
