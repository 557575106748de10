//! Reusable view components.

pub mod auth_form;
