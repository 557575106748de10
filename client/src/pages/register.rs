//! Registration page. Signs the new member in on success.

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Register/> }
}
