//! Login page (username + password).

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login/> }
}
