//! Shared navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Async flows finish outside the component body, where the router's
//! `navigate` is awkward to carry. Pages instead write the target route into a
//! signal and this effect performs the navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use chat::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Options for navigating to `route`.
///
/// Moves to an unprotected view (a guard redirect or a logout) replace the
/// history entry so "back" does not return to a view the session no longer
/// allows. Moves into protected views push.
pub fn navigate_options(route: Route) -> NavigateOptions {
    NavigateOptions {
        replace: !route.is_protected(),
        ..NavigateOptions::default()
    }
}

/// Navigate whenever `target` is set, then clear it.
pub fn install_navigation(target: RwSignal<Option<Route>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = target.get() {
            target.set(None);
            navigate(route.path(), navigate_options(route));
        }
    });
}
