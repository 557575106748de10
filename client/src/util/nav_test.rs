use super::*;

#[test]
fn redirect_to_login_replaces_history() {
    assert!(navigate_options(Route::Login).replace);
}

#[test]
fn entering_protected_views_pushes_history() {
    assert!(!navigate_options(Route::Chat).replace);
    assert!(!navigate_options(Route::Profile).replace);
}

#[test]
fn register_replaces_like_login() {
    assert!(navigate_options(Route::Register).replace);
}

#[test]
fn options_keep_router_defaults() {
    let options = navigate_options(Route::Chat);
    let defaults = NavigateOptions::default();
    assert_eq!(options.scroll, defaults.scroll);
    assert_eq!(options.resolve, defaults.resolve);
}
