use super::*;
use crate::error::ApiError;
use crate::fake::{Call, FakeApi, backend_error, message};
use crate::session::MemoryTokenStore;

fn logged_in() -> Session {
    Session::new(MemoryTokenStore::with_token("abc123"))
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_state_is_loading_with_empty_draft() {
    let state = ChatState::default();
    assert!(state.loading);
    assert!(!state.sending);
    assert!(state.messages.is_empty());
    assert!(!state.can_send());
}

#[test]
fn can_send_requires_text_and_idle() {
    let mut state = ChatState {
        draft: "hi".to_owned(),
        ..ChatState::default()
    };
    assert!(state.can_send());
    state.sending = true;
    assert!(!state.can_send());
}

#[test]
fn begin_send_ignores_whitespace_silently() {
    let mut state = ChatState {
        draft: "   ".to_owned(),
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), None);
    assert!(!state.sending);
    assert_eq!(state.error, None);
}

#[test]
fn begin_send_rejects_oversized_draft_with_message() {
    let mut state = ChatState {
        draft: "x".repeat(5001),
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), None);
    assert_eq!(state.error.as_deref(), Some(text::MESSAGE_TOO_LONG));
}

#[test]
fn begin_send_is_ignored_while_sending() {
    let mut state = ChatState {
        draft: "hi".to_owned(),
        sending: true,
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), None);
}

#[test]
fn failed_fetch_keeps_previous_messages() {
    let mut state = ChatState {
        messages: vec![message(1, "bob", "old")],
        ..ChatState::default()
    };
    state.begin_fetch();
    let route = state.apply_fetch(FetchOutcome::Failed(text::MESSAGES_LOAD_FAILED.to_owned()));
    assert_eq!(route, None);
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.error.as_deref(), Some(text::MESSAGES_LOAD_FAILED));
}

#[test]
fn failed_send_keeps_draft() {
    let mut state = ChatState {
        draft: "hello".to_owned(),
        ..ChatState::default()
    };
    state.begin_send();
    let next = state.apply_send(SendOutcome::Failed(text::MESSAGE_SEND_FAILED.to_owned()));
    assert_eq!(next, AfterSend::Stay);
    assert!(!state.sending);
    assert_eq!(state.draft, "hello");
    assert_eq!(state.error.as_deref(), Some(text::MESSAGE_SEND_FAILED));
}

// =============================================================
// Mount / fetch
// =============================================================

#[tokio::test]
async fn mount_without_token_redirects_without_backend_calls() {
    let api = FakeApi::default();
    let session = Session::in_memory();

    let outcome = fetch_messages(&api, &session).await;

    assert_eq!(outcome, FetchOutcome::Redirect(Route::Login));
    assert!(api.calls().is_empty());

    let mut state = ChatState::default();
    assert_eq!(state.apply_fetch(outcome), Some(Route::Login));
}

#[tokio::test]
async fn mount_with_token_loads_default_page() {
    let api = FakeApi::default().with_messages(vec![message(1, "bob", "hi"), message(2, "alice", "yo")]);
    let session = logged_in();

    let mut state = ChatState::default();
    let route = state.apply_fetch(fetch_messages(&api, &session).await);

    assert_eq!(route, None);
    assert!(!state.loading);
    assert_eq!(state.messages.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(
        api.calls(),
        vec![Call::Messages {
            token: "abc123".to_owned(),
            limit: 50,
            offset: 0
        }]
    );
}

#[tokio::test]
async fn fetch_failure_yields_generic_message() {
    let api = FakeApi::default().failing_messages(backend_error(500, ""));
    let outcome = fetch_messages(&api, &logged_in()).await;
    assert_eq!(outcome, FetchOutcome::Failed(text::MESSAGES_LOAD_FAILED.to_owned()));
}

// =============================================================
// Send
// =============================================================

#[tokio::test]
async fn successful_send_clears_draft_and_shows_refetched_list() {
    let api = FakeApi::default().with_messages(vec![message(1, "bob", "hi")]);
    let session = logged_in();
    let mut state = ChatState {
        draft: "hello".to_owned(),
        ..ChatState::default()
    };

    let body = state.begin_send().unwrap();
    assert!(state.sending);
    let next = state.apply_send(send_message(&api, &session, &body).await);

    assert_eq!(next, AfterSend::Refetch);
    assert!(!state.sending);
    assert!(state.draft.is_empty());

    let route = state.apply_fetch(fetch_messages(&api, &session).await);
    assert_eq!(route, None);
    assert!(!state.loading);
    assert_eq!(
        state.messages.iter().map(|m| m.text.as_str()).collect::<Vec<_>>(),
        vec!["hi", "hello"]
    );
    assert!(matches!(api.calls().last(), Some(Call::Messages { .. })));
}

#[tokio::test]
async fn send_result_comes_only_from_refetch() {
    // Refetch fails after the POST succeeds: nothing is fabricated locally.
    let api = FakeApi::default().failing_messages(ApiError::Network("offline".to_owned()));
    let session = logged_in();
    let mut state = ChatState {
        loading: false,
        draft: "hello".to_owned(),
        ..ChatState::default()
    };

    let body = state.begin_send().unwrap();
    assert_eq!(state.apply_send(send_message(&api, &session, &body).await), AfterSend::Refetch);
    state.apply_fetch(fetch_messages(&api, &session).await);

    assert!(state.messages.is_empty());
    assert!(state.draft.is_empty());
    assert_eq!(state.error.as_deref(), Some(text::MESSAGES_LOAD_FAILED));
}

#[test]
fn accepted_send_shows_loading_until_refetch_lands() {
    let mut state = ChatState {
        loading: false,
        messages: vec![message(1, "bob", "hi")],
        draft: "hello".to_owned(),
        ..ChatState::default()
    };
    state.begin_send();
    assert!(!state.loading);

    let next = state.apply_send(SendOutcome::Sent(message(2, "alice", "hello")));

    assert_eq!(next, AfterSend::Refetch);
    assert!(state.loading);
    assert_eq!(state.messages.len(), 1);

    state.apply_fetch(FetchOutcome::Loaded(vec![message(1, "bob", "hi"), message(2, "alice", "hello")]));
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn send_redirect_passes_route_through() {
    let mut state = ChatState {
        draft: "hello".to_owned(),
        ..ChatState::default()
    };
    state.begin_send();
    assert_eq!(
        state.apply_send(SendOutcome::Redirect(Route::Login)),
        AfterSend::Redirect(Route::Login)
    );
    assert!(!state.sending);
}

#[tokio::test]
async fn whitespace_send_never_reaches_backend() {
    let api = FakeApi::default();
    let mut state = ChatState {
        draft: " \n ".to_owned(),
        ..ChatState::default()
    };
    assert_eq!(state.begin_send(), None);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn send_without_token_redirects() {
    let api = FakeApi::default();
    let outcome = send_message(&api, &Session::in_memory(), "hi").await;
    assert_eq!(outcome, SendOutcome::Redirect(Route::Login));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn send_failure_reports_generic_message() {
    let api = FakeApi::default().failing_send(backend_error(400, r#"{"text": ["too long"]}"#));
    let outcome = send_message(&api, &logged_in(), "hi").await;
    assert_eq!(outcome, SendOutcome::Failed(text::MESSAGE_SEND_FAILED.to_owned()));
    assert_eq!(api.calls().len(), 1);
}

// =============================================================
// Logout
// =============================================================

#[tokio::test]
async fn logout_notifies_backend_and_clears_token() {
    let api = FakeApi::default();
    let session = logged_in();

    assert_eq!(logout(&api, &session).await, Route::Login);
    assert!(!session.is_authenticated());
    assert_eq!(
        api.calls(),
        vec![Call::Logout {
            token: "abc123".to_owned()
        }]
    );
}

#[tokio::test]
async fn logout_clears_token_even_when_backend_fails() {
    let api = FakeApi::default().failing_logout(ApiError::Network("offline".to_owned()));
    let session = logged_in();

    assert_eq!(logout(&api, &session).await, Route::Login);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn logout_without_token_skips_backend() {
    let api = FakeApi::default();
    assert_eq!(logout(&api, &Session::in_memory()).await, Route::Login);
    assert!(api.calls().is_empty());
}
