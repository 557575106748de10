//! Group chat page: message list, composer, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. On mount it asks the session for a token and either
//! redirects to `/login` or loads the latest page of messages. After a send
//! the list is always refetched; nothing is appended locally.

use chat::Route;
use chat::flow::chat::ChatState;
#[cfg(feature = "hydrate")]
use chat::flow::chat::AfterSend;
use chat::types::Message;
use leptos::prelude::*;

use crate::net::api::RestApi;
use crate::util::nav::install_navigation;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = RwSignal::new(ChatState::default());
    let target = RwSignal::new(None::<Route>);
    install_navigation(target);

    let session = expect_context::<chat::Session>();
    let api = expect_context::<RestApi>();

    // Mount: token check, then initial fetch. Effects only run in the browser.
    {
        let session = session.clone();
        let api = api.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    refresh(&api, &session, state, target).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &api);
            }
        });
    }

    let on_send = {
        let session = session.clone();
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(body) = state.try_update(ChatState::begin_send).flatten() else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = chat::flow::chat::send_message(&api, &session, &body).await;
                    match state.try_update(|s| s.apply_send(outcome)) {
                        Some(AfterSend::Redirect(route)) => target.set(Some(route)),
                        Some(AfterSend::Refetch) => refresh(&api, &session, state, target).await,
                        Some(AfterSend::Stay) | None => {}
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &api, body);
            }
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let route = chat::flow::chat::logout(&api, &session).await;
                target.set(Some(route));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &api);
        }
    };

    let sending = move || state.with(|s| s.sending);

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <h1>"Групповой чат"</h1>
                <div class="chat-header-actions">
                    <a href=Route::Profile.path() class="profile-link">"Профиль"</a>
                    <button class="logout-button" on:click=on_logout>"Выйти"</button>
                </div>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <div class="messages-container">
                {move || {
                    if state.with(|s| s.loading) {
                        view! { <div class="loading">"Загрузка сообщений..."</div> }.into_any()
                    } else if state.with(|s| s.messages.is_empty()) {
                        view! { <div class="no-messages">"Нет сообщений. Начните беседу!"</div> }
                            .into_any()
                    } else {
                        view! {
                            <div class="messages-list">
                                <For
                                    each=move || state.with(|s| s.messages.clone())
                                    key=|message| message.id
                                    children=move |message: Message| {
                                        view! {
                                            <div class="message-item">
                                                <div class="message-author">{message.author}</div>
                                                <div class="message-text">{message.text}</div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <form class="message-form" on:submit=on_send>
                <input
                    type="text"
                    class="message-input"
                    placeholder="Введите сообщение..."
                    maxlength=chat::validate::MESSAGE_MAX_CHARS.to_string()
                    disabled=sending
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft = value);
                    }
                />
                <button
                    type="submit"
                    class="send-button"
                    disabled=move || !state.with(ChatState::can_send)
                >
                    {move || if sending() { "Отправка..." } else { "Отправить" }}
                </button>
            </form>
        </div>
    }
}

/// Fetch the message list into `state`, or request a redirect.
#[cfg(feature = "hydrate")]
async fn refresh(
    api: &RestApi,
    session: &chat::Session,
    state: RwSignal<ChatState>,
    target: RwSignal<Option<Route>>,
) {
    state.update(ChatState::begin_fetch);
    let outcome = chat::flow::chat::fetch_messages(api, session).await;
    if let Some(route) = state.try_update(|s| s.apply_fetch(outcome)).flatten() {
        target.set(Some(route));
    }
}
