//! Profile page: shows the signed-in member.

use chat::Route;
use chat::flow::profile::ProfileState;
use leptos::prelude::*;

use crate::net::api::RestApi;
use crate::util::nav::install_navigation;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::default());
    let target = RwSignal::new(None::<Route>);
    install_navigation(target);

    let session = expect_context::<chat::Session>();
    let api = expect_context::<RestApi>();

    {
        let session = session.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = chat::flow::profile::load_profile(&api, &session).await;
                    if let Some(route) = state.try_update(|s| s.apply(outcome)).flatten() {
                        target.set(Some(route));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &api);
            }
        });
    }

    let on_back = move |_| target.set(Some(Route::Chat));
    let on_logout = move |_| target.set(Some(chat::flow::profile::logout(&session)));

    view! {
        <div class="profile-container">
            <div class="profile-card">
                <h1>"Профиль"</h1>
                {move || {
                    state.with(|s| match s {
                        ProfileState::Loading => {
                            view! { <div class="loading">"Загрузка..."</div> }.into_any()
                        }
                        ProfileState::Failed(message) => {
                            view! { <div class="error-message">{message.clone()}</div> }.into_any()
                        }
                        ProfileState::Loaded(member) => {
                            let registered = chat::datetime::registered_at(
                                &member.created_at,
                                &chrono::Local,
                            );
                            view! {
                                <div class="profile-info">
                                    <div class="profile-field">
                                        <span class="profile-label">"Имя пользователя:"</span>
                                        <span class="profile-value">{member.username.clone()}</span>
                                    </div>
                                    <div class="profile-field">
                                        <span class="profile-label">"Дата регистрации:"</span>
                                        <span class="profile-value">{registered}</span>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
                <div class="profile-actions">
                    <button class="back-button" on:click=on_back>"Вернуться к чату"</button>
                    <button class="logout-button" on:click=on_logout>"Выйти"</button>
                </div>
            </div>
        </div>
    }
}
