//! Username/password card shared by the login and registration pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use chat::Route;
use chat::flow::login::CredentialsForm;
use leptos::prelude::*;

use crate::util::nav::install_navigation;

/// Which backend operation the form submits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Вход",
            Self::Register => "Регистрация",
        }
    }

    pub fn submit_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (_, true) => "Загрузка...",
            (Self::Login, false) => "Войти",
            (Self::Register, false) => "Зарегистрироваться",
        }
    }

    /// Prompt and target of the link to the other form.
    pub fn switch_link(self) -> (&'static str, &'static str, Route) {
        match self {
            Self::Login => ("Нет аккаунта? ", "Зарегистрироваться", Route::Register),
            Self::Register => ("Уже есть аккаунт? ", "Войти", Route::Login),
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let form = RwSignal::new(CredentialsForm::default());
    let target = RwSignal::new(None::<Route>);
    install_navigation(target);

    let session = expect_context::<chat::Session>();
    let api = expect_context::<crate::net::api::RestApi>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(CredentialsForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = match mode {
                    AuthMode::Login => chat::flow::login::sign_in(&api, &session, &credentials).await,
                    AuthMode::Register => {
                        chat::flow::register::sign_up(&api, &session, &credentials).await
                    }
                };
                if let Some(route) = form.try_update(|f| f.finish(&outcome)).flatten() {
                    target.set(Some(route));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, credentials);
        }
    };

    let loading = move || form.with(|f| f.loading);
    let (prompt, link_text, link_route) = mode.switch_link();
    let page_class = match mode {
        AuthMode::Login => "login-container",
        AuthMode::Register => "register-container",
    };

    view! {
        <div class=page_class>
            <div class="login-card">
                <h1 class="login-title">{mode.title()}</h1>
                <form class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username" class="form-label">"Имя пользователя"</label>
                        <input
                            type="text"
                            id="username"
                            class="form-input"
                            required
                            placeholder="Введите имя пользователя"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="password" class="form-label">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            class="form-input"
                            required
                            placeholder="Введите пароль"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                        />
                    </div>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="error-message">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </div>
                    </Show>
                    <button type="submit" class="submit-button" disabled=loading>
                        {move || mode.submit_label(loading())}
                    </button>
                </form>
                <div class="auth-link">
                    <span>{prompt}</span>
                    <a href=link_route.path() class="link">{link_text}</a>
                </div>
            </div>
        </div>
    }
}
