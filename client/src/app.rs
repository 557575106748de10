//! Root application component with routing and context providers.

use chat::Session;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{API_BASE_META, ClientConfig};
use crate::net::api::RestApi;
use crate::pages::{chat::ChatPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::util::storage::LocalStorageTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as a `<meta>` tag so the browser bundle learns the
/// backend base URL without a rebuild.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and the REST API handle to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    provide_context(Session::new(LocalStorageTokenStore));
    provide_context(RestApi::new(&config.api_base_url));

    view! {
        <Stylesheet id="leptos" href="/pkg/groupchat.css"/>
        <Title text="Групповой чат"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/chat"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
