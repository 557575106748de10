//! Chat view flow.
//!
//! Two independent machines share one state struct:
//!
//! - feed: `mounting -> { no token: redirect } -> loading -> { loaded | error }`
//! - send: `composing -> sending -> { sent: clear draft, loading, refetch } | { error }`
//!
//! A sent message is never appended locally. The list shown after a send is
//! always the backend's answer to a full refetch, which the driver runs when
//! [`ChatState::apply_send`] returns [`AfterSend::Refetch`].

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::api::ChatApi;
use crate::route::Route;
use crate::session::Session;
use crate::text;
use crate::types::Message;
use crate::validate;

/// State of the chat view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub draft: String,
    pub loading: bool,
    pub sending: bool,
    pub error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            loading: true,
            sending: false,
            error: None,
        }
    }
}

impl ChatState {
    /// Whether the send button should be enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.sending && !self.draft.trim().is_empty()
    }

    /// Enter the loading state before a fetch.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result; returns a redirect if the session is gone.
    ///
    /// On failure the previously loaded list stays visible.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> Option<Route> {
        self.loading = false;
        match outcome {
            FetchOutcome::Redirect(route) => Some(route),
            FetchOutcome::Loaded(messages) => {
                self.messages = messages;
                None
            }
            FetchOutcome::Failed(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Start sending the current draft.
    ///
    /// Returns the text to send, or `None` if a send is in flight or the
    /// draft was rejected. Blank drafts are ignored without a message.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.sending {
            return None;
        }
        match validate::message_draft(&self.draft) {
            Ok(draft) => {
                let draft = draft.to_owned();
                self.sending = true;
                self.error = None;
                Some(draft)
            }
            Err(rejection) => {
                if let Some(message) = rejection.message() {
                    self.error = Some(message.to_owned());
                }
                None
            }
        }
    }

    /// Apply a send result and say what the driver does next.
    ///
    /// An accepted message clears the draft and puts the list back into the
    /// loading state until the refetch lands.
    pub fn apply_send(&mut self, outcome: SendOutcome) -> AfterSend {
        self.sending = false;
        match outcome {
            SendOutcome::Redirect(route) => AfterSend::Redirect(route),
            SendOutcome::Sent(_) => {
                self.draft.clear();
                self.begin_fetch();
                AfterSend::Refetch
            }
            SendOutcome::Failed(message) => {
                self.error = Some(message);
                AfterSend::Stay
            }
        }
    }
}

/// Result of fetching the message list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Redirect(Route),
    Loaded(Vec<Message>),
    Failed(String),
}

/// Result of sending a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Redirect(Route),
    /// Accepted by the backend.
    Sent(Message),
    Failed(String),
}

/// Next step after [`ChatState::apply_send`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterSend {
    Redirect(Route),
    /// Run [`fetch_messages`] and apply it.
    Refetch,
    Stay,
}

/// Fetch the first page of messages, or redirect without a backend call if
/// no token is stored. This is also the mount step of the view.
pub async fn fetch_messages<A>(api: &A, session: &Session) -> FetchOutcome
where
    A: ChatApi + ?Sized,
{
    let token = match session.require() {
        Ok(token) => token,
        Err(route) => return FetchOutcome::Redirect(route),
    };
    match api.latest_messages(&token).await {
        Ok(messages) => {
            log::debug!("loaded {} messages", messages.len());
            FetchOutcome::Loaded(messages)
        }
        Err(e) => {
            log::warn!("failed to load messages: {e}");
            FetchOutcome::Failed(text::MESSAGES_LOAD_FAILED.to_owned())
        }
    }
}

/// Send `body`. The refetch is the caller's next step.
pub async fn send_message<A>(api: &A, session: &Session, body: &str) -> SendOutcome
where
    A: ChatApi + ?Sized,
{
    let token = match session.require() {
        Ok(token) => token,
        Err(route) => return SendOutcome::Redirect(route),
    };
    match api.send_message(&token, body).await {
        Ok(created) => {
            log::debug!("message {} accepted", created.id);
            SendOutcome::Sent(created)
        }
        Err(e) => {
            log::warn!("failed to send message: {e}");
            SendOutcome::Failed(text::MESSAGE_SEND_FAILED.to_owned())
        }
    }
}

/// Log out: notify the backend if possible, then always drop the local
/// session. Backend failures are logged and swallowed.
pub async fn logout<A>(api: &A, session: &Session) -> Route
where
    A: ChatApi + ?Sized,
{
    if let Some(token) = session.token() {
        if let Err(e) = api.logout(&token).await {
            log::warn!("backend logout failed, clearing local session anyway: {e}");
        }
    }
    session.end();
    Route::Login
}
