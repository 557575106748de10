//! Login view flow.
//!
//! `idle -> submitting -> { signed in: token stored, go to chat } | { failed:
//! error shown, idle }`. The loading flag is cleared on every outcome.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::api::ChatApi;
use crate::error::ApiError;
use crate::route::Route;
use crate::session::Session;
use crate::text;
use crate::types::{AuthResponse, Credentials};
use crate::validate;

/// Form state shared by the login and registration views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl CredentialsForm {
    /// Start a submission.
    ///
    /// Returns `None` while a submission is in flight, or when a field is
    /// blank (the form error is set in that case).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.error = None;
        match validate::credentials(&self.username, &self.password) {
            Ok(credentials) => {
                self.loading = true;
                Some(credentials)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Apply a finished submission; returns where to navigate, if anywhere.
    pub fn finish(&mut self, outcome: &AuthOutcome) -> Option<Route> {
        self.loading = false;
        match outcome {
            AuthOutcome::SignedIn { redirect } => {
                self.password.clear();
                Some(*redirect)
            }
            AuthOutcome::Failed { message } => {
                self.error = Some(message.clone());
                None
            }
        }
    }
}

/// Result of a login or registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token persisted; navigate to `redirect`.
    SignedIn { redirect: Route },
    /// Nothing persisted; show `message`.
    Failed { message: String },
}

/// Log in and persist the issued token.
pub async fn sign_in<A>(api: &A, session: &Session, credentials: &Credentials) -> AuthOutcome
where
    A: ChatApi + ?Sized,
{
    let result = api.login(credentials).await;
    establish(session, result, text::LOGIN_FAILED)
}

/// Turn an auth endpoint result into a stored session or a display message.
pub(crate) fn establish(
    session: &Session,
    result: Result<AuthResponse, ApiError>,
    fallback: &str,
) -> AuthOutcome {
    match result {
        Ok(response) => match session.begin(&response.token) {
            Ok(()) => {
                log::debug!("session established");
                AuthOutcome::SignedIn {
                    redirect: Route::Chat,
                }
            }
            Err(e) => {
                log::warn!("failed to persist session token: {e}");
                AuthOutcome::Failed {
                    message: text::SESSION_SAVE_FAILED.to_owned(),
                }
            }
        },
        Err(e) => {
            log::warn!("authentication request failed: {e}");
            AuthOutcome::Failed {
                message: e.backend_message().unwrap_or(fallback).to_owned(),
            }
        }
    }
}
