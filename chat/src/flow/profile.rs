//! Profile view flow.
//!
//! `mounting -> { no token: redirect } -> loading -> { loaded | error }`.
//! Logout from this view is local only: it ends the session without a
//! backend call.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::api::ChatApi;
use crate::route::Route;
use crate::session::Session;
use crate::text;
use crate::types::Member;

/// State of the profile view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(Member),
    Failed(String),
}

impl ProfileState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        match self {
            Self::Loaded(member) => Some(member),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Apply a load result; returns a redirect if the session is gone.
    pub fn apply(&mut self, outcome: ProfileOutcome) -> Option<Route> {
        match outcome {
            ProfileOutcome::Redirect(route) => Some(route),
            ProfileOutcome::Loaded(member) => {
                *self = Self::Loaded(member);
                None
            }
            ProfileOutcome::Failed(message) => {
                *self = Self::Failed(message);
                None
            }
        }
    }
}

/// Result of loading the current member.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileOutcome {
    Redirect(Route),
    Loaded(Member),
    Failed(String),
}

/// Load the current member, or redirect without a backend call if no token
/// is stored.
pub async fn load_profile<A>(api: &A, session: &Session) -> ProfileOutcome
where
    A: ChatApi + ?Sized,
{
    let token = match session.require() {
        Ok(token) => token,
        Err(route) => return ProfileOutcome::Redirect(route),
    };
    match api.current_member(&token).await {
        Ok(member) => ProfileOutcome::Loaded(member),
        Err(e) => {
            log::warn!("failed to load profile: {e}");
            ProfileOutcome::Failed(text::PROFILE_LOAD_FAILED.to_owned())
        }
    }
}

/// End the session locally and go to the login view.
#[must_use]
pub fn logout(session: &Session) -> Route {
    session.end();
    Route::Login
}
