//! Client-side input checks run before any network call.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::text;
use crate::types::Credentials;

/// Longest message the backend accepts, in characters.
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// Why a draft message was not sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftRejection {
    /// Empty or whitespace only. Silently ignored.
    Blank,
    /// Over [`MESSAGE_MAX_CHARS`].
    TooLong,
}

impl DraftRejection {
    /// Message to show the user, if the rejection is user-visible.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Blank => None,
            Self::TooLong => Some(text::MESSAGE_TOO_LONG),
        }
    }
}

/// Check a chat draft. The text is sent as typed, not trimmed.
///
/// # Errors
///
/// Returns [`DraftRejection`] for blank or oversized drafts.
pub fn message_draft(draft: &str) -> Result<&str, DraftRejection> {
    if draft.trim().is_empty() {
        return Err(DraftRejection::Blank);
    }
    if draft.chars().count() > MESSAGE_MAX_CHARS {
        return Err(DraftRejection::TooLong);
    }
    Ok(draft)
}

/// Check that both credential fields were filled in.
///
/// Length rules are enforced by the backend; this mirrors a form's
/// `required` attribute. Both fields are sent exactly as typed.
///
/// # Errors
///
/// Returns [`text::FIELDS_REQUIRED`] if either field is empty.
pub fn credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(text::FIELDS_REQUIRED);
    }
    Ok(Credentials::new(username, password))
}
