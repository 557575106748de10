//! Registration view flow. Same machine as login, against the register
//! endpoint.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::login::{AuthOutcome, establish};
use crate::api::ChatApi;
use crate::session::Session;
use crate::text;
use crate::types::Credentials;

/// Create an account and persist the issued token.
pub async fn sign_up<A>(api: &A, session: &Session, credentials: &Credentials) -> AuthOutcome
where
    A: ChatApi + ?Sized,
{
    let result = api.register(credentials).await;
    establish(session, result, text::REGISTER_FAILED)
}
