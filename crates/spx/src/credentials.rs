//! Credential precedence: which of the two retained authentication artifacts
//! a recognition session actually uses.

use crate::{SpxError, SpxResult};

use std::panic::Location;

use error_location::ErrorLocation;
use spx_engine::Credential;

/// Picks the credential a recognition session authenticates with.
///
/// A non-empty subscription key always wins over an authorization token,
/// regardless of the order the two were set in; both values stay retained and
/// the decision is made fresh at every session start, never cached, so a
/// token refreshed after construction is observed.
///
/// # Errors
///
/// Returns [`SpxError::MissingCredential`] when both values are empty.
#[track_caller]
pub fn resolve(subscription_key: &str, authorization_token: &str) -> SpxResult<Credential> {
    if !subscription_key.is_empty() {
        return Ok(Credential::SubscriptionKey(subscription_key.to_string()));
    }

    if !authorization_token.is_empty() {
        return Ok(Credential::AuthorizationToken(authorization_token.to_string()));
    }

    Err(SpxError::MissingCredential {
        location: ErrorLocation::from(Location::caller()),
    })
}
