//! Shared login/logout steps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the network calls and the notices; the storage side effects of
//! signing in and out live here so every page applies them identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, LoginSuccess};
use crate::net::types::Profile;
use crate::state::session::{SessionError, SessionStore};
use crate::util::storage::{KeyValueStore, StorageError};

pub const LOGOUT_CONFIRM_MESSAGE: &str = "Are you sure you want to logout?";

/// Why a submitted login did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not save your session: {0}")]
    Session(#[from] SessionError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    Cancelled,
    LoggedOut,
}

/// Persist the session from a login attempt.
///
/// Storage is touched only when `outcome` is a success.
///
/// # Errors
///
/// Returns the API error unchanged, or a session error if storing fails.
pub fn complete_login<S: KeyValueStore>(
    session: &SessionStore<S>,
    outcome: Result<LoginSuccess, ApiError>,
) -> Result<Profile, FlowError> {
    let LoginSuccess { token, user } = outcome?;
    session.set_auth(&token, &user)?;
    Ok(user)
}

/// Sign out if `confirmed`; clears token, profile, and cart.
///
/// Storage is only opened after the user confirmed, so cancelling is a
/// no-op even when storage is unavailable.
///
/// # Errors
///
/// Returns an error if storage could not be opened or cleared.
pub fn logout<S, F>(confirmed: bool, open_store: F) -> Result<LogoutOutcome, StorageError>
where
    S: KeyValueStore,
    F: FnOnce() -> Result<S, StorageError>,
{
    if !confirmed {
        log::debug!("logout cancelled");
        return Ok(LogoutOutcome::Cancelled);
    }
    SessionStore::new(open_store()?).clear_auth()?;
    Ok(LogoutOutcome::LoggedOut)
}
