//! Persisted login session (token + user profile).
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared between pages: login writes it, the
//! auth guard reads it on every page load, and logout clears it together with
//! the cart.
//!
//! DESIGN
//! ======
//! Token and profile are written and cleared as a pair. A store holding only
//! one of them, or a profile that no longer parses, is not a session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Profile;
use crate::state::cart::{CART_KEY, CartStore};
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored profile is corrupt: {0}")]
    CorruptProfile(String),
    #[error("refusing to store an empty token")]
    EmptyToken,
}

/// Session accessors over an injected key-value store.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff both `token` and `user` are present and non-empty.
    ///
    /// Storage failures read as "absent".
    pub fn is_authenticated(&self) -> bool {
        self.non_empty(TOKEN_KEY).is_some() && self.non_empty(USER_KEY).is_some()
    }

    /// `is_authenticated` plus a profile that actually deserializes.
    pub fn has_valid_session(&self) -> bool {
        self.is_authenticated() && self.user().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.non_empty(TOKEN_KEY)
    }

    /// Read the stored profile, distinguishing "absent" from "corrupt".
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if storage cannot be read and
    /// `SessionError::CorruptProfile` if the stored value is not a profile.
    pub fn try_user(&self) -> Result<Option<Profile>, SessionError> {
        let Some(raw) = self.store.get(USER_KEY)?.filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SessionError::CorruptProfile(e.to_string()))
    }

    /// Read the stored profile; any failure is `None`.
    pub fn user(&self) -> Option<Profile> {
        match self.try_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("treating session as signed out: {e}");
                None
            }
        }
    }

    /// Persist a new session.
    ///
    /// If the profile cannot be written the token write is rolled back, so no
    /// reader ever sees a token without a matching profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the profile cannot be encoded,
    /// or storage rejects either write.
    pub fn set_auth(&self, token: &str, profile: &Profile) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let raw_profile = serde_json::to_string(profile).map_err(|e| StorageError::Encode(e.to_string()))?;

        self.store.set(TOKEN_KEY, token)?;
        if let Err(e) = self.store.set(USER_KEY, &raw_profile) {
            if let Err(rollback) = self.store.remove(TOKEN_KEY) {
                log::warn!("failed to roll back token after profile write error: {rollback}");
            }
            return Err(e.into());
        }
        log::info!("session stored for {}", profile.display_name());
        Ok(())
    }

    /// Remove token, profile, and cart.
    ///
    /// All three removals are attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn clear_auth(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        let removals = [
            (TOKEN_KEY, self.store.remove(TOKEN_KEY)),
            (USER_KEY, self.store.remove(USER_KEY)),
            (CART_KEY, CartStore::new(&self.store).clear()),
        ];
        for (key, result) in removals {
            if let Err(e) = result {
                log::warn!("failed to clear {key}: {e}");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                log::info!("session cleared");
                Ok(())
            }
        }
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten().filter(|v| !v.is_empty())
    }
}
