//! Session store: the local record of who is logged in
//!
//! A session is two keys in a [`KeyValueStore`]: the token and the
//! JSON-encoded profile. Both are written together and removed together, and
//! a store holding only one of them reads back as "no session".

use thiserror::Error;

use crate::core::auth::{
    validate_credentials, validate_registration, AuthError, CredentialVerifier,
    DEFAULT_MIN_PASSWORD_LENGTH,
};
use crate::core::models::{Credentials, Registration, SessionRecord, UserProfile};
use crate::core::storage::{KeyValueStore, StorageError};
use crate::{debug, info, warn};

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "userToken";

/// Storage key holding the JSON-serialized [`UserProfile`]
pub const PROFILE_KEY: &str = "userData";

/// Failures surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Form validation or credential verification failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The session could not be written or cleared
    #[error("Could not update the saved session: {0}")]
    Storage(#[from] StorageError),

    /// A gated action was attempted without a session
    #[error("Please login to access this service")]
    LoginRequired,
}

/// Injectable session service with `load`, `login`, `register` and `logout`
#[derive(Debug)]
pub struct SessionStore<S, V> {
    store: S,
    verifier: V,
    min_password_length: usize,
}

impl<S: KeyValueStore, V: CredentialVerifier> SessionStore<S, V> {
    /// Create a session store over `store`, authenticating with `verifier`
    #[must_use]
    pub fn new(store: S, verifier: V) -> Self {
        Self {
            store,
            verifier,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }

    /// Override the minimum password length enforced at registration
    #[must_use]
    pub fn with_min_password_length(mut self, min: usize) -> Self {
        self.min_password_length = min;
        self
    }

    /// Backing key-value store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted session
    ///
    /// Any read or decode failure, and any half-written record, is logged and
    /// reported as no session.
    #[must_use]
    pub fn load(&self) -> Option<SessionRecord> {
        let token = self.read_key(TOKEN_KEY)?;
        let profile_json = self.read_key(PROFILE_KEY)?;

        let (token, profile_json) = match (token, profile_json) {
            (Some(token), Some(profile)) => (token, profile),
            (None, None) => return None,
            _ => {
                warn!("Ignoring partial session: token and profile must both be present");
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&profile_json) {
            Ok(profile) => Some(SessionRecord::new(token, profile)),
            Err(e) => {
                warn!("Ignoring unreadable session profile: {e}");
                None
            }
        }
    }

    /// Whether a session is currently persisted
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }

    /// Log in with `credentials`
    ///
    /// Empty fields are rejected before the verifier is consulted. On success
    /// token and profile are persisted in one write.
    ///
    /// # Errors
    /// Returns [`SessionError::Auth`] on validation or verification failure and
    /// [`SessionError::Storage`] if the session cannot be saved; any previously
    /// saved session is kept in either case
    pub fn login(&self, credentials: &Credentials) -> Result<SessionRecord, SessionError> {
        validate_credentials(credentials)?;
        let grant = self.verifier.verify(credentials)?;
        self.persist(&grant)?;
        info!("Logged in as {}", grant.profile.student_id);
        Ok(grant)
    }

    /// Create an account and log straight into it
    ///
    /// # Errors
    /// Returns [`SessionError::Auth`] when the form is invalid or enrollment
    /// fails, and [`SessionError::Storage`] if the session cannot be saved
    pub fn register(&self, registration: &Registration) -> Result<SessionRecord, SessionError> {
        validate_registration(registration, self.min_password_length)?;
        let grant = self.verifier.enroll(registration)?;
        self.persist(&grant)?;
        info!("Registered and logged in as {}", grant.profile.student_id);
        Ok(grant)
    }

    /// Clear the persisted session; a no-op when none exists
    ///
    /// # Errors
    /// Returns [`SessionError::Storage`] if the store cannot be written
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.remove_many(&[TOKEN_KEY, PROFILE_KEY])?;
        info!("Session cleared");
        Ok(())
    }

    /// The current session, or [`SessionError::LoginRequired`]
    ///
    /// # Errors
    /// Returns [`SessionError::LoginRequired`] when no session is persisted
    pub fn require_session(&self) -> Result<SessionRecord, SessionError> {
        self.load().ok_or(SessionError::LoginRequired)
    }

    /// Read a key, treating errors and empty strings as absent
    ///
    /// The outer `None` means the store could not be read at all.
    fn read_key(&self, key: &str) -> Option<Option<String>> {
        match self.store.get(key) {
            Ok(value) => Some(value.filter(|v| !v.is_empty())),
            Err(e) => {
                warn!("Could not read '{key}' from session storage: {e}");
                None
            }
        }
    }

    fn persist(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let profile_json = serde_json::to_string(&record.profile).map_err(StorageError::from)?;
        // A failed batch leaves the previous session untouched
        self.store
            .set_many(&[
                (TOKEN_KEY, record.token.clone()),
                (PROFILE_KEY, profile_json),
            ])
            .map_err(|e| {
                debug!("Session write failed: {e}");
                SessionError::from(e)
            })
    }
}
