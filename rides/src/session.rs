//! Session token and the store that persists it between screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state shared across screens. Login writes it,
//! logout clears it, and every protected screen reads it on mount. Callers
//! hand a [`SessionStore`] to each flow explicitly instead of reaching for
//! ambient storage.
//!
//! TRADE-OFFS
//! ==========
//! A stored token is trusted on shape alone. Expiry and signature are the
//! backend's business; a stale token surfaces as a failed request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use base64::Engine as _;
use base64::engine::general_purpose;
use serde_json::{Map, Value};

/// Storage key the token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Prefix of a base64url-encoded JSON header, the shape every issued token has.
pub const TOKEN_PREFIX: &str = "ey";

/// Claims checked, in order, for the acting user's identifier.
pub const IDENTITY_CLAIMS: [&str; 4] = ["idUsuario", "userId", "id", "sub"];

/// Error returned by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No plausible token is stored.
    #[error("no session token stored")]
    MissingToken,
    /// The token's payload segment is not base64url JSON.
    #[error("session token payload is malformed")]
    MalformedToken,
    /// The payload carries none of the identity claims.
    #[error("session token has no user identifier claim")]
    MissingSubject,
    /// The backing store rejected a read or write.
    #[error("session storage failed: {0}")]
    Storage(String),
}

/// Opaque credential returned by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Accept `raw` verbatim if it is non-empty and starts with the token
    /// prefix. Surrounding whitespace is not stripped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.starts_with(TOKEN_PREFIX) {
            return None;
        }
        Some(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the payload segment without verifying the signature.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] when the token has no payload
    /// segment or the segment is not base64url-encoded JSON object.
    pub fn claims(&self) -> Result<TokenClaims, SessionError> {
        let payload = self.0.split('.').nth(1).ok_or(SessionError::MalformedToken)?;
        let bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| SessionError::MalformedToken)?;
        let claims = serde_json::from_slice::<Map<String, Value>>(&bytes).map_err(|_| SessionError::MalformedToken)?;
        Ok(TokenClaims(claims))
    }

    /// Identifier of the authenticated user, taken from the token claims.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] or [`SessionError::MissingSubject`].
    pub fn driver_id(&self) -> Result<DriverId, SessionError> {
        self.claims()?.subject().ok_or(SessionError::MissingSubject)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Unverified token payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenClaims(Map<String, Value>);

impl TokenClaims {
    /// First identity claim holding a non-empty string or an integer.
    #[must_use]
    pub fn subject(&self) -> Option<DriverId> {
        IDENTITY_CLAIMS.iter().find_map(|key| match self.0.get(*key)? {
            Value::String(s) if !s.trim().is_empty() => Some(DriverId(s.trim().to_owned())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(DriverId(n.to_string())),
            _ => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Identifier of the user offering a ride, used as a path segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverId(String);

impl DriverId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistent home of the session token.
///
/// Implementations use interior mutability: the browser store writes
/// through to `localStorage`, the CLI store to a file.
pub trait SessionStore {
    /// Raw stored value, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store rejects the write.
    fn set(&self, token: &AuthToken) -> Result<(), SessionError>;

    /// Remove the token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store rejects the delete.
    fn clear(&self) -> Result<(), SessionError>;

    /// Stored token, if one is present and plausible.
    fn token(&self) -> Option<AuthToken> {
        self.get().as_deref().and_then(AuthToken::parse)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

/// Key-value store held in memory, keyed like browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw token value, plausible or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(TOKEN_KEY.to_owned(), raw.to_owned());
        store
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.entries.borrow().get(TOKEN_KEY).cloned()
    }

    fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(TOKEN_KEY.to_owned(), token.as_str().to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(TOKEN_KEY);
        Ok(())
    }
}
