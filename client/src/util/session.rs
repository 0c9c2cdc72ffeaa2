//! Browser `localStorage` implementation of the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as context by `App`; login writes through it, logout
//! clears it, and the dashboard guard reads it on mount.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is browser-only. Native builds behave like a browser with
//! storage disabled: reads find nothing and writes fail.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rides::session::TOKEN_KEY;
use rides::{AuthToken, SessionError, SessionStore};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "localStorage unavailable";

/// Session store backed by `window.localStorage`, keyed by [`TOKEN_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSession;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))
}

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = TOKEN_KEY;
            None
        }
    }

    fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_KEY, token.as_str())
                .map_err(|_| SessionError::Storage("localStorage write rejected".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(SessionError::Storage(UNAVAILABLE.to_owned()))
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|_| SessionError::Storage("localStorage delete rejected".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
