//! REST contract of the Wheels backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`WheelsApi`] is the seam between the flows in this crate and the HTTP
//! adapters: `gloo-net` in the browser client, `reqwest` in the CLI. Both
//! adapters share the paths in [`endpoints`] and the login body decoding in
//! [`LoginReply::from_body`].
//!
//! ERROR HANDLING
//! ==============
//! Adapters map every transport, status, and decode failure onto
//! [`ApiError`]. Screens collapse all of them into one generic notification;
//! the variants exist for logging.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Deserialize;

use crate::session::{AuthToken, DriverId};
use crate::types::{Credentials, RegistrationProfile, RideOffer};

/// Backend paths, relative to the configured base URL.
pub mod endpoints {
    use crate::session::DriverId;

    pub const RIDES: &str = "/viajes";
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";

    /// Ride creation path scoped to the offering driver.
    #[must_use]
    pub fn create_ride(driver: &DriverId) -> String {
        format!("{RIDES}/{driver}")
    }

    /// Join a base URL and a path without doubling the slash.
    #[must_use]
    pub fn url(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// No HTTP transport in this build (non-browser client build).
    #[error("backend not available in this build")]
    Unavailable,
}

/// Operations the client consumes from the backend.
///
/// `?Send` because the browser adapter's futures hold JS handles.
#[async_trait(?Send)]
pub trait WheelsApi {
    /// `GET /viajes`.
    async fn list_rides(&self, token: &AuthToken) -> Result<Vec<RideOffer>, ApiError>;

    /// `POST /viajes/{driverId}`. The response body is ignored.
    async fn create_ride(&self, token: &AuthToken, driver: &DriverId, ride: &RideOffer) -> Result<(), ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError>;

    /// `POST /auth/register`. The response body is ignored.
    async fn register(&self, profile: &RegistrationProfile) -> Result<(), ApiError>;
}

/// Tagged login result carrying an explicit discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoginResult {
    Ok {
        token: String,
    },
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

/// Decoded body of a login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoginReply {
    /// `{"status": "ok" | "error", ...}`.
    Structured(LoginResult),
    /// A bare token string, either JSON-quoted or as plain text.
    Bare(String),
}

impl LoginReply {
    /// Decode a raw response body.
    ///
    /// Bodies that are neither a tagged result nor a JSON string are taken
    /// as a bare value with only the trailing line break removed, so
    /// plain-text and numeric replies still reach the token check.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Self>(body).unwrap_or_else(|_| Self::Bare(body.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Token carried by a successful reply.
    ///
    /// Returns `None` for an explicit error result and for any token that is
    /// empty or lacks the token prefix.
    #[must_use]
    pub fn into_token(self) -> Option<AuthToken> {
        match self {
            Self::Structured(LoginResult::Ok { token }) | Self::Bare(token) => AuthToken::parse(&token),
            Self::Structured(LoginResult::Error { .. }) => None,
        }
    }
}
