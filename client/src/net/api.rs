//! REST adapter for the Wheels backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since these requests only make sense in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all map onto
//! `ApiError`; the flows in `rides` turn them into one notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use rides::api::endpoints;
use rides::{ApiError, AuthToken, Credentials, DriverId, LoginReply, RegistrationProfile, RideOffer, WheelsApi};

/// Backend base URL used when `WHEELS_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client for the backend rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Base URL baked in at compile time from `WHEELS_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("WHEELS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &AuthToken) -> String {
    format!("Bearer {}", token.as_str())
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[async_trait(?Send)]
impl WheelsApi for HttpApi {
    async fn list_rides(&self, token: &AuthToken) -> Result<Vec<RideOffer>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(endpoints::RIDES))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            let resp = ensure_ok(resp).await?;
            resp.json::<Vec<RideOffer>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(endpoints::RIDES), token);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_ride(&self, token: &AuthToken, driver: &DriverId, ride: &RideOffer) -> Result<(), ApiError> {
        let url = self.url(&endpoints::create_ride(driver));
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header("Authorization", &bearer(token))
                .json(ride)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token, ride);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let url = self.url(endpoints::LOGIN);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let resp = ensure_ok(resp).await?;
            let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(LoginReply::from_body(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<(), ApiError> {
        let url = self.url(endpoints::REGISTER);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(profile)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, profile);
            Err(ApiError::Unavailable)
        }
    }
}
