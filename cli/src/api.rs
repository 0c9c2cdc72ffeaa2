//! `reqwest` adapter for the Wheels REST contract.
//!
//! ERROR HANDLING
//! ==============
//! A request that never gets a response is `ApiError::Transport`; a non-2xx
//! status is `ApiError::Status` carrying the response text; a 2xx body that
//! does not decode is `ApiError::Decode`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use rides::api::endpoints;
use rides::{ApiError, AuthToken, Credentials, DriverId, LoginReply, RegistrationProfile, RideOffer, WheelsApi};

use crate::CliError;

/// HTTP client rooted at the backend base URL.
#[derive(Clone, Debug)]
pub struct ReqwestApi {
    client: Client,
    base_url: String,
}

impl ReqwestApi {
    /// Build a client for `base_url`, which must be an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let parsed = Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { client: Client::new(), base_url: base_url.to_owned() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, endpoints::url(&self.base_url, path))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

#[async_trait(?Send)]
impl WheelsApi for ReqwestApi {
    async fn list_rides(&self, token: &AuthToken) -> Result<Vec<RideOffer>, ApiError> {
        let response = send(self.request(Method::GET, endpoints::RIDES).bearer_auth(token.as_str())).await?;
        response
            .json::<Vec<RideOffer>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_ride(&self, token: &AuthToken, driver: &DriverId, ride: &RideOffer) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, &endpoints::create_ride(driver))
            .bearer_auth(token.as_str())
            .json(ride);
        send(request).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let response = send(self.request(Method::POST, endpoints::LOGIN).json(credentials)).await?;
        let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(LoginReply::from_body(&body))
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<(), ApiError> {
        send(self.request(Method::POST, endpoints::REGISTER).json(profile)).await?;
        Ok(())
    }
}
