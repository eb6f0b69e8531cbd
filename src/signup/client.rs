//! Registration client used by the flow to reach the authentication API. The
//! capability trait keeps the flow independent of transport so tests can swap in
//! a stub; the HTTP implementation applies one timeout policy and turns every
//! failure into a [`ClientError`]. Request bodies contain the password and are
//! never logged.

use super::credentials::Credentials;
use crate::APP_USER_AGENT;
use reqwest::{Client, Response};
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

/// Default registration endpoint, relative to the API base URL.
pub const DEFAULT_REGISTER_PATH: &str = "/api/auth/register";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Maximum number of error body characters kept in [`ClientError::Http`].
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// HTTP status of the failed response, `None` for transport-level failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Single-call capability: register one set of credentials.
pub trait RegistrationClient {
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl<C: RegistrationClient + Sync> RegistrationClient for &C {
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).register(credentials)
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub register_path: String,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Full registration URL built from the base URL and path.
    #[must_use]
    pub fn register_url(&self) -> String {
        build_url_with_base(&self.api_base_url, &self.register_path)
    }
}

/// [`RegistrationClient`] that posts JSON with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpRegistrationClient {
    client: Client,
    url: String,
}

impl HttpRegistrationClient {
    /// # Errors
    /// Returns [`ClientError::Config`] if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            url: config.register_url(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RegistrationClient for HttpRegistrationClient {
    #[instrument(skip(self, credentials), fields(url = %self.url))]
    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let response = self
            .client
            .post(&self.url)
            .json(&credentials.request())
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        warn!("registration request timed out");
        ClientError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        error!("Error building registration request: {err}");
        ClientError::Serialization(format!("Failed to build request: {err}"))
    } else {
        error!("Error sending registration request: {err}");
        ClientError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        debug!("registration accepted: {}", status);
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    warn!("registration rejected: {}", status);
    Err(ClientError::Http {
        status: status.as_u16(),
        message: sanitize_body(&body),
    })
}

/// Trims and truncates error bodies before they are stored in an error.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
