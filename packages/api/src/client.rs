//! # HTTP client wrapper
//!
//! [`ApiClient`] resolves `/api/...` paths against the configured base URL and
//! attaches `Authorization: Bearer <token>` to every request when it was built
//! with a token. The token is handed in by the caller (the UI's auth context);
//! the client never reads storage itself.
//!
//! Responses are funnelled through [`ApiClient::send_json`] /
//! [`ApiClient::send_empty`], which turn non-2xx statuses into
//! [`RequestError::Status`] carrying the server's `message`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ClientConfig, Credentials};

use crate::error::{error_message, RequestError};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper over `reqwest::Client` bound to one backend and one identity.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: build_http(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client for the configured backend acting as the given identity.
    pub fn from_config(config: &ClientConfig, credentials: &Credentials) -> Self {
        Self::new(config.api.base_url.clone()).with_token(credentials.token.clone())
    }

    /// Attach (or drop) the bearer token. Blank tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Start a request, with the bearer header when a token is held.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RequestError> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// Send and discard whatever body comes back.
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), RequestError> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, RequestError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", self.base_url, e);
            RequestError::Network(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url().path());
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        tracing::warn!(
            "API error {}: {}",
            status.as_u16(),
            message.as_deref().unwrap_or("<no message>")
        );
        Err(RequestError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}
