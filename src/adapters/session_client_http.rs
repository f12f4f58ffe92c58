//! Session API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, SessionApiConfig};
use crate::ports::{SessionClient, SessionResponse};

/// HTTP client for the session API.
#[derive(Clone)]
pub struct HttpSessionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpSessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSessionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpSessionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &SessionApiConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(missing_key());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from an optional key, failing when it is absent.
    pub fn from_key(api_key: Option<String>, config: &SessionApiConfig) -> Result<Self, AppError> {
        let api_key = api_key.ok_or_else(missing_key)?;
        Self::new(api_key, config)
    }

    /// Create from the `DEVIN_API_KEY` environment variable.
    pub fn from_env_with_config(config: &SessionApiConfig) -> Result<Self, AppError> {
        Self::from_key(std::env::var(API_KEY_ENV).ok(), config)
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

fn missing_key() -> AppError {
    AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    prompt: &'a str,
    idempotent: bool,
}

impl SessionClient for HttpSessionClient {
    fn post_prompt(&self, prompt: &str) -> SessionResponse {
        let request = ApiRequest { prompt, idempotent: true };

        let response = match self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "session request failed before a response");
                return SessionResponse::transport_failure(e.to_string());
            }
        };

        let status = response.status().as_u16();
        let text = response
            .text()
            .unwrap_or_else(|e| format!("Failed to read response body: {}", e));
        SessionResponse::new(status, text)
    }
}
