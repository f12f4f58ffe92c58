//! Run configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `launch-control.toml` at the project root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Session API configuration.
    #[serde(default)]
    pub api: SessionApiConfig,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Session API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionApiConfig {
    /// Session creation endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SessionApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl SessionApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api_url must use http or https (got '{}')",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.devin.ai/v1/sessions").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
