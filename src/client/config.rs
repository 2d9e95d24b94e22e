//! Configuration for the homework API client

use std::time::Duration;

use compact_str::CompactString;

use crate::{
    config::AppConfig,
    result::{PollError, Result},
};

/// Connection settings for [`HomeworkApi`](super::HomeworkApi).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Homework statuses endpoint URL
    pub endpoint: CompactString,
    /// OAuth token sent in the `Authorization` header
    pub oauth_token: CompactString,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<CompactString>, oauth_token: impl Into<CompactString>) -> Self {
        Self {
            endpoint: endpoint.into(),
            oauth_token: oauth_token.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.oauth_token.is_empty() {
            return Err(PollError::api("OAuth token cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(PollError::api(
                "endpoint URL must start with http:// or https://",
            ));
        }

        if url::Url::parse(&self.endpoint).is_err() {
            return Err(PollError::api("endpoint is not a valid URL"));
        }

        if self.timeout.is_zero() {
            return Err(PollError::api("timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl From<&AppConfig> for ClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.endpoint.clone(), config.practicum_token.clone())
            .with_timeout(config.request_timeout)
    }
}
