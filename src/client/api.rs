//! Core HTTP client for the homework statuses API

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::config::ClientConfig;
use crate::result::{PollError, Result};

/// Pure HTTP client for the homework statuses endpoint.
///
/// Issues one authenticated GET per call and hands the body back as raw JSON;
/// shape checking belongs to the validator, not here.
#[derive(Debug)]
pub struct HomeworkApi {
    client: Client,
    config: ClientConfig,
}

impl HomeworkApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PollError::api)?;

        Ok(Self { client, config })
    }

    /// Fetch homework statuses changed since the given Unix timestamp.
    ///
    /// A zero or negative `since` falls back to the current time.
    #[instrument(skip(self))]
    pub async fn homework_statuses(&self, since: i64) -> Result<Value> {
        let from_date = if since > 0 {
            since
        } else {
            Utc::now().timestamp()
        };

        let response = self
            .client
            .get(self.config.endpoint.as_str())
            .header(
                "Authorization",
                format!("OAuth {}", self.config.oauth_token),
            )
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!(
                    endpoint = %self.config.endpoint,
                    error = %e,
                    "homework API endpoint is unreachable"
                );
                PollError::api(e)
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(PollError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| PollError::type_mismatch("response body", "JSON"))?;

        debug!(from_date, "fetched homework statuses");
        Ok(body)
    }
}
