//! Pipeline Client
//!
//! Starts a pipeline run on the third-party pipeline-execution API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::{Config, Credentials};
use crate::error::PipelineError;
use crate::models::OutboundPayload;

/// Downstream client that submits an oracle reading for processing.
///
/// The handler only depends on this trait, so tests can substitute a fake.
#[async_trait]
pub trait PipelineClient: Send + Sync {
    /// Submits `payload` once. No retries.
    async fn submit(
        &self,
        credentials: &Credentials,
        payload: &OutboundPayload,
    ) -> Result<(), PipelineError>;
}

/// `PipelineClient` backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpPipelineClient {
    client: Client,
    url: String,
}

impl HttpPipelineClient {
    /// Creates a client posting to `url` with a total request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PipelineError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Creates a client from the configured URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        Self::new(config.pipeline_url.clone(), config.pipeline_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PipelineClient for HttpPipelineClient {
    async fn submit(
        &self,
        credentials: &Credentials,
        payload: &OutboundPayload,
    ) -> Result<(), PipelineError> {
        debug!("Starting pipeline run at {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .query(&[
                ("user_id", credentials.user_id.as_str()),
                ("saved_item_id", credentials.saved_item_id.as_str()),
                ("api_key", credentials.api_key.as_str()),
            ])
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("Gumloop API error: {}", body);
            return Err(PipelineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // The run details are not used, but the body must be JSON.
        let bytes = response.bytes().await?;
        serde_json::from_slice::<serde_json::Value>(&bytes)
            .map_err(|e| PipelineError::InvalidResponse(e.to_string()))?;

        debug!("Pipeline accepted submission with status {}", status);
        Ok(())
    }
}
