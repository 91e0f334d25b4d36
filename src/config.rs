//! Configuration Module
//!
//! Loads server configuration and pipeline credentials from environment variables.
//! The resulting `Config` is built once at startup and handed to the router state.

use std::env;
use std::fmt;
use std::time::Duration;

/// Default pipeline-execution endpoint.
pub const DEFAULT_PIPELINE_URL: &str = "https://api.gumloop.com/api/v1/start_pipeline";

/// Secrets required to start a pipeline run.
///
/// Only obtainable through [`Config::credentials`], which guarantees all three are set.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub user_id: String,
    pub saved_item_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("user_id", &"<redacted>")
            .field("saved_item_id", &"<redacted>")
            .finish()
    }
}

/// Server configuration parameters.
#[derive(Clone)]
pub struct Config {
    /// Pipeline API key (`GUMLOOP_API_KEY`)
    pub api_key: Option<String>,
    /// Pipeline user id (`GUMLOOP_USER_ID`)
    pub user_id: Option<String>,
    /// Saved pipeline id (`GUMLOOP_SAVED_ITEM_ID`)
    pub saved_item_id: Option<String>,
    /// Pipeline-execution endpoint
    pub pipeline_url: String,
    /// Timeout of the outbound pipeline call
    pub pipeline_timeout: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `GUMLOOP_API_KEY`, `GUMLOOP_USER_ID`, `GUMLOOP_SAVED_ITEM_ID` - pipeline secrets (no default)
    /// - `PIPELINE_URL` - pipeline endpoint (default: [`DEFAULT_PIPELINE_URL`])
    /// - `PIPELINE_TIMEOUT_SECS` - outbound call timeout in seconds (default: 30)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            api_key: secret("GUMLOOP_API_KEY"),
            user_id: secret("GUMLOOP_USER_ID"),
            saved_item_id: secret("GUMLOOP_SAVED_ITEM_ID"),
            pipeline_url: env::var("PIPELINE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PIPELINE_URL.to_string()),
            pipeline_timeout: Duration::from_secs(
                env::var("PIPELINE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Sets all three pipeline secrets.
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        user_id: impl Into<String>,
        saved_item_id: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.user_id = Some(user_id.into());
        self.saved_item_id = Some(saved_item_id.into());
        self
    }

    /// Returns the pipeline credentials, or `None` if any secret is missing.
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            api_key: non_empty(self.api_key.as_deref())?,
            user_id: non_empty(self.user_id.as_deref())?,
            saved_item_id: non_empty(self.saved_item_id.as_deref())?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            user_id: None,
            saved_item_id: None,
            pipeline_url: DEFAULT_PIPELINE_URL.to_string(),
            pipeline_timeout: Duration::from_secs(30),
            server_port: 3000,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials_configured", &self.credentials().is_some())
            .field("pipeline_url", &self.pipeline_url)
            .field("pipeline_timeout", &self.pipeline_timeout)
            .field("server_port", &self.server_port)
            .finish()
    }
}

fn secret(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
