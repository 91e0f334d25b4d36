//! API Handlers
//!
//! HTTP request handlers for the oracle endpoint and the health probe.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{OracleError, PipelineError, Result};
use crate::models::{HealthResponse, OracleRequest, OutboundPayload, SuccessResponse};
use crate::pipeline::{HttpPipelineClient, PipelineClient};

/// Application state shared across all handlers.
///
/// Holds the startup configuration and the downstream pipeline client.
/// Nothing in here is mutated while serving requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<dyn PipelineClient>,
}

impl AppState {
    /// Creates a new AppState with the given pipeline client.
    pub fn new(config: Config, pipeline: Arc<dyn PipelineClient>) -> Self {
        Self {
            config: Arc::new(config),
            pipeline,
        }
    }

    /// Creates a new AppState from configuration, using the HTTP pipeline client.
    pub fn from_config(config: Config) -> std::result::Result<Self, PipelineError> {
        let pipeline = HttpPipelineClient::from_config(&config)?;
        Ok(Self::new(config, Arc::new(pipeline)))
    }
}

/// Handler for /api/oracle (any method)
///
/// OPTIONS is answered with an empty 200. POST is checked in order:
/// configuration, required fields, email format; the submission is then
/// forwarded to the pipeline.
pub async fn oracle_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        debug!("Rejected {} request", method);
        return Err(OracleError::MethodNotAllowed);
    }

    let Some(credentials) = state.config.credentials() else {
        error!("Missing environment variables");
        return Err(OracleError::Configuration);
    };

    let request = OracleRequest::from_body(&body);
    request.validate()?;

    let payload = OutboundPayload::new(request);
    if let Err(e) = state.pipeline.submit(&credentials, &payload).await {
        error!("Failed to send oracle reading: {}", e);
        return Err(OracleError::Dispatch);
    }

    info!("Oracle reading sent at {}", payload.timestamp);
    Ok(Json(SuccessResponse::sent()).into_response())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
