//! Error types for the oracle service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Oracle Error Enum ==
/// Errors surfaced to the caller of the oracle endpoint.
///
/// The display strings are the exact messages returned in the `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Method other than POST or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// One or more pipeline secrets are not configured
    #[error("Server configuration error")]
    Configuration,

    /// `name`, `email` or `birthdate` is absent or empty
    #[error("Missing required fields")]
    MissingFields,

    /// Email is not `local@domain.tld` shaped
    #[error("Invalid email format")]
    InvalidEmail,

    /// The downstream pipeline call failed
    #[error("Failed to send oracle reading")]
    Dispatch,
}

impl OracleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OracleError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            OracleError::Configuration | OracleError::Dispatch => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            OracleError::MissingFields | OracleError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for OracleError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Pipeline Error Enum ==
/// Failures of the outbound pipeline call. Never shown to the caller.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Connection, timeout or body read failure
    #[error("Pipeline request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Pipeline answered with a non-2xx status
    #[error("Pipeline API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body is not valid JSON
    #[error("Invalid pipeline response: {0}")]
    InvalidResponse(String),
}

// == Result Type Alias ==
/// Convenience Result type for the oracle service.
pub type Result<T> = std::result::Result<T, OracleError>;
