//! Outbound payload sent to the pipeline API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::requests::OracleRequest;

/// Value of the `source` field on every outbound payload.
pub const PAYLOAD_SOURCE: &str = "lunae-oracle";

/// Submission fields plus `source` and `timestamp` metadata.
///
/// Optional fields that were not submitted are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    pub source: String,
    /// ISO 8601, UTC, millisecond precision
    pub timestamp: String,
}

impl OutboundPayload {
    /// Builds the payload stamped with the current time.
    pub fn new(request: OracleRequest) -> Self {
        Self::at(request, Utc::now())
    }

    /// Builds the payload stamped with `at`.
    pub fn at(request: OracleRequest, at: DateTime<Utc>) -> Self {
        Self {
            name: request.name,
            email: request.email,
            birthdate: request.birthdate,
            birthtime: request.birthtime,
            birthplace: request.birthplace,
            focus: request.focus,
            source: PAYLOAD_SOURCE.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
