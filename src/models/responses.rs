//! Response DTOs for the oracle API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Message returned once the pipeline accepted the submission.
pub const SUCCESS_MESSAGE: &str = "Oracle reading sent successfully";

/// Response body for a successful POST /api/oracle
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Always `true`
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    /// Creates the reading-sent response
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_serialize() {
        let json = serde_json::to_string(&SuccessResponse::sent()).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"message":"Oracle reading sent successfully"}"#
        );
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Method not allowed")).unwrap();
        assert_eq!(json, r#"{"error":"Method not allowed"}"#);
    }
}
