//! Request and Response models for the oracle API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! the inbound form submission, the outbound pipeline payload and
//! the HTTP response bodies.

pub mod payload;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use payload::{OutboundPayload, PAYLOAD_SOURCE};
pub use requests::{is_valid_email, OracleRequest};
pub use responses::{ErrorResponse, HealthResponse, SuccessResponse, SUCCESS_MESSAGE};
