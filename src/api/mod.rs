//! API Module
//!
//! HTTP handlers, CORS and routing for the oracle service.
//!
//! # Endpoints
//! - `POST /api/oracle` - Submit an oracle reading request
//! - `OPTIONS /api/oracle` - CORS preflight
//! - `GET /health` - Health check endpoint

pub mod cors;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
