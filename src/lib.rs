//! Lunae Oracle - oracle reading intake service
//!
//! Validates oracle reading form submissions and forwards them to a
//! pipeline-execution API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;

pub use api::{create_router, AppState};
pub use config::Config;
pub use pipeline::{HttpPipelineClient, PipelineClient};
