//! Pipeline Module
//!
//! Outbound integration with the pipeline-execution API that produces the
//! oracle reading.

mod client;

pub use client::{HttpPipelineClient, PipelineClient};
