//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod content_extractor;
pub mod llm_gateway;
pub mod progress;
