//! LLM client configuration
//!
//! Provider presets and the immutable per-run client configuration.
//! Provider semantics are not validated here; the infrastructure adapter
//! reports anything it cannot connect with.

mod client_config;
mod provider;

pub use client_config::{ApiKey, DEFAULT_TEMPERATURE, LlmClientConfig};
pub use provider::Provider;
