//! LLM Gateway port
//!
//! Defines the interface for communicating with a chat-completion provider.

use async_trait::async_trait;
use gapscout_domain::LlmClientConfig;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Client initialization failed: {0}")]
    ClientInitialization(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no content")]
    EmptyResponse,
}

/// Builds a gateway from per-run connection settings
///
/// Construction is its own step so a malformed credential or base URL can
/// be reported once, before any generation call is attempted.
pub trait LlmClientFactory: Send + Sync {
    fn connect(&self, config: &LlmClientConfig) -> Result<Box<dyn LlmGateway>, GatewayError>;
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
