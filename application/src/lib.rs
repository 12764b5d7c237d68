//! Application layer for gapscout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisParams, DEFAULT_PROMPT_WARN_CHARS};
pub use ports::{
    content_extractor::{ContentExtractor, ExtractionError},
    llm_gateway::{GatewayError, LlmClientFactory, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_analysis::{
    GenerationError, InputValidationError, RunAnalysisError, RunAnalysisInput, RunAnalysisOutput,
    RunAnalysisUseCase,
};
