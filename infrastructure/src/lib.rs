//! Infrastructure layer for gapscout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.
//!
//! | Module | Port / concern | Key Dependency |
//! |--------|----------------|----------------|
//! | [`extraction`] | `ContentExtractor` | `reqwest`, `scraper` |
//! | [`llm`] | `LlmClientFactory` / `LlmGateway` / `LlmSession` | `reqwest`, `serde_json` |
//! | [`config`] | TOML config discovery and merging | `figment`, `dirs` |

pub mod config;
pub mod extraction;
pub mod llm;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_API_KEY_ENV, FileAnalysisConfig, FileConfig,
    FileExtractionConfig, FileOutputConfig, FileProviderConfig,
};
pub use extraction::{
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ExtractorConfig, HttpContentExtractor, html_to_text,
};
pub use llm::{OpenAiClientFactory, OpenAiCompatibleGateway, OpenAiSession};
