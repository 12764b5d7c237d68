//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod extraction;
mod output;
mod provider;

pub use analysis::FileAnalysisConfig;
pub use extraction::FileExtractionConfig;
pub use output::FileOutputConfig;
pub use provider::{DEFAULT_API_KEY_ENV, FileProviderConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("extraction.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("extraction.max_chars cannot be 0")]
    InvalidMaxChars,

    #[error("extraction.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("provider.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM endpoint and credential
    pub provider: FileProviderConfig,
    /// Page fetching
    pub extraction: FileExtractionConfig,
    pub analysis: FileAnalysisConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.extraction.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.extraction.max_chars == 0 {
            return Err(ConfigValidationError::InvalidMaxChars);
        }
        if self.extraction.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUserAgent);
        }
        if self.provider.model().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url().trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        let temperature = self.provider.temperature();
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigValidationError::InvalidTemperature(temperature));
        }
        Ok(())
    }
}
