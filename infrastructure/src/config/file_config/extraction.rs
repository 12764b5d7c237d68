//! Extraction configuration from TOML (`[extraction]` section)

use crate::extraction::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ExtractorConfig};
use gapscout_domain::MAX_PAGE_CHARS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExtractionConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Chars kept per page
    pub max_chars: usize,
}

impl Default for FileExtractionConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            max_chars: MAX_PAGE_CHARS,
        }
    }
}

impl FileExtractionConfig {
    pub fn to_extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            max_chars: self.max_chars,
        }
    }
}
