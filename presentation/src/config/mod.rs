//! Presentation-level configuration
//!
//! Configuration for output formatting and progress display.

use gapscout_domain::{LOW_CONFIDENCE_CHARS, OutputFormat};
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Include the scraped-text preview of each source
    pub show_debug: bool,
    /// Show progress indicators
    pub show_progress: bool,
    /// Threshold used to flag short extractions in the source summary
    pub low_confidence_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_debug: false,
            show_progress: true,
            low_confidence_chars: LOW_CONFIDENCE_CHARS,
        }
    }
}
