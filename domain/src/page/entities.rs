//! Page text entity

use crate::core::string::{char_len, preview, truncate_chars};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of chars kept from a page (context-budget safeguard)
pub const MAX_PAGE_CHARS: usize = 15_000;

/// Below this many chars an extraction is considered low-confidence
pub const LOW_CONFIDENCE_CHARS: usize = 300;

/// Number of chars shown per source in the debug view
pub const DEBUG_PREVIEW_CHARS: usize = 500;

/// Plain text extracted from one URL
///
/// Created by the content extractor, consumed once by the prompt
/// assembler. `text` is already truncated; `raw_length` is the length of
/// the cleaned text before truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub source_url: String,
    pub raw_length: usize,
    pub text: String,
    pub extracted_at: DateTime<Utc>,
}

impl PageText {
    /// Build a page from cleaned text, truncating it to `max_chars`
    pub fn new(source_url: impl Into<String>, cleaned: &str, max_chars: usize) -> Self {
        Self {
            source_url: source_url.into(),
            raw_length: char_len(cleaned),
            text: truncate_chars(cleaned, max_chars).to_string(),
            extracted_at: Utc::now(),
        }
    }

    /// Build a page using the default [`MAX_PAGE_CHARS`] limit
    pub fn from_cleaned(source_url: impl Into<String>, cleaned: &str) -> Self {
        Self::new(source_url, cleaned, MAX_PAGE_CHARS)
    }

    /// Length of the (truncated) text in chars
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the text was cut to fit the limit
    pub fn was_truncated(&self) -> bool {
        self.raw_length > self.len()
    }

    /// Suspiciously short text: likely blocked, paywalled or script-rendered
    pub fn is_low_confidence(&self, threshold: usize) -> bool {
        self.len() < threshold
    }

    /// First [`DEBUG_PREVIEW_CHARS`] chars followed by `...`
    pub fn preview(&self) -> String {
        preview(&self.text, DEBUG_PREVIEW_CHARS)
    }
}
