//! Content extractor port
//!
//! Defines how the application layer turns a URL into page text.

use async_trait::async_trait;
use gapscout_domain::PageText;
use thiserror::Error;

/// Errors that can occur while extracting one URL
///
/// Expected per-URL failures: the orchestrator records them per slot and
/// carries on with the other slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("HTTP error fetching {url}: {status} {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },
}

/// Fetches a page and reduces it to bounded plain text
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Extract the text behind `url`.
    ///
    /// Returns `Ok(None)` for an empty URL; that is not a failure.
    async fn extract(&self, url: &str) -> Result<Option<PageText>, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_contains_url() {
        let err = ExtractionError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 403,
            reason: "Forbidden".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error fetching https://example.com: 403 Forbidden"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = ExtractionError::Timeout {
            url: "https://slow.example".to_string(),
        };
        assert_eq!(err.to_string(), "Timed out fetching https://slow.example");
    }
}
