//! HTTP content extractor: fetch a URL and reduce it to page text

use super::charset::decode_html;
use super::html::html_to_text;
use async_trait::async_trait;
use gapscout_application::ports::content_extractor::{ContentExtractor, ExtractionError};
use gapscout_domain::{MAX_PAGE_CHARS, PageText};
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};

/// Browser user agent sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`HttpContentExtractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_chars: MAX_PAGE_CHARS,
        }
    }
}

/// [`ContentExtractor`] backed by a single GET per URL
///
/// No retries, no cookies, no JavaScript; redirects follow reqwest defaults.
pub struct HttpContentExtractor {
    client: reqwest::Client,
    config: ExtractorConfig,
}

impl HttpContentExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn map_request_error(url: &str, e: reqwest::Error) -> ExtractionError {
        if e.is_timeout() {
            ExtractionError::Timeout {
                url: url.to_string(),
            }
        } else {
            ExtractionError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl ContentExtractor for HttpContentExtractor {
    async fn extract(&self, url: &str) -> Result<Option<PageText>, ExtractionError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(None);
        }

        let parsed = Url::parse(url).map_err(|e| ExtractionError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Self::map_request_error(url, e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !status.is_success() {
            info!("{} answered {}", url, status);
            return Err(ExtractionError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ExtractionError::Timeout {
                    url: url.to_string(),
                }
            } else {
                ExtractionError::Body {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let html = decode_html(&body, content_type.as_deref());
        let text = html_to_text(&html);
        let page = PageText::new(url, &text, self.config.max_chars);

        debug!(
            "Extracted {} chars from {} ({} bytes{})",
            page.len(),
            url,
            body.len(),
            if page.was_truncated() { ", truncated" } else { "" }
        );

        Ok(Some(page))
    }
}
