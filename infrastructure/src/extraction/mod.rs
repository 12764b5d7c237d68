//! **Content extraction** — fetch a page and reduce it to plain text
//!
//! | Piece | Description | Key Dependency |
//! |-------|-------------|----------------|
//! | [`HttpContentExtractor`] | One GET per URL, fixed browser user agent, 10 s timeout | `reqwest` |
//! | [`html_to_text`] | Strip non-content elements, join visible text | `scraper` |
//! | `charset` | Decode the body per `Content-Type` / `<meta charset>` | `encoding_rs` |

mod charset;
mod html;
mod http;

pub use html::{STRIPPED_TAGS, html_to_text};
pub use http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ExtractorConfig, HttpContentExtractor};
