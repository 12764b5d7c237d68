//! Page domain
//!
//! The cleaned, bounded text of one fetched web page.

mod entities;

pub use entities::{
    DEBUG_PREVIEW_CHARS, LOW_CONFIDENCE_CHARS, MAX_PAGE_CHARS, PageText,
};
