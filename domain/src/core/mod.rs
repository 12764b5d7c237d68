//! Core domain concepts shared across all subdomains.
//!
//! - [`keyword::Keyword`] — a validated target keyword
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — char-based text helpers

pub mod error;
pub mod keyword;
pub mod string;
