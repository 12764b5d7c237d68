//! Domain layer for gapscout
//!
//! This crate contains the core entities, value objects and prompt
//! templates. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Extraction slot**: one of up to four URL inputs (target + 3 competitors)
//! - **Gap analysis**: target page compared against competitor content
//! - **Outline generation**: page structure synthesized from competitors only
//! - **Low-confidence extraction**: fetched but suspiciously short text

pub mod analysis;
pub mod config;
pub mod core;
pub mod llm;
pub mod page;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    AnalysisRequest, AnalysisResult, ExtractionReport, GenerationTask, MAX_COMPETITORS, Phase,
    Slot, SlotOutcome, SlotStatus, TaskType,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, keyword::Keyword};
pub use llm::{ApiKey, DEFAULT_TEMPERATURE, LlmClientConfig, Provider};
pub use page::{DEBUG_PREVIEW_CHARS, LOW_CONFIDENCE_CHARS, MAX_PAGE_CHARS, PageText};
pub use prompt::PromptTemplate;
