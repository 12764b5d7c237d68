//! Application-level configuration.
//!
//! - [`AnalysisParams`] — thresholds used by the analysis use case

pub mod analysis_params;

pub use analysis_params::{AnalysisParams, DEFAULT_PROMPT_WARN_CHARS};
