//! Analysis parameters — use case tuning.
//!
//! [`AnalysisParams`] groups the static parameters that control
//! [`RunAnalysisUseCase`](crate::use_cases::run_analysis::RunAnalysisUseCase).
//! These are application-layer concerns, not domain policy.

use gapscout_domain::LOW_CONFIDENCE_CHARS;
use serde::{Deserialize, Serialize};

/// Default size above which an assembled prompt triggers a warning
pub const DEFAULT_PROMPT_WARN_CHARS: usize = 60_000;

/// Use case tuning parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Extractions shorter than this are flagged as low-confidence.
    pub low_confidence_chars: usize,
    /// Warn (but still send) when a prompt exceeds this many chars.
    /// `None` disables the check.
    pub prompt_warn_chars: Option<usize>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            low_confidence_chars: LOW_CONFIDENCE_CHARS,
            prompt_warn_chars: Some(DEFAULT_PROMPT_WARN_CHARS),
        }
    }
}

impl AnalysisParams {
    // ==================== Builder Methods ====================

    pub fn with_low_confidence_chars(mut self, chars: usize) -> Self {
        self.low_confidence_chars = chars;
        self
    }

    pub fn with_prompt_warn_chars(mut self, chars: Option<usize>) -> Self {
        self.prompt_warn_chars = chars;
        self
    }
}
