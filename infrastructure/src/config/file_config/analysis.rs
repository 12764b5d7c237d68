//! Analysis configuration from TOML (`[analysis]` section)

use gapscout_application::{AnalysisParams, DEFAULT_PROMPT_WARN_CHARS};
use gapscout_domain::LOW_CONFIDENCE_CHARS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Extractions shorter than this are flagged
    pub low_confidence_chars: usize,
    /// Prompt size that triggers a warning (0 disables the check)
    pub prompt_warn_chars: usize,
    /// Also generate an outline after a gap analysis
    pub also_outline: bool,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            low_confidence_chars: LOW_CONFIDENCE_CHARS,
            prompt_warn_chars: DEFAULT_PROMPT_WARN_CHARS,
            also_outline: true,
        }
    }
}

impl FileAnalysisConfig {
    pub fn to_params(&self) -> AnalysisParams {
        let warn = (self.prompt_warn_chars > 0).then_some(self.prompt_warn_chars);
        AnalysisParams::default()
            .with_low_confidence_chars(self.low_confidence_chars)
            .with_prompt_warn_chars(warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params_default() {
        assert_eq!(
            FileAnalysisConfig::default().to_params(),
            AnalysisParams::default()
        );
    }

    #[test]
    fn test_zero_disables_prompt_warning() {
        let config = FileAnalysisConfig {
            prompt_warn_chars: 0,
            ..Default::default()
        };
        assert_eq!(config.to_params().prompt_warn_chars, None);
    }
}
