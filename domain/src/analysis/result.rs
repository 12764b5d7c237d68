//! Analysis result value object

use serde::{Deserialize, Serialize};

/// Markdown produced by the model for one run
///
/// Either field may be missing: the task did not ask for it, or the
/// generation call failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_markdown: Option<String>,
}

impl AnalysisResult {
    /// Nothing was produced
    pub fn is_empty(&self) -> bool {
        self.report_markdown.is_none() && self.outline_markdown.is_none()
    }
}
