//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Slot summary, report, outline and errors
    #[default]
    Full,
    /// Only the generated markdown
    Report,
    /// JSON output
    Json,
}
