//! Task type value object

use serde::{Deserialize, Serialize};

/// What the run asks the model to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Compare the target page against competitors and report gaps
    #[default]
    GapAnalysis,
    /// Synthesize a page outline from competitors only
    OutlineGeneration,
}

impl TaskType {
    /// Whether this task needs the target page
    pub fn requires_target(&self) -> bool {
        matches!(self, TaskType::GapAnalysis)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::GapAnalysis => "gap",
            TaskType::OutlineGeneration => "outline",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskType::GapAnalysis => "Content Gap Analysis",
            TaskType::OutlineGeneration => "New Blog Outline Generator",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
