//! Pipeline phases and generation tasks

use serde::{Deserialize, Serialize};

/// Phases of an analysis run that perform I/O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fetch and clean every provided URL
    Extract,
    /// Call the language model
    Generate,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Extract => "extract",
            Phase::Generate => "generate",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One language-model call within the generate phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationTask {
    GapReport,
    Outline,
}

impl GenerationTask {
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationTask::GapReport => "Content Gap Report",
            GenerationTask::Outline => "Optimized Content Outline",
        }
    }
}

impl std::fmt::Display for GenerationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
