//! Output formatter trait

use gapscout_application::{RunAnalysisError, RunAnalysisOutput};

/// Trait for formatting analysis results
pub trait OutputFormatter {
    /// Format the complete result: sources, report, outline and errors
    fn format(&self, output: &RunAnalysisOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RunAnalysisOutput) -> String;

    /// Format the generated markdown only
    fn format_report_only(&self, output: &RunAnalysisOutput) -> String;

    /// Debug previews and errors that accompany the markdown-only view
    fn format_report_diagnostics(&self, output: &RunAnalysisOutput) -> String;

    /// Format a run that stopped before generation
    fn format_failure(&self, error: &RunAnalysisError) -> String;

    /// Format a run that stopped before generation, as JSON
    fn format_failure_json(&self, error: &RunAnalysisError) -> String;
}
