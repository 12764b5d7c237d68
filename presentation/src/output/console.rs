//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use gapscout_application::{RunAnalysisError, RunAnalysisOutput};
use gapscout_domain::{
    ExtractionReport, GenerationTask, LOW_CONFIDENCE_CHARS, SlotOutcome, SlotStatus, TaskType,
};
use serde::Serialize;

/// Formats analysis results for console display
pub struct ConsoleFormatter {
    low_confidence_chars: usize,
    show_debug: bool,
}

/// Machine-readable view of a run
#[derive(Serialize)]
struct JsonView<'a> {
    keyword: &'a str,
    task: TaskType,
    sources: &'a ExtractionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outline: Option<&'a str>,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<&'a ExtractionReport>,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self {
            low_confidence_chars: LOW_CONFIDENCE_CHARS,
            show_debug: false,
        }
    }

    pub fn with_low_confidence_chars(mut self, chars: usize) -> Self {
        self.low_confidence_chars = chars;
        self
    }

    /// Include the scraped-text preview of every source
    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    /// Format the complete analysis result
    pub fn format(&self, output: &RunAnalysisOutput) -> String {
        let mut out = String::new();

        out.push_str(&Self::header(output.request.task_type().display_name()));
        out.push('\n');

        out.push_str(&format!(
            "{} {}\n",
            "Keyword:".cyan().bold(),
            output.request.keyword()
        ));

        out.push_str(&Self::section_header("Sources"));
        out.push_str(&self.format_sources(&output.extraction));

        if self.show_debug {
            out.push_str(&Self::section_header("Scraped Content (Debug Info)"));
            out.push_str(&Self::format_debug(&output.extraction));
        }

        if let Some(report) = &output.result.report_markdown {
            out.push_str(&Self::section_header(GenerationTask::GapReport.display_name()));
            out.push_str(&format!("\n{}\n", report));
        }

        if let Some(outline) = &output.result.outline_markdown {
            out.push_str(&Self::section_header(GenerationTask::Outline.display_name()));
            out.push_str(&format!("\n{}\n", outline));
        }

        if !output.errors.is_empty() {
            out.push_str(&Self::section_header("Errors"));
            for error in &output.errors {
                out.push_str(&format!("  {} {}\n", "x".red(), error));
            }
        }

        out.push_str(&Self::footer());
        out
    }

    /// Format as JSON
    pub fn format_json(output: &RunAnalysisOutput) -> String {
        let view = JsonView {
            keyword: output.request.keyword().as_str(),
            task: output.request.task_type(),
            sources: &output.extraction,
            report: output.result.report_markdown.as_deref(),
            outline: output.result.outline_markdown.as_deref(),
            errors: output.errors.iter().map(ToString::to_string).collect(),
        };
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the generated markdown, uncolored
    pub fn format_report_only(output: &RunAnalysisOutput) -> String {
        let parts: Vec<&str> = [
            output.result.report_markdown.as_deref(),
            output.result.outline_markdown.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut out = parts.join("\n\n---\n\n");
        out.push('\n');
        out
    }

    /// What the markdown-only view leaves out, meant for stderr:
    /// the debug previews (when enabled) and the generation errors
    pub fn format_report_diagnostics(&self, output: &RunAnalysisOutput) -> String {
        let mut out = String::new();

        if self.show_debug {
            out.push_str(&Self::section_header("Scraped Content (Debug Info)"));
            out.push_str(&Self::format_debug(&output.extraction));
            out.push('\n');
        }

        for error in &output.errors {
            out.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        }
        out
    }

    /// Format a run that stopped before any model call
    pub fn format_failure(&self, error: &RunAnalysisError) -> String {
        let mut out = String::new();

        if let Some(extraction) = error.extraction() {
            out.push_str(&Self::section_header("Sources"));
            out.push_str(&self.format_sources(extraction));

            if self.show_debug {
                out.push_str(&Self::section_header("Scraped Content (Debug Info)"));
                out.push_str(&Self::format_debug(extraction));
            }
            out.push('\n');
        }

        out.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        out
    }

    pub fn format_failure_json(error: &RunAnalysisError) -> String {
        let view = JsonFailure {
            error: error.to_string(),
            sources: error.extraction(),
        };
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per fetched slot, in slot order
    fn format_sources(&self, extraction: &ExtractionReport) -> String {
        let mut out = String::new();
        for outcome in extraction.outcomes() {
            out.push_str(&self.format_source_line(outcome));
            out.push('\n');
        }
        if out.is_empty() {
            out.push_str("  (no URLs)\n");
        }
        out
    }

    fn format_source_line(&self, outcome: &SlotOutcome) -> String {
        match &outcome.status {
            SlotStatus::Extracted { page } => {
                let mut line = format!(
                    "  {} {}: {} ({} chars{})",
                    "v".green(),
                    outcome.slot.to_string().bold(),
                    outcome.url,
                    page.len(),
                    if page.was_truncated() { ", truncated" } else { "" }
                );
                if page.is_low_confidence(self.low_confidence_chars) {
                    line.push_str(&format!(
                        "\n    {}",
                        format!(
                            "{} content is very short ({} chars). It might be blocked or require login.",
                            outcome.slot,
                            page.len()
                        )
                        .yellow()
                    ));
                }
                line
            }
            SlotStatus::Failed { reason } => format!(
                "  {} {}: {} ({})",
                "x".red(),
                outcome.slot.to_string().bold(),
                outcome.url,
                format!("could not scrape, skipped: {}", reason).red()
            ),
        }
    }

    /// Length and the first chars of each source's text
    pub fn format_debug(extraction: &ExtractionReport) -> String {
        let mut out = String::new();
        for outcome in extraction.outcomes() {
            match &outcome.status {
                SlotStatus::Extracted { page } => {
                    out.push_str(&format!(
                        "\n{} ({} chars)\n{}\n",
                        outcome.slot.to_string().yellow().bold(),
                        page.len(),
                        Self::indent(&page.preview(), "  ")
                    ));
                }
                SlotStatus::Failed { reason } => {
                    out.push_str(&format!(
                        "\n{}\n",
                        format!("{} returned no text: {}", outcome.slot, reason).red()
                    ));
                }
            }
        }
        out
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RunAnalysisOutput) -> String {
        ConsoleFormatter::format(self, output)
    }

    fn format_json(&self, output: &RunAnalysisOutput) -> String {
        Self::format_json(output)
    }

    fn format_report_only(&self, output: &RunAnalysisOutput) -> String {
        Self::format_report_only(output)
    }

    fn format_report_diagnostics(&self, output: &RunAnalysisOutput) -> String {
        ConsoleFormatter::format_report_diagnostics(self, output)
    }

    fn format_failure(&self, error: &RunAnalysisError) -> String {
        ConsoleFormatter::format_failure(self, error)
    }

    fn format_failure_json(&self, error: &RunAnalysisError) -> String {
        Self::format_failure_json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscout_application::{GatewayError, GenerationError, InputValidationError};
    use gapscout_domain::{AnalysisResult, DomainError, Keyword, PageText, Slot};

    fn plain() {
        colored::control::set_override(false);
    }

    fn page(url: &str, text: &str) -> PageText {
        PageText::from_cleaned(url, text)
    }

    fn sample_output() -> RunAnalysisOutput {
        let extraction = ExtractionReport {
            target: Some(SlotOutcome::extracted(
                Slot::Target,
                page("https://me.com", &"m".repeat(400)),
            )),
            competitors: vec![
                SlotOutcome::extracted(Slot::Competitor(1), page("https://a.com", "short text")),
                SlotOutcome::failed(Slot::Competitor(2), "https://b.com", "HTTP 403"),
            ],
        };
        let request = extraction
            .to_request(Keyword::parse("running shoes").unwrap(), TaskType::GapAnalysis)
            .unwrap();
        RunAnalysisOutput {
            request,
            extraction,
            result: AnalysisResult {
                report_markdown: Some("## Missing topics".to_string()),
                outline_markdown: None,
            },
            errors: vec![GenerationError::Outline(GatewayError::EmptyResponse)],
        }
    }

    #[test]
    fn test_full_view_sections() {
        plain();
        let text = ConsoleFormatter::new().format(&sample_output());

        assert!(text.contains("Content Gap Analysis"));
        assert!(text.contains("Keyword: running shoes"));
        assert!(text.contains("My Content: https://me.com (400 chars)"));
        assert!(text.contains("Competitor 1 content is very short (10 chars)"));
        assert!(text.contains("Competitor 2: https://b.com (could not scrape, skipped: HTTP 403)"));
        assert!(text.contains("Content Gap Report"));
        assert!(text.contains("## Missing topics"));
        assert!(!text.contains("Optimized Content Outline"));
        assert!(text.contains("Error generating outline: Model returned no content"));
        assert!(!text.contains("Debug Info"));
    }

    #[test]
    fn test_debug_view_previews_text() {
        plain();
        let text = ConsoleFormatter::new().with_debug(true).format(&sample_output());
        assert!(text.contains("Scraped Content (Debug Info)"));
        assert!(text.contains(&format!("  {}...", "m".repeat(400))));
        assert!(text.contains("Competitor 2 returned no text: HTTP 403"));
    }

    #[test]
    fn test_low_confidence_threshold_is_configurable() {
        plain();
        let text = ConsoleFormatter::new()
            .with_low_confidence_chars(5)
            .format(&sample_output());
        assert!(!text.contains("very short"));
    }

    #[test]
    fn test_report_only_joins_markdown() {
        let mut output = sample_output();
        output.result.outline_markdown = Some("# H1".to_string());
        assert_eq!(
            ConsoleFormatter::format_report_only(&output),
            "## Missing topics\n\n---\n\n# H1\n"
        );
    }

    #[test]
    fn test_report_diagnostics_follow_debug_flag() {
        plain();
        let output = sample_output();

        let text = ConsoleFormatter::new().format_report_diagnostics(&output);
        assert!(!text.contains("Debug Info"));
        assert_eq!(
            text,
            "Error: Error generating outline: Model returned no content\n"
        );

        let text = ConsoleFormatter::new()
            .with_debug(true)
            .format_report_diagnostics(&output);
        assert!(text.contains("Scraped Content (Debug Info)"));
        assert!(text.contains(&format!("  {}...", "m".repeat(400))));
        assert!(text.contains("Competitor 2 returned no text: HTTP 403"));
        assert!(text.ends_with("Error: Error generating outline: Model returned no content\n"));
        assert!(!text.contains("## Missing topics"));
    }

    #[test]
    fn test_json_view() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&sample_output())).unwrap();
        assert_eq!(json["keyword"], "running shoes");
        assert_eq!(json["task"], "gap_analysis");
        assert_eq!(json["report"], "## Missing topics");
        assert!(json.get("outline").is_none());
        assert_eq!(json["sources"]["competitors"][1]["status"], "failed");
        assert_eq!(
            json["errors"][0],
            "Error generating outline: Model returned no content"
        );
    }

    #[test]
    fn test_failure_views() {
        plain();
        let extraction = ExtractionReport {
            target: None,
            competitors: vec![SlotOutcome::failed(
                Slot::Competitor(1),
                "https://a.com",
                "Timed out fetching https://a.com",
            )],
        };
        let error = RunAnalysisError::InsufficientData {
            reason: DomainError::NoCompetitorText,
            extraction,
        };

        let text = ConsoleFormatter::new().format_failure(&error);
        assert!(text.contains("Competitor 1: https://a.com"));
        assert!(text.contains("Could not scrape enough content"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_failure_json(&error)).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Could not scrape"));
        assert_eq!(json["sources"]["competitors"][0]["url"], "https://a.com");

        let error = RunAnalysisError::Validation(InputValidationError::MissingKeyword);
        let text = ConsoleFormatter::new().format_failure(&error);
        assert_eq!(text, "Error: Please enter a keyword\n");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
