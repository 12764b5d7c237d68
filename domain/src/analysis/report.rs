//! Per-slot extraction outcomes

use super::request::AnalysisRequest;
use super::task_type::TaskType;
use crate::core::error::DomainError;
use crate::core::keyword::Keyword;
use crate::page::PageText;
use serde::{Deserialize, Serialize};

/// One URL input position: the target page or a numbered competitor slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum Slot {
    Target,
    /// 1-based competitor slot number as entered by the user
    Competitor(usize),
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Target => f.write_str("My Content"),
            Slot::Competitor(n) => write!(f, "Competitor {n}"),
        }
    }
}

/// Result of extracting one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SlotStatus {
    Extracted { page: PageText },
    Failed { reason: String },
}

/// Outcome of one slot, kept for display after the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOutcome {
    pub slot: Slot,
    pub url: String,
    #[serde(flatten)]
    pub status: SlotStatus,
}

impl SlotOutcome {
    pub fn extracted(slot: Slot, page: PageText) -> Self {
        Self {
            slot,
            url: page.source_url.clone(),
            status: SlotStatus::Extracted { page },
        }
    }

    pub fn failed(slot: Slot, url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            slot,
            url: url.into(),
            status: SlotStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn page(&self) -> Option<&PageText> {
        match &self.status {
            SlotStatus::Extracted { page } => Some(page),
            SlotStatus::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            SlotStatus::Extracted { .. } => None,
            SlotStatus::Failed { reason } => Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        self.page().is_some()
    }
}

/// Everything the extract phase produced, in slot order
///
/// Slots the user left empty are absent: they were neither fetched nor
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub target: Option<SlotOutcome>,
    pub competitors: Vec<SlotOutcome>,
}

impl ExtractionReport {
    pub fn target_page(&self) -> Option<&PageText> {
        self.target.as_ref().and_then(SlotOutcome::page)
    }

    /// Successfully extracted competitor pages, in original slot order
    pub fn competitor_pages(&self) -> Vec<&PageText> {
        self.competitors.iter().filter_map(SlotOutcome::page).collect()
    }

    /// All outcomes, target first
    pub fn outcomes(&self) -> impl Iterator<Item = &SlotOutcome> {
        self.target.iter().chain(self.competitors.iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = &SlotOutcome> {
        self.outcomes().filter(|o| !o.is_success())
    }

    /// Gate: turn the extraction into a request if the task's minimum inputs are met
    pub fn to_request(
        &self,
        keyword: Keyword,
        task_type: TaskType,
    ) -> Result<AnalysisRequest, DomainError> {
        let own_page = if task_type.requires_target() {
            self.target_page().cloned()
        } else {
            None
        };
        let competitors = self.competitor_pages().into_iter().cloned().collect();
        AnalysisRequest::new(keyword, own_page, competitors, task_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, len: usize) -> PageText {
        PageText::from_cleaned(url, &"t".repeat(len))
    }

    fn keyword() -> Keyword {
        Keyword::parse("best running shoes 2024").unwrap()
    }

    #[test]
    fn test_competitor_pages_keep_slot_order() {
        let report = ExtractionReport {
            target: None,
            competitors: vec![
                SlotOutcome::extracted(Slot::Competitor(1), page("https://a", 10)),
                SlotOutcome::failed(Slot::Competitor(2), "https://b", "timeout"),
                SlotOutcome::extracted(Slot::Competitor(3), page("https://c", 10)),
            ],
        };
        let urls: Vec<_> = report
            .competitor_pages()
            .iter()
            .map(|p| p.source_url.as_str())
            .collect();
        assert_eq!(urls, vec!["https://a", "https://c"]);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_gate_gap_requires_target() {
        let report = ExtractionReport {
            target: Some(SlotOutcome::failed(Slot::Target, "https://me", "404")),
            competitors: vec![SlotOutcome::extracted(
                Slot::Competitor(1),
                page("https://a", 10),
            )],
        };
        assert_eq!(
            report.to_request(keyword(), TaskType::GapAnalysis).unwrap_err(),
            DomainError::MissingTargetText
        );
        assert!(report
            .to_request(keyword(), TaskType::OutlineGeneration)
            .is_ok());
    }

    #[test]
    fn test_gate_requires_competitor() {
        let report = ExtractionReport {
            target: Some(SlotOutcome::extracted(Slot::Target, page("https://me", 10))),
            competitors: vec![SlotOutcome::failed(Slot::Competitor(1), "https://a", "dns")],
        };
        assert_eq!(
            report.to_request(keyword(), TaskType::GapAnalysis).unwrap_err(),
            DomainError::NoCompetitorText
        );
        assert_eq!(
            report
                .to_request(keyword(), TaskType::OutlineGeneration)
                .unwrap_err(),
            DomainError::NoCompetitorText
        );
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Target.to_string(), "My Content");
        assert_eq!(Slot::Competitor(2).to_string(), "Competitor 2");
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let outcome = SlotOutcome::failed(Slot::Competitor(2), "https://b", "timeout");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "timeout");
        assert_eq!(json["slot"]["kind"], "competitor");
        assert_eq!(json["slot"]["index"], 2);
    }
}
