//! Analysis request entity

use super::task_type::TaskType;
use crate::core::error::DomainError;
use crate::core::keyword::Keyword;
use crate::page::PageText;
use serde::{Deserialize, Serialize};

/// Maximum number of competitor slots
pub const MAX_COMPETITORS: usize = 3;

/// Validated input to the prompt assembler for one run
///
/// Invariants (checked by [`AnalysisRequest::new`]):
/// - GapAnalysis: `own_page` present and at least one competitor
/// - OutlineGeneration: at least one competitor
/// - never more than [`MAX_COMPETITORS`] competitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    keyword: Keyword,
    own_page: Option<PageText>,
    competitors: Vec<PageText>,
    task_type: TaskType,
}

impl AnalysisRequest {
    pub fn new(
        keyword: Keyword,
        own_page: Option<PageText>,
        competitors: Vec<PageText>,
        task_type: TaskType,
    ) -> Result<Self, DomainError> {
        if competitors.len() > MAX_COMPETITORS {
            return Err(DomainError::TooManyCompetitors {
                max: MAX_COMPETITORS,
                actual: competitors.len(),
            });
        }
        if task_type.requires_target() && own_page.is_none() {
            return Err(DomainError::MissingTargetText);
        }
        if competitors.is_empty() {
            return Err(DomainError::NoCompetitorText);
        }
        Ok(Self {
            keyword,
            own_page,
            competitors,
            task_type,
        })
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn own_page(&self) -> Option<&PageText> {
        self.own_page.as_ref()
    }

    pub fn competitors(&self) -> &[PageText] {
        &self.competitors
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Competitor texts in slot order, ready for the prompt templates
    pub fn competitor_texts(&self) -> Vec<&str> {
        self.competitors.iter().map(|p| p.text.as_str()).collect()
    }

    /// Target text, empty when the task does not use it
    pub fn own_text(&self) -> &str {
        self.own_page.as_ref().map(|p| p.text.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> PageText {
        PageText::from_cleaned(url, "some page text")
    }

    fn keyword() -> Keyword {
        Keyword::parse("trail shoes").unwrap()
    }

    #[test]
    fn test_gap_request_valid() {
        let req = AnalysisRequest::new(
            keyword(),
            Some(page("https://me")),
            vec![page("https://a")],
            TaskType::GapAnalysis,
        )
        .unwrap();
        assert_eq!(req.own_text(), "some page text");
        assert_eq!(req.competitor_texts(), vec!["some page text"]);
    }

    #[test]
    fn test_outline_request_without_target() {
        let req = AnalysisRequest::new(
            keyword(),
            None,
            vec![page("https://a")],
            TaskType::OutlineGeneration,
        )
        .unwrap();
        assert_eq!(req.own_text(), "");
        assert_eq!(req.task_type(), TaskType::OutlineGeneration);
    }

    #[test]
    fn test_too_many_competitors() {
        let err = AnalysisRequest::new(
            keyword(),
            None,
            vec![page("1"), page("2"), page("3"), page("4")],
            TaskType::OutlineGeneration,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::TooManyCompetitors { actual: 4, .. }));
    }

    #[test]
    fn test_gap_without_target_rejected() {
        let err = AnalysisRequest::new(keyword(), None, vec![page("1")], TaskType::GapAnalysis)
            .unwrap_err();
        assert_eq!(err, DomainError::MissingTargetText);
    }
}
