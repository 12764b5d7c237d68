//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    #[error("Gap analysis requires the target page text")]
    MissingTargetText,

    #[error("At least one competitor text is required")]
    NoCompetitorText,

    #[error("At most {max} competitor texts are allowed, got {actual}")]
    TooManyCompetitors { max: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyKeyword.to_string(), "Keyword cannot be empty");
        assert_eq!(
            DomainError::TooManyCompetitors { max: 3, actual: 4 }.to_string(),
            "At most 3 competitor texts are allowed, got 4"
        );
    }
}
