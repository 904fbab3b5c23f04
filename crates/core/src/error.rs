//! Error types for the compare pipeline and its collaborators
//!
//! The core itself fails only on oversized input. Document extraction and
//! format conversion happen in external collaborators; their variants are
//! defined here so every failure reaching a caller is distinguishable and
//! names the document it came from.

use std::fmt;
use thiserror::Error;

/// Which of the two compared documents an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Original,
    Modified,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::Original => f.write_str("original"),
            DocumentSide::Modified => f.write_str("modified"),
        }
    }
}

/// Failures in the compare pipeline
#[derive(Debug, Error)]
pub enum CompareError {
    /// A document exceeds the configured token limit
    #[error("{document} document has {tokens} tokens, over the limit of {limit}")]
    OversizeInput {
        document: DocumentSide,
        tokens: usize,
        limit: usize,
    },

    /// The extraction collaborator could not get text out of a document
    #[error("failed to extract text from the {document} document: {message}")]
    Decode {
        document: DocumentSide,
        message: String,
    },

    /// The format-conversion collaborator failed or is unavailable
    #[error("format conversion failed for the {document} document: {message}")]
    Conversion {
        document: DocumentSide,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversize_message_names_the_side() {
        let err = CompareError::OversizeInput {
            document: DocumentSide::Modified,
            tokens: 60_000,
            limit: 50_000,
        };

        assert_eq!(
            err.to_string(),
            "modified document has 60000 tokens, over the limit of 50000"
        );
    }

    #[test]
    fn test_collaborator_errors_carry_context() {
        let err = CompareError::Decode {
            document: DocumentSide::Original,
            message: "not a zip archive".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("original"));
        assert!(text.contains("not a zip archive"));
    }
}
