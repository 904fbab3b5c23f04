//! Compare engine that orchestrates the entire comparison
//!
//! Ties tokenizer, aligner, and renderer together for a pair of documents.
//! Each call owns all of its intermediate values; engines hold only
//! configuration, so one engine can serve any number of threads.

use tracing::debug;

use crate::algorithm::align;
use crate::config::CompareConfig;
use crate::diff::DiffStats;
use crate::error::{CompareError, DocumentSide};
use crate::render::{render, Page};
use crate::tokenizers::{tokenize, Token};

/// The main compare engine
pub struct CompareEngine {
    config: CompareConfig,
}

impl CompareEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Compare two documents and produce rendered pages
    ///
    /// Steps:
    /// 1. Tokenize both texts
    /// 2. Enforce the token limit before alignment, which is the expensive
    ///    part
    /// 3. Align the sequences into an opcode list
    /// 4. Render the opcodes into paginated lines
    ///
    /// Two empty documents are not an error: the result is a single page
    /// carrying only the header.
    pub fn compare(&self, original: &str, modified: &str) -> Result<Vec<Page>, CompareError> {
        let original_tokens = tokenize(original);
        let modified_tokens = tokenize(modified);

        self.check_size(DocumentSide::Original, &original_tokens)?;
        self.check_size(DocumentSide::Modified, &modified_tokens)?;

        debug!(
            original_tokens = original_tokens.len(),
            modified_tokens = modified_tokens.len(),
            "tokenized documents"
        );

        let ops = align(&original_tokens, &modified_tokens);

        let stats = DiffStats::from_ops(&ops);
        debug!(ops = ops.len(), summary = %stats.summary(), "aligned documents");

        Ok(render(
            &original_tokens,
            &modified_tokens,
            &ops,
            &self.config.page,
        ))
    }

    fn check_size(&self, document: DocumentSide, tokens: &[Token]) -> Result<(), CompareError> {
        if let Some(limit) = self.config.max_tokens {
            if tokens.len() > limit {
                return Err(CompareError::OversizeInput {
                    document,
                    tokens: tokens.len(),
                    limit,
                });
            }
        }
        Ok(())
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new(CompareConfig::default())
    }
}
