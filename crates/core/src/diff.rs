//! Edit operation types produced by the aligner

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range `[start, end)` of token indices in one sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Start index (inclusive)
    pub start: usize,
    /// End index (exclusive)
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Create a zero-width span
    pub fn point(pos: usize) -> Self {
        Self::new(pos, pos)
    }
}

/// Kind of edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    /// Tokens identical on both sides
    Equal,
    /// Tokens present only in the original
    Delete,
    /// Tokens present only in the modified
    Insert,
    /// A span of the original replaced by a span of the modified
    Replace,
}

/// A single edit operation over the two token sequences
///
/// An opcode list partitions both sequences exactly: spans union to the
/// full sequence with no gaps or overlaps, in increasing order. `Equal`
/// carries same-length spans of pairwise-identical tokens; `Delete` has an
/// empty modified span; `Insert` has an empty original span; `Replace` has
/// both spans non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    /// Kind of operation
    pub kind: EditKind,

    /// Span in the original sequence
    pub original: TokenSpan,

    /// Span in the modified sequence
    pub modified: TokenSpan,
}

impl EditOp {
    pub fn new(kind: EditKind, original: TokenSpan, modified: TokenSpan) -> Self {
        Self {
            kind,
            original,
            modified,
        }
    }

    /// Number of display lines this operation expands to
    ///
    /// One line per referenced token; `Replace` counts both sides.
    pub fn line_count(&self) -> usize {
        match self.kind {
            EditKind::Equal | EditKind::Delete => self.original.len(),
            EditKind::Insert => self.modified.len(),
            EditKind::Replace => self.original.len() + self.modified.len(),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} [{}:{}) -> [{}:{})",
            self.kind,
            self.original.start,
            self.original.end,
            self.modified.start,
            self.modified.end
        )
    }
}

/// Token-level statistics about an opcode list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Tokens unchanged between the documents
    pub unchanged: usize,

    /// Tokens deleted from the original (including the old side of replaces)
    pub deleted: usize,

    /// Tokens inserted in the modified (including the new side of replaces)
    pub inserted: usize,
}

impl DiffStats {
    /// Tally statistics from an opcode list
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = Self::default();

        for op in ops {
            match op.kind {
                EditKind::Equal => stats.unchanged += op.original.len(),
                EditKind::Delete => stats.deleted += op.original.len(),
                EditKind::Insert => stats.inserted += op.modified.len(),
                EditKind::Replace => {
                    stats.deleted += op.original.len();
                    stats.inserted += op.modified.len();
                }
            }
        }

        stats
    }

    /// Total number of lines the renderer emits for the same opcode list
    pub fn total_lines(&self) -> usize {
        self.unchanged + self.deleted + self.inserted
    }

    /// Check whether the documents differ at all
    pub fn has_changes(&self) -> bool {
        self.deleted > 0 || self.inserted > 0
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} unchanged, {} deleted, {} inserted",
            self.unchanged, self.deleted, self.inserted
        )
    }
}
