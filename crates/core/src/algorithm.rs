//! Token sequence alignment
//!
//! Computes an ordered opcode list describing how one token sequence turns
//! into another, using a longest-common-block strategy: repeatedly find the
//! longest contiguous run of tokens common to both remaining ranges,
//! divide around it, then classify the gaps left between matched blocks.
//! Ties on block length prefer the lowest start index in the original,
//! then in the modified, so identical inputs always produce identical
//! output. Worst case O(n*m) token comparisons; callers bound input size
//! before invoking (see the engine's token limit).

use std::collections::HashMap;

use crate::diff::{EditKind, EditOp, TokenSpan};
use crate::tokenizers::Token;

/// A contiguous run of identical tokens in both sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchBlock {
    /// Start index in the original sequence
    original: usize,
    /// Start index in the modified sequence
    modified: usize,
    /// Number of tokens in the run
    len: usize,
}

/// Compute the opcode list aligning `original` with `modified`
///
/// The result partitions both sequences exactly, in increasing order.
/// Matched blocks become `Equal` ops; gaps become `Delete`, `Insert`, or
/// `Replace` depending on which sides are non-empty.
///
/// # Example
///
/// ```rust
/// use pagediff_core::algorithm::align;
/// use pagediff_core::diff::EditKind;
/// use pagediff_core::tokenizers::tokenize;
///
/// let ops = align(&tokenize("the quick fox"), &tokenize("the slow fox"));
/// let kinds: Vec<EditKind> = ops.iter().map(|op| op.kind).collect();
/// assert_eq!(kinds, vec![EditKind::Equal, EditKind::Replace, EditKind::Equal]);
/// ```
pub fn align(original: &[Token], modified: &[Token]) -> Vec<EditOp> {
    let blocks = matching_blocks(original, modified);

    let mut ops = Vec::new();
    let mut orig_pos = 0;
    let mut mod_pos = 0;

    for block in blocks {
        let gap_kind = match (orig_pos < block.original, mod_pos < block.modified) {
            (true, true) => Some(EditKind::Replace),
            (true, false) => Some(EditKind::Delete),
            (false, true) => Some(EditKind::Insert),
            (false, false) => None,
        };

        if let Some(kind) = gap_kind {
            ops.push(EditOp::new(
                kind,
                TokenSpan::new(orig_pos, block.original),
                TokenSpan::new(mod_pos, block.modified),
            ));
        }

        if block.len > 0 {
            ops.push(EditOp::new(
                EditKind::Equal,
                TokenSpan::new(block.original, block.original + block.len),
                TokenSpan::new(block.modified, block.modified + block.len),
            ));
        }

        orig_pos = block.original + block.len;
        mod_pos = block.modified + block.len;
    }

    ops
}

/// Index each modified-side token text to its ascending positions
fn position_index(modified: &[Token]) -> HashMap<&str, Vec<usize>> {
    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();

    for (pos, token) in modified.iter().enumerate() {
        index.entry(token.text.as_str()).or_default().push(pos);
    }

    index
}

/// Find all maximal matched blocks, in order, ending with a zero-length
/// sentinel at the end of both sequences
///
/// Divide-and-recurse around each longest match, driven by a work queue;
/// a sub-range only goes back on the queue while both of its sides are
/// non-empty, since an empty side cannot contain a match.
fn matching_blocks(original: &[Token], modified: &[Token]) -> Vec<MatchBlock> {
    let index = position_index(modified);

    let mut queue = vec![(0, original.len(), 0, modified.len())];
    let mut blocks = Vec::new();

    while let Some((orig_lo, orig_hi, mod_lo, mod_hi)) = queue.pop() {
        let block = find_longest_match(original, &index, orig_lo, orig_hi, mod_lo, mod_hi);

        if block.len > 0 {
            if orig_lo < block.original && mod_lo < block.modified {
                queue.push((orig_lo, block.original, mod_lo, block.modified));
            }
            if block.original + block.len < orig_hi && block.modified + block.len < mod_hi {
                queue.push((block.original + block.len, orig_hi, block.modified + block.len, mod_hi));
            }
            blocks.push(block);
        }
    }

    blocks.sort_unstable_by_key(|b| (b.original, b.modified));

    // Collapse runs the recursion found in separate pieces, so a contiguous
    // stretch of equal tokens always becomes a single Equal op
    let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len() + 1);
    for block in blocks {
        match merged.last_mut() {
            Some(last)
                if last.original + last.len == block.original
                    && last.modified + last.len == block.modified =>
            {
                last.len += block.len;
            }
            _ => merged.push(block),
        }
    }

    merged.push(MatchBlock {
        original: original.len(),
        modified: modified.len(),
        len: 0,
    });

    merged
}

/// Find the longest block of identical tokens within the given sub-ranges
///
/// Of all maximal blocks, returns the one starting earliest in the
/// original, and of those, earliest in the modified; the strict
/// greater-than below keeps the first block encountered in scan order.
fn find_longest_match(
    original: &[Token],
    index: &HashMap<&str, Vec<usize>>,
    orig_lo: usize,
    orig_hi: usize,
    mod_lo: usize,
    mod_hi: usize,
) -> MatchBlock {
    let mut best = MatchBlock {
        original: orig_lo,
        modified: mod_lo,
        len: 0,
    };

    // run_len[j] = length of the common run ending at the previous original
    // index and modified index j
    let mut run_len: HashMap<usize, usize> = HashMap::new();

    for i in orig_lo..orig_hi {
        let mut next_run_len: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = index.get(original[i].text.as_str()) {
            for &j in positions {
                if j < mod_lo {
                    continue;
                }
                if j >= mod_hi {
                    break;
                }

                let len = if j == mod_lo {
                    1
                } else {
                    run_len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_run_len.insert(j, len);

                if len > best.len {
                    best = MatchBlock {
                        original: i + 1 - len,
                        modified: j + 1 - len,
                        len,
                    };
                }
            }
        }

        run_len = next_run_len;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::tokenize;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn op(kind: EditKind, i1: usize, i2: usize, j1: usize, j2: usize) -> EditOp {
        EditOp::new(kind, TokenSpan::new(i1, i2), TokenSpan::new(j1, j2))
    }

    /// Assert the opcode invariants: spans partition both sequences in
    /// order, Equal spans hold identical tokens, gap ops are shaped right
    fn assert_valid_ops(ops: &[EditOp], original: &[Token], modified: &[Token]) {
        let mut orig_pos = 0;
        let mut mod_pos = 0;

        for op in ops {
            assert_eq!(op.original.start, orig_pos, "gap or overlap in original spans");
            assert_eq!(op.modified.start, mod_pos, "gap or overlap in modified spans");

            match op.kind {
                EditKind::Equal => {
                    assert_eq!(op.original.len(), op.modified.len());
                    assert!(!op.original.is_empty());
                    for offset in 0..op.original.len() {
                        assert_eq!(
                            original[op.original.start + offset].text,
                            modified[op.modified.start + offset].text,
                        );
                    }
                }
                EditKind::Delete => {
                    assert!(!op.original.is_empty());
                    assert!(op.modified.is_empty());
                }
                EditKind::Insert => {
                    assert!(op.original.is_empty());
                    assert!(!op.modified.is_empty());
                }
                EditKind::Replace => {
                    assert!(!op.original.is_empty());
                    assert!(!op.modified.is_empty());
                }
            }

            orig_pos = op.original.end;
            mod_pos = op.modified.end;
        }

        assert_eq!(orig_pos, original.len());
        assert_eq!(mod_pos, modified.len());
    }

    #[test]
    fn test_identical_sequences() {
        let tokens = tokenize("one two three four");
        let ops = align(&tokens, &tokens);

        assert_eq!(ops, vec![op(EditKind::Equal, 0, 4, 0, 4)]);
    }

    #[test]
    fn test_fully_disjoint_sequences() {
        let original = tokenize("alpha beta");
        let modified = tokenize("gamma delta epsilon");
        let ops = align(&original, &modified);

        assert_eq!(ops, vec![op(EditKind::Replace, 0, 2, 0, 3)]);
    }

    #[test]
    fn test_empty_original() {
        let ops = align(&[], &tokenize("hello world"));

        assert_eq!(ops, vec![op(EditKind::Insert, 0, 0, 0, 2)]);
    }

    #[test]
    fn test_empty_modified() {
        let ops = align(&tokenize("hello world"), &[]);

        assert_eq!(ops, vec![op(EditKind::Delete, 0, 2, 0, 0)]);
    }

    #[test]
    fn test_both_empty() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn test_word_substitution_and_insertion() {
        let original = tokenize("the quick brown fox");
        let modified = tokenize("the slow brown fox jumps");
        let ops = align(&original, &modified);

        assert_eq!(
            ops,
            vec![
                op(EditKind::Equal, 0, 1, 0, 1),
                op(EditKind::Replace, 1, 2, 1, 2),
                op(EditKind::Equal, 2, 4, 2, 4),
                op(EditKind::Insert, 4, 4, 4, 5),
            ]
        );
    }

    #[test]
    fn test_tie_break_prefers_earliest_original() {
        // "x" matches at original index 0 and 2; the earlier one anchors
        let ops = align(&tokenize("x a x"), &tokenize("x"));

        assert_eq!(
            ops,
            vec![
                op(EditKind::Equal, 0, 1, 0, 1),
                op(EditKind::Delete, 1, 3, 1, 1),
            ]
        );
    }

    #[test]
    fn test_tie_break_prefers_earliest_modified() {
        let ops = align(&tokenize("x"), &tokenize("x a x"));

        assert_eq!(
            ops,
            vec![
                op(EditKind::Equal, 0, 1, 0, 1),
                op(EditKind::Insert, 1, 1, 1, 3),
            ]
        );
    }

    #[test]
    fn test_mirror_structure_on_tie_free_input() {
        let a = tokenize("the quick brown fox");
        let b = tokenize("the slow brown fox jumps");

        let forward = align(&a, &b);
        let backward = align(&b, &a);

        let mirrored: Vec<EditOp> = forward
            .iter()
            .map(|op| {
                let kind = match op.kind {
                    EditKind::Delete => EditKind::Insert,
                    EditKind::Insert => EditKind::Delete,
                    other => other,
                };
                EditOp::new(kind, op.modified, op.original)
            })
            .collect();

        assert_eq!(backward, mirrored);
    }

    #[test]
    fn test_interleaved_changes() {
        let original = tokenize("a b c d e");
        let modified = tokenize("a x c y e z");
        let ops = align(&original, &modified);

        assert_valid_ops(&ops, &original, &modified);
        assert_eq!(
            ops,
            vec![
                op(EditKind::Equal, 0, 1, 0, 1),
                op(EditKind::Replace, 1, 2, 1, 2),
                op(EditKind::Equal, 2, 3, 2, 3),
                op(EditKind::Replace, 3, 4, 3, 4),
                op(EditKind::Equal, 4, 5, 4, 5),
                op(EditKind::Insert, 5, 5, 5, 6),
            ]
        );
    }

    #[test]
    fn test_repeated_tokens() {
        let original = tokenize("a a a b");
        let modified = tokenize("a a b");
        let ops = align(&original, &modified);

        assert_valid_ops(&ops, &original, &modified);
        let stats = crate::diff::DiffStats::from_ops(&ops);
        assert_eq!(stats.unchanged, 3);
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.inserted, 0);
    }

    proptest! {
        #[test]
        fn align_partitions_both_sequences(
            a in prop::collection::vec("[a-e]", 0..16),
            b in prop::collection::vec("[a-e]", 0..16),
        ) {
            let original: Vec<Token> = a
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(w.clone(), i))
                .collect();
            let modified: Vec<Token> = b
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(w.clone(), i))
                .collect();

            let ops = align(&original, &modified);
            assert_valid_ops(&ops, &original, &modified);
        }

        #[test]
        fn align_with_self_is_single_equal(a in prop::collection::vec("[a-e]", 1..16)) {
            let tokens: Vec<Token> = a
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(w.clone(), i))
                .collect();

            let ops = align(&tokens, &tokens);
            prop_assert_eq!(ops.len(), 1);
            prop_assert_eq!(ops[0].kind, EditKind::Equal);
            prop_assert_eq!(ops[0].original.len(), tokens.len());
        }
    }
}
