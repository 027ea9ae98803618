//! Edit scripts over two sequences.

use super::DiffAlgorithm;
use serde::{Deserialize, Serialize};
use similar::DiffTag;
use std::hash::Hash;
use std::ops::Range;

/// Kind of an edit-script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    /// Both ranges hold the same items
    Equal,
    /// The original range was replaced by the revised range
    Replace,
    /// The original range is absent from the revised sequence
    Delete,
    /// The revised range is absent from the original sequence
    Insert,
}

impl From<DiffTag> for OpTag {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => Self::Equal,
            DiffTag::Replace => Self::Replace,
            DiffTag::Delete => Self::Delete,
            DiffTag::Insert => Self::Insert,
        }
    }
}

/// One run of an edit script, with index ranges into both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub original: Range<usize>,
    pub revised: Range<usize>,
}

impl Opcode {
    #[must_use]
    pub fn is_equal(&self) -> bool {
        self.tag == OpTag::Equal
    }
}

/// Compute the edit script turning `original` into `revised`.
///
/// Runs cover both sequences completely and in order; adjacent deletions
/// and insertions are merged into a single `Replace`.
#[must_use]
pub fn opcodes<T: Hash + Eq + Ord>(algorithm: DiffAlgorithm, original: &[T], revised: &[T]) -> Vec<Opcode> {
    similar::capture_diff_slices(algorithm.into(), original, revised)
        .iter()
        .map(|op| {
            let (tag, original, revised) = op.as_tag_tuple();
            Opcode {
                tag: tag.into(),
                original,
                revised,
            }
        })
        .collect()
}
