//! Order-sensitive matching for flat documents.
//!
//! Paragraph order carries meaning in prose, so lines are aligned with a
//! diff algorithm over their normalized text and only the non-equal regions
//! are reported. Records carry the text as extracted.

use super::opcodes::{OpTag, opcodes};
use super::traits::LineMatcher;
use super::{DiffAlgorithm, LineDiff};
use crate::text::normalize;

/// Sequential line matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMatcher {
    algorithm: DiffAlgorithm,
}

impl SequentialMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    /// Align two line sequences and report the differing regions.
    #[must_use]
    pub fn compare_lines<S: AsRef<str>>(&self, original: &[S], revised: &[S]) -> Vec<LineDiff> {
        let a: Vec<&str> = original.iter().map(AsRef::as_ref).collect();
        let b: Vec<&str> = revised.iter().map(AsRef::as_ref).collect();
        let a_norm: Vec<String> = a.iter().map(|line| normalize(line)).collect();
        let b_norm: Vec<String> = b.iter().map(|line| normalize(line)).collect();

        let mut diffs = Vec::new();
        for op in opcodes(self.algorithm, &a_norm, &b_norm) {
            match op.tag {
                OpTag::Equal => {}
                OpTag::Replace => {
                    let old = &a[op.original];
                    let new = &b[op.revised];
                    for k in 0..old.len().max(new.len()) {
                        let left = old.get(k).copied().unwrap_or_default();
                        let right = new.get(k).copied().unwrap_or_default();
                        diffs.push(LineDiff::flat(left, right));
                    }
                }
                OpTag::Delete => {
                    diffs.extend(a[op.original].iter().map(|line| LineDiff::flat(*line, "")));
                }
                OpTag::Insert => {
                    diffs.extend(b[op.revised].iter().map(|line| LineDiff::flat("", *line)));
                }
            }
        }

        diffs.retain(|d| !d.is_blank());
        diffs
    }
}

impl LineMatcher for SequentialMatcher {
    type Lines = [String];

    fn compare(&self, original: &[String], revised: &[String]) -> Vec<LineDiff> {
        self.compare_lines(original, revised)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Compare two flat line lists with the default algorithm.
///
/// # Examples
///
/// ```
/// use doc_compare::diff::compare_sequential;
///
/// let diffs = compare_sequential(&["A", "B", "C"], &["A", "X", "C"]);
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].original, "B");
/// assert_eq!(diffs[0].revised, "X");
/// ```
#[must_use]
pub fn compare_sequential<S: AsRef<str>>(original: &[S], revised: &[S]) -> Vec<LineDiff> {
    SequentialMatcher::new().compare_lines(original, revised)
}

/// Compare two flat line lists with a chosen alignment algorithm.
#[must_use]
pub fn compare_sequential_with<S: AsRef<str>>(
    algorithm: DiffAlgorithm,
    original: &[S],
    revised: &[S],
) -> Vec<LineDiff> {
    SequentialMatcher::new()
        .with_algorithm(algorithm)
        .compare_lines(original, revised)
}
