//! Comparison result structures.

use super::words::{word_diff, WordDiffMode, WordDiffPair};
use crate::model::{SectionKey, FLAT_SECTION};
use serde::{Deserialize, Serialize};

/// A pair of text segments that differ between the two documents.
///
/// At least one side is non-blank. Text is kept as extracted (not
/// normalized) so renderers can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineDiff {
    /// Section the segment belongs to (0 for flat documents)
    pub section_key: SectionKey,
    /// Text in the original document, empty when the segment was added
    pub original: String,
    /// Text in the revised document, empty when the segment was removed
    pub revised: String,
}

impl LineDiff {
    #[must_use]
    pub fn new(
        section_key: SectionKey,
        original: impl Into<String>,
        revised: impl Into<String>,
    ) -> Self {
        Self {
            section_key,
            original: original.into(),
            revised: revised.into(),
        }
    }

    /// Record for a flat document.
    #[must_use]
    pub fn flat(original: impl Into<String>, revised: impl Into<String>) -> Self {
        Self::new(FLAT_SECTION, original, revised)
    }

    /// Whether both sides are empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.original.trim().is_empty() && self.revised.trim().is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match (self.original.trim().is_empty(), self.revised.trim().is_empty()) {
            (true, _) => ChangeKind::Added,
            (false, true) => ChangeKind::Removed,
            (false, false) => ChangeKind::Modified,
        }
    }

    /// Word annotations for the original side against the revised side.
    #[must_use]
    pub fn original_words(&self, mode: WordDiffMode) -> Vec<WordDiffPair> {
        word_diff(&self.original, &self.revised, mode)
    }

    /// Word annotations for the revised side against the original side.
    #[must_use]
    pub fn revised_words(&self, mode: WordDiffMode) -> Vec<WordDiffPair> {
        word_diff(&self.revised, &self.original, mode)
    }
}

/// Classification of a [`LineDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Only present in the revised document
    Added,
    /// Only present in the original document
    Removed,
    /// Present on both sides with different content
    Modified,
}

impl ChangeKind {
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Added => "+",
            Self::Removed => "-",
            Self::Modified => "~",
        }
    }
}

/// Which matcher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Order-independent matching within each section
    Sectioned,
    /// Ordered sequence alignment over the whole document
    Sequential,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sectioned => write!(f, "sectioned"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareSummary {
    pub total_changes: usize,
    pub modified: usize,
    pub added: usize,
    pub removed: usize,
    pub sections_affected: usize,
}

/// Complete result of a document comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct CompareResult {
    /// Matcher that produced the records
    pub strategy: MatchStrategy,
    /// Records ordered by section key, then discovery order
    pub diffs: Vec<LineDiff>,
    /// Summary statistics
    pub summary: CompareSummary,
}

impl CompareResult {
    /// Create an empty result
    pub const fn new(strategy: MatchStrategy) -> Self {
        Self {
            strategy,
            diffs: Vec::new(),
            summary: CompareSummary {
                total_changes: 0,
                modified: 0,
                added: 0,
                removed: 0,
                sections_affected: 0,
            },
        }
    }

    /// Wrap matcher output and compute the summary.
    pub fn from_diffs(strategy: MatchStrategy, diffs: Vec<LineDiff>) -> Self {
        let mut result = Self {
            strategy,
            diffs,
            summary: CompareSummary::default(),
        };
        result.calculate_summary();
        result
    }

    /// Recalculate summary statistics from the records.
    pub fn calculate_summary(&mut self) {
        let mut summary = CompareSummary {
            total_changes: self.diffs.len(),
            sections_affected: self.sections().len(),
            ..CompareSummary::default()
        };
        for diff in &self.diffs {
            match diff.kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
            }
        }
        self.summary = summary;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Records grouped by consecutive section key.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionDiffs<'_>> {
        self.diffs
            .chunk_by(|a, b| a.section_key == b.section_key)
            .map(|diffs| SectionDiffs {
                key: diffs[0].section_key,
                diffs,
            })
            .collect()
    }

    /// Records belonging to one section.
    pub fn diffs_in_section(&self, key: SectionKey) -> impl Iterator<Item = &LineDiff> {
        self.diffs.iter().filter(move |d| d.section_key == key)
    }
}

/// Records sharing one section key.
#[derive(Debug, Clone, Copy)]
pub struct SectionDiffs<'a> {
    pub key: SectionKey,
    pub diffs: &'a [LineDiff],
}
