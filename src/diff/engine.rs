//! Comparison engine facade.

use super::sections::SectionMatcher;
use super::sequential::SequentialMatcher;
use super::{CompareResult, DiffAlgorithm, MatchStrategy, ParallelConfig};
use crate::error::{CompareErrorKind, DocCompareError, Result};
use crate::model::{DocumentLines, ExtractedDocument};

/// Compares two extracted documents.
///
/// The matcher is chosen from the document shape: slide decks go through
/// section-keyed matching, flat documents through sequential alignment.
#[derive(Debug, Clone, Default)]
pub struct CompareEngine {
    algorithm: DiffAlgorithm,
    parallel: ParallelConfig,
    allow_mixed_kinds: bool,
}

impl CompareEngine {
    /// Create a new engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alignment algorithm for flat documents
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Accept documents of different kinds as long as their shapes agree
    /// (e.g. a `.txt` against a `.docx`).
    #[must_use]
    pub const fn allow_mixed_kinds(mut self, allow: bool) -> Self {
        self.allow_mixed_kinds = allow;
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn parallel(&self) -> ParallelConfig {
        self.parallel
    }

    /// Compare two documents and return the ordered change records.
    pub fn compare(
        &self,
        original: &ExtractedDocument,
        revised: &ExtractedDocument,
    ) -> Result<CompareResult> {
        if original.kind != revised.kind && !self.allow_mixed_kinds {
            return Err(DocCompareError::compare(
                format!("{} vs {}", original.display_name(), revised.display_name()),
                CompareErrorKind::KindMismatch {
                    original: original.kind,
                    revised: revised.kind,
                },
            ));
        }
        self.compare_lines(&original.lines, &revised.lines)
    }

    /// Compare two line sets of the same shape.
    pub fn compare_lines(
        &self,
        original: &DocumentLines,
        revised: &DocumentLines,
    ) -> Result<CompareResult> {
        let strategy = match (original, revised) {
            (DocumentLines::Sectioned(_), DocumentLines::Sectioned(_)) => MatchStrategy::Sectioned,
            (DocumentLines::Flat(_), DocumentLines::Flat(_)) => MatchStrategy::Sequential,
            _ => {
                return Err(DocCompareError::compare(
                    String::new(),
                    CompareErrorKind::ShapeMismatch,
                ));
            }
        };

        // Identical inputs: nothing to align
        if original.content_hash() == revised.content_hash() && original == revised {
            tracing::debug!("Inputs are identical, skipping {strategy} matching");
            return Ok(CompareResult::new(strategy));
        }

        let diffs = match (original, revised) {
            (DocumentLines::Sectioned(a), DocumentLines::Sectioned(b)) => {
                tracing::debug!(
                    "Section-keyed matching over {} / {} sections",
                    a.len(),
                    b.len()
                );
                SectionMatcher::new()
                    .with_parallel(self.parallel)
                    .compare_sections(a, b)
            }
            (DocumentLines::Flat(a), DocumentLines::Flat(b)) => {
                tracing::debug!(
                    "Sequential matching ({}) over {} / {} lines",
                    self.algorithm,
                    a.len(),
                    b.len()
                );
                SequentialMatcher::new()
                    .with_algorithm(self.algorithm)
                    .compare_lines(a, b)
            }
            _ => Vec::new(),
        };

        let result = CompareResult::from_diffs(strategy, diffs);
        tracing::debug!("Found {} changed segments", result.summary.total_changes);
        Ok(result)
    }
}
