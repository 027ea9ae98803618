//! Document comparison engine.
//!
//! Two line matchers and one word aligner make up the engine:
//!
//! - [`compare_sections`]: order-independent matching inside each section,
//!   used for slide decks
//! - [`compare_sequential`]: ordered alignment of one line stream, used for
//!   prose
//! - [`word_diff`]: flags which words of one side of a changed segment
//!   differ from the other side
//!
//! [`CompareEngine`] picks the matcher from the document shape.
//!
//! # Example
//!
//! ```
//! use doc_compare::diff::CompareEngine;
//! use doc_compare::model::{DocumentKind, ExtractedDocument};
//!
//! let old = ExtractedDocument::flat(DocumentKind::PlainText, vec!["A".into(), "B".into()]);
//! let new = ExtractedDocument::flat(DocumentKind::PlainText, vec!["A".into(), "C".into()]);
//!
//! let result = CompareEngine::new().compare(&old, &new)?;
//! assert_eq!(result.summary.modified, 1);
//! # Ok::<(), doc_compare::error::DocCompareError>(())
//! ```

mod engine;
mod engine_config;
pub mod opcodes;
mod result;
mod sections;
mod sequential;
pub mod traits;
mod words;

pub use engine::CompareEngine;
pub use engine_config::{DiffAlgorithm, ParallelConfig};
pub use result::{
    ChangeKind, CompareResult, CompareSummary, LineDiff, MatchStrategy, SectionDiffs,
};
pub use sections::{SectionMatcher, compare_sections};
pub use sequential::{SequentialMatcher, compare_sequential, compare_sequential_with};
pub use traits::LineMatcher;
pub use words::{WordDiffMode, WordDiffPair, word_diff, word_diff_with_algorithm};
