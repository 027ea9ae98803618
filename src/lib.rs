//! **Line and word level comparison of slide decks, Word documents and plain text.**
//!
//! `doc-compare` extracts the text of two versions of a document and reports which
//! segments changed, and within each changed segment which words differ. It powers
//! both a command-line interface and a Rust library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`extract`]**: Turns `.pptx`, `.docx` and `.txt` files into an [`ExtractedDocument`]:
//!   lines keyed by slide for slide decks, one ordered stream otherwise.
//! - **[`diff`]**: Home of the [`CompareEngine`]. Slide decks are matched slide by slide
//!   regardless of line order; flowing text is aligned as a sequence. A word-level pass
//!   pinpoints the words that differ inside a changed segment.
//! - **[`reports`]**: Renders a [`CompareResult`] as a terminal summary, a side-by-side
//!   view, JSON, Markdown or HTML.
//! - **[`pipeline`]**: Shared extract → compare → report orchestration used by the CLI.
//! - **[`config`]**: YAML configuration with discovery, presets and validation.
//!
//! ## Comparing Two Documents
//!
//! ```no_run
//! use doc_compare::{CompareEngine, ExtractOptions, extract_document};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ExtractOptions::default();
//!     let original = extract_document(Path::new("deck-v1.pptx"), &options)?;
//!     let revised = extract_document(Path::new("deck-v2.pptx"), &options)?;
//!
//!     let result = CompareEngine::new().compare(&original, &revised)?;
//!     for diff in &result.diffs {
//!         println!("slide {}: {:?} -> {:?}", diff.section_key, diff.original, diff.revised);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Working With Lines Directly
//!
//! ```
//! use doc_compare::{WordDiffMode, compare_sequential, word_diff};
//!
//! let original = vec!["A".to_string()];
//! let revised = vec!["A".to_string(), "B".to_string()];
//! let diffs = compare_sequential(&original, &revised);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].revised, "B");
//!
//! let words = word_diff("the quick fox", "the slow fox", WordDiffMode::Positional);
//! let changed: Vec<&str> = words.iter().filter(|w| w.differs).map(|w| w.word.as_str()).collect();
//! assert_eq!(changed, vec!["quick"]);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `doc-compare` library crate. The command-line tool
//! is installed with `cargo install doc-compare`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    // Variable names like `a_norm`/`b_norm` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod text;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, ComparisonConfig, ExtractionConfig, OutputConfig};
pub use config::{CompareConfig, ExtractConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{
    ChangeKind, CompareEngine, CompareResult, CompareSummary, DiffAlgorithm, LineDiff,
    MatchStrategy, WordDiffMode, WordDiffPair, compare_sections, compare_sequential, word_diff,
};
pub use error::{DocCompareError, ErrorContext, OptionContext, Result};
pub use extract::{DocumentExtractor, ExtractError, ExtractOptions, extract_document};
pub use model::{DocumentKind, DocumentLines, ExtractedDocument, SectionKey};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};
pub use text::{is_numeric_noise, normalize};
