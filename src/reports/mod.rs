//! Report generation for comparison results.
//!
//! This module provides several output formats:
//! - Summary: change counts for the shell
//! - Side-by-side: two terminal columns with changed words highlighted
//! - JSON: structured data with per-word annotations
//! - Markdown: human-readable review document
//! - HTML: standalone page with changed words marked
//!
//! # Security
//!
//! Document text is untrusted. The [`escape`] module must be used before
//! embedding it in HTML or Markdown.

pub mod escape;
mod html;
mod json;
mod markdown;
mod sidebyside;
mod summary;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use sidebyside::SideBySideReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::{CompareResult, LineDiff, WordDiffPair, word_diff_with_algorithm};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a comparison result
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        result: &CompareResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Word annotations for both sides of a record: (original, revised).
pub(crate) fn annotate(
    diff: &LineDiff,
    config: &ReportConfig,
    format: ReportFormat,
) -> (Vec<WordDiffPair>, Vec<WordDiffPair>) {
    let mode = config.word_mode_for(format);
    (
        word_diff_with_algorithm(&diff.original, &diff.revised, mode, config.algorithm),
        word_diff_with_algorithm(&diff.revised, &diff.original, mode, config.algorithm),
    )
}

/// Records to render, honoring `max_items`.
pub(crate) fn visible_diffs<'a>(result: &'a CompareResult, config: &ReportConfig) -> &'a [LineDiff] {
    let limit = config.max_items.unwrap_or(usize::MAX).min(result.diffs.len());
    &result.diffs[..limit]
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, None)
}

/// Create a report generator with color and width control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    width: Option<usize>,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::SideBySide => {
            let mut reporter = SideBySideReporter::new();
            if let Some(width) = width {
                reporter = reporter.width(width);
            }
            if !use_color {
                reporter = reporter.no_colors();
            }
            Box::new(reporter)
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
