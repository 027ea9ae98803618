//! Report type definitions.

use crate::diff::{DiffAlgorithm, WordDiffMode};
use crate::model::{DocumentKind, SectionKey};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: side-by-side on a terminal, summary otherwise
    #[default]
    Auto,
    /// Change counts only
    Summary,
    /// Two-column terminal view with changed words highlighted
    #[value(alias = "sbs")]
    SideBySide,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
    /// Standalone HTML page
    Html,
}

impl ReportFormat {
    /// Word alignment mode used by this format unless configured otherwise.
    #[must_use]
    pub const fn default_word_mode(&self) -> WordDiffMode {
        match self {
            Self::SideBySide => WordDiffMode::Positional,
            _ => WordDiffMode::Aligned,
        }
    }

    /// Whether the format is meant for a terminal.
    #[must_use]
    pub const fn is_terminal_format(&self) -> bool {
        matches!(self, Self::Auto | Self::Summary | Self::SideBySide)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::SideBySide => write!(f, "side-by-side"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Word alignment mode; `None` uses the format's default
    pub word_mode: Option<WordDiffMode>,
    /// Algorithm for aligned word diffs
    pub algorithm: DiffAlgorithm,
    /// Maximum records to render (all when `None`)
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            word_mode: None,
            algorithm: DiffAlgorithm::default(),
            max_items: None,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Word mode for a given output format.
    #[must_use]
    pub fn word_mode_for(&self, format: ReportFormat) -> WordDiffMode {
        self.word_mode.unwrap_or_else(|| format.default_word_mode())
    }

    /// Title, falling back to a generic one.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Document Comparison")
    }

    /// Label for a section heading, e.g. "Slide 3".
    #[must_use]
    pub fn section_heading(&self, key: SectionKey) -> String {
        let label = self
            .metadata
            .document_kind
            .map_or("Section", |k| k.section_label());
        format!("{label} {key}")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Original document path
    pub original_path: Option<String>,
    /// Revised document path
    pub revised_path: Option<String>,
    /// Kind of the compared documents
    pub document_kind: Option<DocumentKind>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Display name of the original document
    #[must_use]
    pub fn original_name(&self) -> &str {
        self.original_path.as_deref().unwrap_or("original")
    }

    /// Display name of the revised document
    #[must_use]
    pub fn revised_name(&self) -> &str {
        self.revised_path.as_deref().unwrap_or("revised")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word_modes() {
        let config = ReportConfig::default();
        assert_eq!(config.word_mode_for(ReportFormat::SideBySide), WordDiffMode::Positional);
        assert_eq!(config.word_mode_for(ReportFormat::Markdown), WordDiffMode::Aligned);

        let forced = ReportConfig {
            word_mode: Some(WordDiffMode::Positional),
            ..ReportConfig::default()
        };
        assert_eq!(forced.word_mode_for(ReportFormat::Html), WordDiffMode::Positional);
    }

    #[test]
    fn test_section_heading() {
        let mut config = ReportConfig::default();
        assert_eq!(config.section_heading(2), "Section 2");
        config.metadata.document_kind = Some(DocumentKind::Slides);
        assert_eq!(config.section_heading(2), "Slide 2");
    }

    #[test]
    fn test_metadata_names() {
        let metadata = ReportMetadata::new();
        assert_eq!(metadata.original_name(), "original");
        assert_eq!(metadata.tool_version, env!("CARGO_PKG_VERSION"));
    }
}
