//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_label};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, annotate, visible_diffs};
use crate::diff::{CompareResult, MatchStrategy, WordDiffPair};
use chrono::Utc;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the generation timestamp
    include_timestamp: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_timestamp: true,
        }
    }

    /// Omit the timestamp for reproducible output
    #[must_use]
    pub const fn without_timestamp(mut self) -> Self {
        self.include_timestamp = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Words joined by spaces, differing ones in bold.
fn render_words(words: &[WordDiffPair]) -> String {
    if words.is_empty() {
        return "_(empty)_".to_string();
    }
    words
        .iter()
        .map(|pair| {
            let word = escape_markdown_inline(&pair.word);
            if pair.differs {
                format!("**{word}**")
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut md = String::new();
        let summary = &result.summary;

        writeln!(md, "# {}\n", escape_markdown_label(config.title_or_default()))?;
        writeln!(
            md,
            "- **Original:** {}",
            escape_markdown_label(config.metadata.original_name())
        )?;
        writeln!(
            md,
            "- **Revised:** {}",
            escape_markdown_label(config.metadata.revised_name())
        )?;
        if self.include_timestamp {
            writeln!(md, "- **Generated:** {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        writeln!(md)?;

        writeln!(md, "## Summary\n")?;
        writeln!(md, "| Change | Count |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Modified | {} |", summary.modified)?;
        writeln!(md, "| Added | {} |", summary.added)?;
        writeln!(md, "| Removed | {} |", summary.removed)?;
        writeln!(md, "| **Total** | **{}** |", summary.total_changes)?;
        writeln!(md)?;

        writeln!(md, "## Changes\n")?;
        if !result.has_changes() {
            writeln!(md, "_No differences found._")?;
            return Ok(md);
        }

        let shown = visible_diffs(result, config);
        let mut current_section = None;
        let mut number = 0;
        for diff in shown {
            if result.strategy == MatchStrategy::Sectioned && current_section != Some(diff.section_key) {
                current_section = Some(diff.section_key);
                number = 0;
                writeln!(md, "### {}\n", config.section_heading(diff.section_key))?;
            }
            number += 1;

            let (original_words, revised_words) = annotate(diff, config, ReportFormat::Markdown);
            writeln!(md, "{number}. **Original:** {}", render_words(&original_words))?;
            writeln!(md, "   **Revised:** {}\n", render_words(&revised_words))?;
        }

        if shown.len() < result.diffs.len() {
            writeln!(
                md,
                "_{} more changes not shown._",
                result.diffs.len() - shown.len()
            )?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::LineDiff;
    use crate::model::DocumentKind;

    #[test]
    fn test_render_words() {
        let words = vec![
            WordDiffPair::new("the", false),
            WordDiffPair::new("quick", true),
            WordDiffPair::new("*fox*", false),
        ];
        assert_eq!(render_words(&words), "the **quick** \\*fox\\*");
        assert_eq!(render_words(&[]), "_(empty)_");
    }

    #[test]
    fn test_slide_headings() {
        let result = CompareResult::from_diffs(
            MatchStrategy::Sectioned,
            vec![
                LineDiff::new(1, "Hello world", "Hello there"),
                LineDiff::new(4, "", "Appendix"),
            ],
        );
        let mut config = ReportConfig::default();
        config.metadata.document_kind = Some(DocumentKind::Slides);
        config.metadata.original_path = Some("v1.pptx".into());

        let md = MarkdownReporter::new()
            .without_timestamp()
            .generate(&result, &config)
            .unwrap();

        assert!(md.starts_with("# Document Comparison"));
        assert!(md.contains("- **Original:** v1.pptx"));
        assert!(!md.contains("Generated"));
        assert!(md.contains("### Slide 1"));
        assert!(md.contains("### Slide 4"));
        assert!(md.contains("1. **Original:** Hello **world**"));
        assert!(md.contains("   **Revised:** Hello **there**"));
        assert!(md.contains("1. **Original:** _(empty)_"));
        assert!(md.contains("| **Total** | **2** |"));
    }

    #[test]
    fn test_flat_document_has_no_section_headings() {
        let result = CompareResult::from_diffs(MatchStrategy::Sequential, vec![LineDiff::flat("a", "b")]);
        let md = MarkdownReporter::new().generate(&result, &ReportConfig::default()).unwrap();
        assert!(!md.contains("###"));
        assert!(md.contains("1. **Original:** **a**"));
    }

    #[test]
    fn test_no_changes() {
        let md = MarkdownReporter::new()
            .generate(&CompareResult::new(MatchStrategy::Sequential), &ReportConfig::default())
            .unwrap();
        assert!(md.contains("_No differences found._"));
    }
}
