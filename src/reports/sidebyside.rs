//! Side-by-side terminal output.
//!
//! Each changed segment is shown as one row: original on the left, revised
//! on the right, with the differing words emphasized.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, annotate, visible_diffs};
use crate::diff::{ChangeKind, CompareResult, LineDiff, MatchStrategy, WordDiffPair};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD_RED: &str = "\x1b[1;31m";
    pub const BOLD_GREEN: &str = "\x1b[1;32m";
}

const DEFAULT_WIDTH: usize = 120;
const MIN_COLUMN: usize = 10;
const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Side-by-side diff reporter
pub struct SideBySideReporter {
    width: usize,
    use_colors: bool,
}

impl SideBySideReporter {
    /// Create a reporter sized to the terminal (`COLUMNS`), default 120.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: terminal_width().unwrap_or(DEFAULT_WIDTH),
            use_colors: true,
        }
    }

    /// Set total output width
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    const fn col(&self, code: &'static str) -> &'static str {
        if self.use_colors { code } else { "" }
    }

    /// Width of one text column: total minus the marker and the divider.
    fn column_width(&self) -> usize {
        (self.width.saturating_sub(5) / 2).max(MIN_COLUMN)
    }

    fn format_header(&self, original: &str, revised: &str) -> String {
        let half = self.column_width();
        let (left, left_width) = truncate_to_width(original, half);
        let (right, _) = truncate_to_width(revised, half);
        format!(
            "  {}{}{}{} │ {}{}{}\n",
            self.col(colors::BOLD),
            left,
            self.col(colors::RESET),
            " ".repeat(half - left_width),
            self.col(colors::BOLD),
            right,
            self.col(colors::RESET),
        )
    }

    fn format_section_header(&self, title: &str) -> String {
        format!(
            "\n{}{}═══ {} {}{}\n",
            self.col(colors::CYAN),
            self.col(colors::BOLD),
            title,
            "═".repeat(self.width.saturating_sub(title.width() + 5)),
            self.col(colors::RESET),
        )
    }

    /// Render one side's words into at most `max_width` columns.
    ///
    /// Returns the rendered text and its visible width.
    fn render_side(&self, words: &[WordDiffPair], max_width: usize, highlight: &'static str) -> (String, usize) {
        if words.is_empty() {
            let (text, width) = truncate_to_width(EMPTY_PLACEHOLDER, max_width);
            return (
                format!("{}{}{}", self.col(colors::DIM), text, self.col(colors::RESET)),
                width,
            );
        }

        let mut out = String::new();
        let mut used = 0;
        for (idx, pair) in words.iter().enumerate() {
            let sep = usize::from(idx > 0);
            let word_width = pair.word.width();
            if used + sep + word_width > max_width {
                if used + sep + 1 < max_width {
                    if sep == 1 {
                        out.push(' ');
                    }
                    let room = max_width - used - sep - 1;
                    let (partial, partial_width) = truncate_chars(&pair.word, room);
                    out.push_str(&self.styled(&partial, pair.differs, highlight));
                    out.push('…');
                    used += sep + partial_width + 1;
                } else if used < max_width {
                    out.push('…');
                    used += 1;
                }
                break;
            }
            if sep == 1 {
                out.push(' ');
            }
            out.push_str(&self.styled(&pair.word, pair.differs, highlight));
            used += sep + word_width;
        }
        (out, used)
    }

    fn styled(&self, word: &str, differs: bool, highlight: &'static str) -> String {
        if differs && self.use_colors {
            format!("{highlight}{word}{}", colors::RESET)
        } else {
            word.to_string()
        }
    }

    fn format_row(&self, diff: &LineDiff, config: &ReportConfig) -> String {
        let half = self.column_width();
        let (original_words, revised_words) = annotate(diff, config, ReportFormat::SideBySide);

        let kind = diff.kind();
        let marker_color = match kind {
            ChangeKind::Modified => colors::YELLOW,
            ChangeKind::Added => colors::GREEN,
            ChangeKind::Removed => colors::RED,
        };

        let (left, left_width) = self.render_side(&original_words, half, colors::BOLD_RED);
        let (right, _) = self.render_side(&revised_words, half, colors::BOLD_GREEN);

        format!(
            "{}{}{} {}{} │ {}\n",
            self.col(marker_color),
            kind.symbol(),
            self.col(colors::RESET),
            left,
            " ".repeat(half.saturating_sub(left_width)),
            right,
        )
    }
}

impl Default for SideBySideReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SideBySideReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{}doc-compare{} --- {}",
            self.col(colors::CYAN),
            self.col(colors::RESET),
            config.title_or_default()
        )?;
        out.push_str(&self.format_header(
            config.metadata.original_name(),
            config.metadata.revised_name(),
        ));

        let half = self.column_width();
        writeln!(
            out,
            "{}{}┼{}{}",
            self.col(colors::DIM),
            "─".repeat(half + 3),
            "─".repeat(half + 1),
            self.col(colors::RESET)
        )?;

        if !result.has_changes() {
            writeln!(out, "{}No changes{}", self.col(colors::DIM), self.col(colors::RESET))?;
            return Ok(out);
        }

        let shown = visible_diffs(result, config);
        let mut current_section = None;
        for diff in shown {
            if result.strategy == MatchStrategy::Sectioned && current_section != Some(diff.section_key) {
                current_section = Some(diff.section_key);
                out.push_str(&self.format_section_header(&config.section_heading(diff.section_key)));
            }
            out.push_str(&self.format_row(diff, config));
        }

        if shown.len() < result.diffs.len() {
            writeln!(
                out,
                "\n{}… {} more changes not shown{}",
                self.col(colors::DIM),
                result.diffs.len() - shown.len(),
                self.col(colors::RESET)
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::SideBySide
    }
}

/// Terminal width from the `COLUMNS` environment variable
fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok().filter(|&w| w > 0)
}

/// Cut a string to at most `max_width` display columns.
fn truncate_chars(s: &str, max_width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    (out, used)
}

/// Truncate to `max_width` columns, ending with an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> (String, usize) {
    let width = s.width();
    if width <= max_width {
        return (s.to_string(), width);
    }
    if max_width == 0 {
        return (String::new(), 0);
    }
    let (mut cut, used) = truncate_chars(s, max_width - 1);
    cut.push('…');
    (cut, used + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(diffs: Vec<LineDiff>, strategy: MatchStrategy) -> CompareResult {
        CompareResult::from_diffs(strategy, diffs)
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), ("short".to_string(), 5));
        assert_eq!(truncate_to_width("abcdefgh", 5), ("abcd…".to_string(), 5));
        // Wide characters take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 5), ("日本…".to_string(), 5));
    }

    #[test]
    fn test_rows_without_color() {
        let out = SideBySideReporter::new()
            .width(80)
            .no_colors()
            .generate(
                &result(
                    vec![LineDiff::new(2, "the quick fox", "the slow fox"), LineDiff::new(2, "", "new line")],
                    MatchStrategy::Sectioned,
                ),
                &ReportConfig::default(),
            )
            .unwrap();

        assert!(out.contains("Section 2"), "{out}");
        assert!(out.contains("~ the quick fox"), "{out}");
        assert!(out.contains("│ the slow fox"), "{out}");
        assert!(out.contains("+ (empty)"), "{out}");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_changed_words_highlighted() {
        let reporter = SideBySideReporter::new().width(80);
        let out = reporter
            .generate(
                &result(vec![LineDiff::flat("the quick fox", "the slow fox")], MatchStrategy::Sequential),
                &ReportConfig::default(),
            )
            .unwrap();
        assert!(out.contains("\x1b[1;31mquick\x1b[0m"), "{out}");
        assert!(out.contains("\x1b[1;32mslow\x1b[0m"), "{out}");
        assert!(!out.contains("\x1b[1;31mthe"), "{out}");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let reporter = SideBySideReporter::new().width(45).no_colors();
        let long = "word ".repeat(30);
        let out = reporter
            .generate(
                &result(vec![LineDiff::flat(long.trim(), "short")], MatchStrategy::Sequential),
                &ReportConfig::default(),
            )
            .unwrap();
        let row = out.lines().find(|l| l.starts_with('~')).expect("row present");
        assert!(row.contains('…'));
        let left = row.split('│').next().expect("left column");
        assert_eq!(left.width(), 2 + reporter.column_width() + 1);
    }

    #[test]
    fn test_no_changes() {
        let out = SideBySideReporter::new()
            .no_colors()
            .generate(&CompareResult::new(MatchStrategy::Sequential), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("No changes"));
    }
}
