//! Summary report generator for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{CompareResult, MatchStrategy};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            config.metadata.original_name(),
            config.metadata.revised_name()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Matching:", "cyan"),
            result.strategy
        ));
        lines.push(String::new());

        lines.push(self.color("Changes:", "bold"));
        if summary.modified > 0 {
            lines.push(format!(
                "  {} {} modified",
                self.color(&format!("~{}", summary.modified), "yellow"),
                plural(summary.modified, "segment", "segments")
            ));
        }
        if summary.added > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{}", summary.added), "green"),
                plural(summary.added, "segment", "segments")
            ));
        }
        if summary.removed > 0 {
            lines.push(format!(
                "  {} {} removed",
                self.color(&format!("-{}", summary.removed), "red"),
                plural(summary.removed, "segment", "segments")
            ));
        }
        if !result.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        if result.strategy == MatchStrategy::Sectioned && summary.sections_affected > 0 {
            let label = config
                .metadata
                .document_kind
                .map_or("section", |k| k.section_label())
                .to_lowercase();
            let keys: Vec<String> = result.sections().iter().map(|s| s.key.to_string()).collect();
            lines.push(String::new());
            lines.push(format!(
                "{}  {} {}{} ({})",
                self.color("Affected:", "cyan"),
                summary.sections_affected,
                label,
                if summary.sections_affected == 1 { "" } else { "s" },
                keys.join(", ")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::LineDiff;
    use crate::model::DocumentKind;

    #[test]
    fn test_summary_counts() {
        let result = CompareResult::from_diffs(
            MatchStrategy::Sectioned,
            vec![
                LineDiff::new(1, "a", "b"),
                LineDiff::new(3, "", "c"),
                LineDiff::new(3, "d", ""),
            ],
        );
        let mut config = ReportConfig::default();
        config.metadata.document_kind = Some(DocumentKind::Slides);

        let out = SummaryReporter::new().no_color().generate(&result, &config).unwrap();
        assert!(out.contains("~1 segment modified"), "{out}");
        assert!(out.contains("+1 segment added"), "{out}");
        assert!(out.contains("-1 segment removed"), "{out}");
        assert!(out.contains("2 slides (1, 3)"), "{out}");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_summary_no_changes() {
        let result = CompareResult::new(MatchStrategy::Sequential);
        let out = SummaryReporter::new()
            .no_color()
            .generate(&result, &ReportConfig::default())
            .unwrap();
        assert!(out.contains("No changes"));
        assert!(!out.contains("Affected"));
    }

    #[test]
    fn test_summary_colored() {
        let result = CompareResult::from_diffs(MatchStrategy::Sequential, vec![LineDiff::flat("a", "b")]);
        let out = SummaryReporter::new().generate(&result, &ReportConfig::default()).unwrap();
        assert!(out.contains("\x1b[33m~1\x1b[0m"));
    }
}
