//! HTML report generator.

use super::escape::escape_html;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, annotate, visible_diffs};
use crate::diff::{ChangeKind, CompareResult, LineDiff, MatchStrategy, WordDiffPair};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Leave styling to an external stylesheet
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    const fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container { max-width: 1200px; margin: 0 auto; }
            h1, h2, h3 { color: var(--accent-color); }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title { font-size: 0.9em; color: #a6adc8; margin-bottom: 10px; }
            .card-value { font-size: 2em; font-weight: bold; }
            .card-value.added { color: var(--success-color); }
            .card-value.removed { color: var(--error-color); }
            .card-value.modified { color: var(--warning-color); }

            table {
                width: 100%;
                table-layout: fixed;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
            }

            th, td {
                padding: 12px 15px;
                text-align: left;
                vertical-align: top;
                border-bottom: 1px solid var(--border-color);
                overflow-wrap: anywhere;
            }

            th { background-color: #45475a; font-weight: 600; }
            th.kind, td.kind { width: 110px; }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 500;
            }

            .badge-added { background-color: rgba(166, 227, 161, 0.2); color: var(--success-color); }
            .badge-removed { background-color: rgba(243, 139, 168, 0.2); color: var(--error-color); }
            .badge-modified { background-color: rgba(249, 226, 175, 0.2); color: var(--warning-color); }

            td.original mark { background-color: rgba(243, 139, 168, 0.35); color: inherit; font-weight: bold; }
            td.revised mark { background-color: rgba(166, 227, 161, 0.35); color: inherit; font-weight: bold; }
            .empty { color: #6c7086; font-style: italic; }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }

    fn write_card(html: &mut String, title: &str, class: &str, value: String) -> std::fmt::Result {
        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">{title}</div>")?;
        writeln!(html, "        <div class=\"card-value {class}\">{value}</div>")?;
        writeln!(html, "    </div>")
    }

    fn write_table(
        &self,
        html: &mut String,
        diffs: &[LineDiff],
        config: &ReportConfig,
    ) -> std::fmt::Result {
        writeln!(html, "    <table>")?;
        writeln!(
            html,
            "        <thead><tr><th class=\"kind\">Change</th><th>Original</th><th>Revised</th></tr></thead>"
        )?;
        writeln!(html, "        <tbody>")?;
        for diff in diffs {
            let (original_words, revised_words) = annotate(diff, config, ReportFormat::Html);
            let (badge, label) = match diff.kind() {
                ChangeKind::Modified => ("badge-modified", "Modified"),
                ChangeKind::Added => ("badge-added", "Added"),
                ChangeKind::Removed => ("badge-removed", "Removed"),
            };
            writeln!(html, "            <tr>")?;
            writeln!(
                html,
                "                <td class=\"kind\"><span class=\"badge {badge}\">{label}</span></td>"
            )?;
            writeln!(
                html,
                "                <td class=\"original\">{}</td>",
                render_words(&original_words)
            )?;
            writeln!(
                html,
                "                <td class=\"revised\">{}</td>",
                render_words(&revised_words)
            )?;
            writeln!(html, "            </tr>")?;
        }
        writeln!(html, "        </tbody>")?;
        writeln!(html, "    </table>")
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escaped words joined by spaces, differing ones wrapped in `<mark>`.
fn render_words(words: &[WordDiffPair]) -> String {
    if words.is_empty() {
        return "<span class=\"empty\">(empty)</span>".to_string();
    }
    words
        .iter()
        .map(|pair| {
            let word = escape_html(&pair.word);
            if pair.differs {
                format!("<mark>{word}</mark>")
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = escape_html(config.title_or_default());
        let summary = &result.summary;

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{title}</title>")?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{title}</h1>")?;
        writeln!(
            html,
            "    <p><strong>Original:</strong> {} &rarr; <strong>Revised:</strong> {}</p>",
            escape_html(config.metadata.original_name()),
            escape_html(config.metadata.revised_name())
        )?;
        writeln!(html, "</div>")?;

        writeln!(html, "<div class=\"summary-cards\">")?;
        Self::write_card(&mut html, "Modified", "modified", format!("~{}", summary.modified))?;
        Self::write_card(&mut html, "Added", "added", format!("+{}", summary.added))?;
        Self::write_card(&mut html, "Removed", "removed", format!("-{}", summary.removed))?;
        if result.strategy == MatchStrategy::Sectioned {
            let label = config
                .metadata
                .document_kind
                .map_or("Section", |k| k.section_label());
            Self::write_card(
                &mut html,
                &format!("{label}s Affected"),
                "",
                summary.sections_affected.to_string(),
            )?;
        }
        writeln!(html, "</div>")?;

        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Changes</h2>")?;
        let shown = visible_diffs(result, config);
        if shown.is_empty() {
            writeln!(html, "    <p class=\"empty\">No differences found.</p>")?;
        } else if result.strategy == MatchStrategy::Sectioned {
            for group in shown.chunk_by(|a, b| a.section_key == b.section_key) {
                writeln!(
                    html,
                    "    <h3>{}</h3>",
                    escape_html(&config.section_heading(group[0].section_key))
                )?;
                self.write_table(&mut html, group, config)?;
            }
        } else {
            self.write_table(&mut html, shown, config)?;
        }
        if shown.len() < result.diffs.len() {
            writeln!(
                html,
                "    <p class=\"empty\">{} more changes not shown.</p>",
                result.diffs.len() - shown.len()
            )?;
        }
        writeln!(html, "</div>")?;

        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "    <p>Generated by doc-compare v{} on {}</p>",
            escape_html(&config.metadata.tool_version),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentKind;

    #[test]
    fn test_render_words_escapes_and_marks() {
        let words = vec![
            WordDiffPair::new("<b>", true),
            WordDiffPair::new("&", false),
        ];
        assert_eq!(render_words(&words), "<mark>&lt;b&gt;</mark> &amp;");
        assert!(render_words(&[]).contains("(empty)"));
    }

    #[test]
    fn test_html_report() {
        let result = CompareResult::from_diffs(
            MatchStrategy::Sectioned,
            vec![
                LineDiff::new(2, "the quick fox", "the slow fox"),
                LineDiff::new(5, "<script>alert(1)</script>", ""),
            ],
        );
        let mut config = ReportConfig::default();
        config.metadata.document_kind = Some(DocumentKind::Slides);

        let html = HtmlReporter::new().generate(&result, &config).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>Slide 2</h3>"));
        assert!(html.contains("<h3>Slide 5</h3>"));
        assert!(html.contains("the <mark>quick</mark> fox"));
        assert!(html.contains("the <mark>slow</mark> fox"));
        assert!(html.contains("Slides Affected"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_without_styles() {
        let html = HtmlReporter::new()
            .without_styles()
            .generate(&CompareResult::new(MatchStrategy::Sequential), &ReportConfig::default())
            .unwrap();
        assert!(!html.contains("<style>"));
        assert!(html.contains("No differences found."));
    }
}
