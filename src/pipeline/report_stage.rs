//! Report output stage.

use super::{OutputTarget, PipelineError, auto_detect_format, should_use_color, write_output};
use crate::config::CompareConfig;
use crate::diff::CompareResult;
use crate::model::ExtractedDocument;
use crate::reports::{ReportConfig, create_reporter_with_options};
use anyhow::Result;

/// Report settings with the compared documents recorded in the metadata.
#[must_use]
pub fn build_report_config(
    config: &CompareConfig,
    original: &ExtractedDocument,
    revised: &ExtractedDocument,
) -> ReportConfig {
    let mut report_config = config.report_config();
    report_config.metadata.original_path = Some(config.paths.original.display().to_string());
    report_config.metadata.revised_path = Some(config.paths.revised.display().to_string());
    // Mixed comparisons have no single kind to label sections with
    report_config.metadata.document_kind = (original.kind == revised.kind).then_some(original.kind);
    report_config
}

/// Render a comparison report and write it to the configured destination.
///
/// Handles format auto-detection and color selection. Color is only used
/// for terminal formats written to a terminal.
pub fn output_report(
    config: &CompareConfig,
    result: &CompareResult,
    original: &ExtractedDocument,
    revised: &ExtractedDocument,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let report_config = build_report_config(config, original, revised);

    let use_color = effective_output.is_terminal_format()
        && output_target.is_terminal()
        && should_use_color(config.output.no_color);
    tracing::debug!("Rendering {effective_output} report (color: {use_color})");

    let reporter = create_reporter_with_options(effective_output, use_color, config.output.width);
    let report = reporter
        .generate(result, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &output_target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ComparePaths};
    use crate::diff::{LineDiff, MatchStrategy};
    use crate::model::DocumentKind;
    use crate::reports::ReportFormat;

    fn config(file: Option<std::path::PathBuf>, format: ReportFormat) -> CompareConfig {
        CompareConfig::from_app(
            ComparePaths {
                original: "old.pptx".into(),
                revised: "new.pptx".into(),
            },
            AppConfig::builder().output_format(format).output_file(file).quiet(true).build(),
        )
    }

    fn deck() -> ExtractedDocument {
        ExtractedDocument::sectioned(std::collections::BTreeMap::new())
    }

    #[test]
    fn test_report_metadata() {
        let report_config = build_report_config(&config(None, ReportFormat::Json), &deck(), &deck());
        assert_eq!(report_config.metadata.original_name(), "old.pptx");
        assert_eq!(report_config.metadata.document_kind, Some(DocumentKind::Slides));

        let text = ExtractedDocument::flat(DocumentKind::PlainText, Vec::new());
        let report_config = build_report_config(&config(None, ReportFormat::Json), &deck(), &text);
        assert_eq!(report_config.metadata.document_kind, None);
    }

    #[test]
    fn test_output_report_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.md");
        let result = CompareResult::from_diffs(
            MatchStrategy::Sectioned,
            vec![LineDiff::new(3, "Old title", "New title")],
        );

        output_report(&config(Some(path.clone()), ReportFormat::Markdown), &result, &deck(), &deck())
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("### Slide 3"));
        assert!(written.contains("**Old**"));
    }

    #[test]
    fn test_auto_format_to_file_is_plain_summary() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        let result = CompareResult::from_diffs(MatchStrategy::Sectioned, vec![LineDiff::new(1, "a", "b")]);

        output_report(&config(Some(path.clone()), ReportFormat::Auto), &result, &deck(), &deck()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("~1 segment modified"));
        assert!(!written.contains('\x1b'));
    }
}
