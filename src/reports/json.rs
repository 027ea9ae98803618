//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, annotate, visible_diffs};
use crate::diff::{
    ChangeKind, CompareResult, CompareSummary, DiffAlgorithm, MatchStrategy, WordDiffMode,
    WordDiffPair,
};
use crate::model::{DocumentKind, SectionKey};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let report = JsonCompareReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "doc-compare".to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: Utc::now().to_rfc3339(),
                title: config.title.clone(),
                original: config.metadata.original_path.clone(),
                revised: config.metadata.revised_path.clone(),
                document_kind: config.metadata.document_kind,
                strategy: result.strategy,
                word_mode: config.word_mode_for(ReportFormat::Json),
                algorithm: config.algorithm,
            },
            summary: result.summary.clone(),
            changes: visible_diffs(result, config)
                .iter()
                .map(|diff| {
                    let (original_words, revised_words) = annotate(diff, config, ReportFormat::Json);
                    JsonChange {
                        section_key: diff.section_key,
                        kind: diff.kind(),
                        original: diff.original.clone(),
                        revised: diff.revised.clone(),
                        original_words,
                        revised_words,
                    }
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonCompareReport {
    metadata: JsonReportMetadata,
    summary: CompareSummary,
    changes: Vec<JsonChange>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    original: Option<String>,
    revised: Option<String>,
    document_kind: Option<DocumentKind>,
    strategy: MatchStrategy,
    word_mode: WordDiffMode,
    algorithm: DiffAlgorithm,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonChange {
    section_key: SectionKey,
    kind: ChangeKind,
    original: String,
    revised: String,
    original_words: Vec<WordDiffPair>,
    revised_words: Vec<WordDiffPair>,
}
