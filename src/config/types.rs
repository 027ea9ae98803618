//! Configuration types for doc-compare operations.
//!
//! Provides structured configuration for the compare and extract commands.

use crate::diff::{CompareEngine, DiffAlgorithm, ParallelConfig, WordDiffMode};
use crate::extract::{DEFAULT_MAX_FILE_SIZE, ExtractOptions};
use crate::reports::{ReportConfig, ReportFormat};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Matching engine configuration
    pub comparison: ComparisonConfig,
    /// Document extraction options
    pub extraction: ExtractionConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the line alignment algorithm.
    pub const fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.config.comparison.algorithm = algorithm;
        self
    }

    /// Enable or disable per-section parallelism.
    pub const fn parallel(mut self, enabled: bool) -> Self {
        self.config.comparison.parallel = enabled;
        self
    }

    /// Keep numeric-noise lines during extraction.
    pub const fn keep_numeric(mut self, keep: bool) -> Self {
        self.config.extraction.keep_numeric = keep;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Override the word alignment mode.
    pub const fn word_mode(mut self, mode: Option<WordDiffMode>) -> Self {
        self.config.output.word_mode = mode;
        self
    }

    /// Set the side-by-side width.
    pub const fn width(mut self, width: Option<usize>) -> Self {
        self.config.output.width = width;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Matching engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Line alignment algorithm for flat documents: myers, patience, lcs
    pub algorithm: DiffAlgorithm,
    /// Process slide sections on multiple threads
    pub parallel: bool,
    /// Minimum number of sections before going parallel
    #[schemars(range(min = 1))]
    pub parallel_min_sections: usize,
    /// Allow comparing documents of different kinds (e.g. .docx vs .txt)
    pub allow_mixed_kinds: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        let parallel = ParallelConfig::default();
        Self {
            algorithm: DiffAlgorithm::default(),
            parallel: parallel.enabled,
            parallel_min_sections: parallel.min_sections,
            allow_mixed_kinds: false,
        }
    }
}

impl ComparisonConfig {
    /// Parallelism settings for the section-keyed matcher.
    #[must_use]
    pub const fn parallel_config(&self) -> ParallelConfig {
        if self.parallel {
            ParallelConfig {
                enabled: true,
                min_sections: self.parallel_min_sections,
            }
        } else {
            ParallelConfig::sequential()
        }
    }

    /// Build a comparison engine from these settings.
    #[must_use]
    pub fn engine(&self) -> CompareEngine {
        CompareEngine::new()
            .with_algorithm(self.algorithm)
            .with_parallel(self.parallel_config())
            .allow_mixed_kinds(self.allow_mixed_kinds)
    }
}

/// Document extraction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keep lines made only of digits and separators (page numbers, counters)
    pub keep_numeric: bool,
    /// Refuse input files larger than this many bytes (null for no limit)
    pub max_file_size: Option<u64>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            keep_numeric: false,
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }
}

impl ExtractionConfig {
    /// Extractor options for these settings.
    #[must_use]
    pub fn options(&self) -> ExtractOptions {
        let options = ExtractOptions::default().with_max_file_size(self.max_file_size);
        if self.keep_numeric {
            options.keep_numeric()
        } else {
            options
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Report title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Word alignment mode; unset uses positional for side-by-side, aligned otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_mode: Option<WordDiffMode>,
    /// Side-by-side width in columns (defaults to the terminal width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Maximum number of changes to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes are detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for compare operations
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    /// Matching engine configuration
    pub comparison: ComparisonConfig,
    /// Extraction options
    pub extraction: ExtractionConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl CompareConfig {
    /// Combine input paths with application settings.
    #[must_use]
    pub fn from_app(paths: ComparePaths, app: AppConfig) -> Self {
        Self {
            paths,
            comparison: app.comparison,
            extraction: app.extraction,
            output: app.output,
            behavior: app.behavior,
        }
    }

    /// Report settings derived from the output configuration.
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            title: self.output.title.clone(),
            word_mode: self.output.word_mode,
            algorithm: self.comparison.algorithm,
            max_items: self.output.max_items,
            ..ReportConfig::default()
        }
    }
}

/// Paths for compare operation
#[derive(Debug, Clone)]
pub struct ComparePaths {
    /// Path to the original document
    pub original: PathBuf,
    /// Path to the revised document
    pub revised: PathBuf,
}

/// Output format for the extract command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractFormat {
    /// One line per row, slide headings for slide decks
    #[default]
    Text,
    /// Structured JSON
    Json,
}

/// Configuration for extract operations
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Document to extract
    pub path: PathBuf,
    /// Output format
    pub format: ExtractFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Extraction options
    pub extraction: ExtractionConfig,
}
