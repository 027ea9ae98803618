//! Pipeline orchestration for document comparisons.
//!
//! This module provides shared orchestration logic for extract → compare → report
//! workflows, keeping the CLI command handlers thin.

mod compare_stage;
mod extract_stage;
mod output;
mod report_stage;

pub use compare_stage::{check_compatible_inputs, compute_comparison};
pub use extract_stage::extract_with_context;
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};
pub use report_stage::{build_report_config, output_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or extract a document
    #[error("Extraction failed for {path}: {source}")]
    ExtractFailed {
        path: String,
        #[source]
        source: crate::extract::ExtractError,
    },

    /// The two inputs cannot be compared with each other
    #[error(
        "Cannot compare {original} with {revised}: both files must have the same extension"
    )]
    IncompatibleInputs { original: String, revised: String },

    /// Comparison failed
    #[error("Comparison failed: {source}")]
    CompareFailed {
        #[source]
        source: crate::error::DocCompareError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or not failing on change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected with `--fail-on-change`
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_incompatible_inputs_message() {
        let err = PipelineError::IncompatibleInputs {
            original: "a.pptx".to_string(),
            revised: "b.docx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot compare a.pptx with b.docx: both files must have the same extension"
        );
    }
}
