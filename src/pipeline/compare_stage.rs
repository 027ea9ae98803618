//! Comparison stage.
//!
//! Builds the engine from configuration and runs it over two extracted documents.

use super::PipelineError;
use crate::config::CompareConfig;
use crate::diff::CompareResult;
use crate::model::ExtractedDocument;
use anyhow::Result;
use std::path::Path;

/// Reject input pairs with different extensions before any extraction work.
///
/// Mixed inputs are let through when `allow_mixed` is set; the engine then
/// still refuses documents whose shapes differ.
pub fn check_compatible_inputs(
    original: &Path,
    revised: &Path,
    allow_mixed: bool,
) -> Result<(), PipelineError> {
    if allow_mixed {
        return Ok(());
    }
    let extension = |path: &Path| {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    };
    if extension(original) == extension(revised) {
        Ok(())
    } else {
        Err(PipelineError::IncompatibleInputs {
            original: original.display().to_string(),
            revised: revised.display().to_string(),
        })
    }
}

/// Run the comparison engine between two extracted documents.
pub fn compute_comparison(
    config: &CompareConfig,
    original: &ExtractedDocument,
    revised: &ExtractedDocument,
) -> Result<CompareResult> {
    let quiet = config.behavior.quiet;
    let engine = config.comparison.engine();

    if !quiet {
        tracing::info!("Comparing {} documents...", original.kind);
    }

    let result = engine
        .compare(original, revised)
        .map_err(|source| PipelineError::CompareFailed { source })?;

    if !quiet {
        let summary = &result.summary;
        tracing::info!(
            "Matching: {} ({} changed segments: {} modified, {} added, {} removed)",
            result.strategy,
            summary.total_changes,
            summary.modified,
            summary.added,
            summary.removed
        );
    }

    Ok(result)
}
