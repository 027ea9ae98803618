//! Document extraction stage.

use super::PipelineError;
use crate::extract::{ExtractOptions, extract_document};
use crate::model::ExtractedDocument;
use anyhow::Result;
use std::path::Path;

/// Extract a document, attaching the path to any error.
pub fn extract_with_context(
    path: &Path,
    options: &ExtractOptions,
    quiet: bool,
) -> Result<ExtractedDocument> {
    if !quiet {
        tracing::info!("Extracting text: {}", path.display());
    }

    let document =
        extract_document(path, options).map_err(|source| PipelineError::ExtractFailed {
            path: path.display().to_string(),
            source,
        })?;

    if !quiet {
        if document.lines.is_sectioned() {
            tracing::info!(
                "Extracted {} lines from {} {}s",
                document.line_count(),
                document.lines.section_count(),
                document.kind.section_label().to_lowercase()
            );
        } else {
            tracing::info!("Extracted {} lines", document.line_count());
        }
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentKind;

    #[test]
    fn test_extract_text_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "First line.\n\n42\n\nSecond block").unwrap();

        let document = extract_with_context(&path, &ExtractOptions::default(), true).unwrap();
        assert_eq!(document.kind, DocumentKind::PlainText);
        assert_eq!(document.line_count(), 2);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = extract_with_context(Path::new("/nonexistent/deck.pptx"), &ExtractOptions::default(), true)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/deck.pptx"), "{message}");
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::ExtractFailed { .. })
        ));
    }
}
