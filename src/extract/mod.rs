//! Document extraction.
//!
//! Turns `.pptx`, `.docx` and `.txt` files into the line lists the
//! comparison engine consumes. Slide decks become lines keyed by slide
//! number; the other kinds become a single ordered list.
//!
//! ```no_run
//! use doc_compare::extract::{extract_document, ExtractOptions};
//! use std::path::Path;
//!
//! let doc = extract_document(Path::new("deck.pptx"), &ExtractOptions::default())?;
//! println!("{} lines in {} slides", doc.line_count(), doc.lines.section_count());
//! # Ok::<(), doc_compare::extract::ExtractError>(())
//! ```

mod archive;
mod docx;
mod pptx;
mod text;
mod traits;

pub use docx::DocxExtractor;
pub use pptx::PptxExtractor;
pub use text::TextExtractor;
pub use traits::{DEFAULT_MAX_FILE_SIZE, DocumentExtractor, ExtractError, ExtractOptions};

use crate::model::{DocumentKind, ExtractedDocument};
use std::path::Path;

/// Extractor for a document kind.
#[must_use]
pub fn extractor_for(kind: DocumentKind) -> Box<dyn DocumentExtractor + Send + Sync> {
    match kind {
        DocumentKind::Slides => Box::new(PptxExtractor::new()),
        DocumentKind::WordProcessing => Box::new(DocxExtractor::new()),
        DocumentKind::PlainText => Box::new(TextExtractor::new()),
    }
}

/// Detect the document kind of a path from its extension.
///
/// Legacy binary Office formats get a dedicated error with a conversion hint.
pub fn detect_kind(path: &Path) -> Result<DocumentKind, ExtractError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some(kind) = DocumentKind::from_extension(&extension) {
        return Ok(kind);
    }
    match extension.as_str() {
        "doc" => Err(ExtractError::LegacyFormat {
            extension,
            suggestion: "docx",
        }),
        "ppt" => Err(ExtractError::LegacyFormat {
            extension,
            suggestion: "pptx",
        }),
        "" => Err(ExtractError::UnsupportedExtension("(none)".to_string())),
        _ => Err(ExtractError::UnsupportedExtension(format!(".{extension}"))),
    }
}

/// Extract a document, choosing the extractor from the file extension.
pub fn extract_document(path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError> {
    let kind = detect_kind(path)?;
    tracing::debug!("Extracting {} as {kind}", path.display());
    extractor_for(kind).extract(path, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind(Path::new("a.pptx")).unwrap(), DocumentKind::Slides);
        assert_eq!(detect_kind(Path::new("a.DOCX")).unwrap(), DocumentKind::WordProcessing);
        assert_eq!(detect_kind(Path::new("a.txt")).unwrap(), DocumentKind::PlainText);
    }

    #[test]
    fn test_detect_legacy_and_unknown() {
        match detect_kind(Path::new("old.doc")) {
            Err(ExtractError::LegacyFormat { suggestion, .. }) => assert_eq!(suggestion, "docx"),
            other => panic!("expected legacy error, got {other:?}"),
        }
        match detect_kind(Path::new("old.PPT")) {
            Err(ExtractError::LegacyFormat { suggestion, .. }) => assert_eq!(suggestion, "pptx"),
            other => panic!("expected legacy error, got {other:?}"),
        }
        assert!(matches!(
            detect_kind(Path::new("book.pdf")),
            Err(ExtractError::UnsupportedExtension(ext)) if ext == ".pdf"
        ));
        assert!(matches!(
            detect_kind(Path::new("README")),
            Err(ExtractError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_extractor_kinds() {
        for kind in [DocumentKind::Slides, DocumentKind::WordProcessing, DocumentKind::PlainText] {
            assert_eq!(extractor_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = extract_document(Path::new("/nonexistent/deck.pptx"), &ExtractOptions::default())
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }
}
