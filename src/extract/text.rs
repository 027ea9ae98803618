//! Plain-text extraction.

use super::{DocumentExtractor, ExtractError, ExtractOptions};
use crate::model::{DocumentKind, ExtractedDocument};
use crate::text::split_into_lines;

/// Extractor for UTF-8 `.txt` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split text content into comparable lines.
    ///
    /// Blocks are separated by blank lines; each block is broken into
    /// sentences and on remaining newlines.
    #[must_use]
    pub fn lines_from_str(&self, content: &str, options: &ExtractOptions) -> Vec<String> {
        let content = content.replace("\r\n", "\n");
        let mut lines: Vec<String> = content.split("\n\n").flat_map(split_into_lines).collect();
        options.retain_lines(&mut lines);
        lines
    }
}

impl DocumentExtractor for TextExtractor {
    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| ExtractError::InvalidUtf8(format!("text content at byte {}", e.valid_up_to())))?;
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        Ok(ExtractedDocument::flat(
            DocumentKind::PlainText,
            self.lines_from_str(content, options),
        ))
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::PlainText
    }
}
