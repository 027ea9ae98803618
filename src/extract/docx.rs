//! Word-processing (`.docx`) extraction.
//!
//! Only `word/document.xml` is read, so packages with damaged media or
//! other unreadable parts still yield their text.

use super::archive::{OoxmlPackage, local_name};
use super::{DocumentExtractor, ExtractError, ExtractOptions};
use crate::model::{DocumentKind, ExtractedDocument};
use crate::text::normalize;
use quick_xml::Reader;
use quick_xml::events::Event;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extractor for `.docx` files: one line per paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError> {
        let mut package = OoxmlPackage::open(bytes)?;
        let xml = package.read_part(DOCUMENT_PART)?;

        let mut lines: Vec<String> = document_paragraphs(&xml)?
            .iter()
            .map(|p| normalize(p))
            .collect();
        options.retain_lines(&mut lines);

        tracing::debug!("Extracted {} paragraphs from {DOCUMENT_PART}", lines.len());
        Ok(ExtractedDocument::flat(DocumentKind::WordProcessing, lines))
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::WordProcessing
    }
}

/// Raw paragraph texts of a WordprocessingML body, in document order.
///
/// Text comes from `w:t` runs; `w:tab` becomes a tab and `w:br`/`w:cr` a
/// newline. A paragraph nested in a text box is emitted before the
/// paragraph that anchors it.
pub(crate) fn document_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    // Open paragraphs, innermost last
    let mut open: Vec<String> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => open.push(String::new()),
                b"r" => run_depth += 1,
                b"t" if run_depth > 0 => in_text = true,
                other => push_break(&mut open, other, run_depth),
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => paragraphs.push(String::new()),
                other => push_break(&mut open, other, run_depth),
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e.unescape()?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Xml(format!(
                    "{DOCUMENT_PART} at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_break(open: &mut [String], name: &[u8], run_depth: usize) {
    if run_depth == 0 {
        return;
    }
    let Some(current) = open.last_mut() else {
        return;
    };
    match name {
        b"tab" => current.push('\t'),
        b"br" | b"cr" => current.push('\n'),
        _ => {}
    }
}
