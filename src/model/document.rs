//! Extracted document representation consumed by the comparison engine.

use crate::utils::content_hash;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Grouping key of a line (slide number). Flat documents use [`FLAT_SECTION`].
pub type SectionKey = i64;

/// Section key carried by every line of a flat document.
pub const FLAT_SECTION: SectionKey = 0;

/// Lines grouped by section, in ascending key order.
pub type SectionedLines = BTreeMap<SectionKey, Vec<String>>;

/// Kind of source document, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Slide deck (`.pptx`), one section per slide
    Slides,
    /// Word-processing document (`.docx`)
    WordProcessing,
    /// Plain UTF-8 text (`.txt`)
    PlainText,
}

impl DocumentKind {
    /// Detect the document kind from a path's extension.
    ///
    /// Returns `None` for extensions that are not supported.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::from_extension(&ext)
    }

    /// Detect the document kind from a bare extension (without the dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pptx" => Some(Self::Slides),
            "docx" => Some(Self::WordProcessing),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Whether documents of this kind are grouped into sections.
    #[must_use]
    pub const fn is_sectioned(&self) -> bool {
        matches!(self, Self::Slides)
    }

    /// Human-readable label for one section of this kind.
    #[must_use]
    pub const fn section_label(&self) -> &'static str {
        match self {
            Self::Slides => "Slide",
            Self::WordProcessing | Self::PlainText => "Paragraph",
        }
    }

    /// Canonical file extension.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Slides => "pptx",
            Self::WordProcessing => "docx",
            Self::PlainText => "txt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slides => write!(f, "slide deck"),
            Self::WordProcessing => write!(f, "Word document"),
            Self::PlainText => write!(f, "plain text"),
        }
    }
}

/// Lines of a document, either keyed by section or as one ordered stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "lines", rename_all = "snake_case")]
pub enum DocumentLines {
    /// Lines grouped per section (slides)
    Sectioned(SectionedLines),
    /// A single ordered sequence of lines
    Flat(Vec<String>),
}

impl DocumentLines {
    /// Total number of lines across all sections.
    #[must_use]
    pub fn line_count(&self) -> usize {
        match self {
            Self::Sectioned(sections) => sections.values().map(Vec::len).sum(),
            Self::Flat(lines) => lines.len(),
        }
    }

    /// Number of sections (1 for a non-empty flat document).
    #[must_use]
    pub fn section_count(&self) -> usize {
        match self {
            Self::Sectioned(sections) => sections.len(),
            Self::Flat(lines) => usize::from(!lines.is_empty()),
        }
    }

    #[must_use]
    pub const fn is_sectioned(&self) -> bool {
        matches!(self, Self::Sectioned(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    /// Hash over the shape, section keys and line contents.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut buf = Vec::new();
        match self {
            Self::Sectioned(sections) => {
                buf.push(b'S');
                for (key, lines) in sections {
                    buf.extend_from_slice(&key.to_le_bytes());
                    push_lines(&mut buf, lines);
                }
            }
            Self::Flat(lines) => {
                buf.push(b'F');
                push_lines(&mut buf, lines);
            }
        }
        content_hash(&buf)
    }
}

fn push_lines(buf: &mut Vec<u8>, lines: &[String]) {
    buf.extend_from_slice(&(lines.len() as u64).to_le_bytes());
    for line in lines {
        buf.extend_from_slice(&(line.len() as u64).to_le_bytes());
        buf.extend_from_slice(line.as_bytes());
    }
}

/// A document after extraction, ready to be compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Kind of the source document
    pub kind: DocumentKind,
    /// Extracted lines
    pub lines: DocumentLines,
    /// Path the document was read from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ExtractedDocument {
    #[must_use]
    pub const fn new(kind: DocumentKind, lines: DocumentLines) -> Self {
        Self {
            kind,
            lines,
            source: None,
        }
    }

    /// Build a slide-deck document from per-slide lines.
    #[must_use]
    pub const fn sectioned(lines: SectionedLines) -> Self {
        Self::new(DocumentKind::Slides, DocumentLines::Sectioned(lines))
    }

    /// Build a flat document of the given kind.
    #[must_use]
    pub const fn flat(kind: DocumentKind, lines: Vec<String>) -> Self {
        Self::new(kind, DocumentLines::Flat(lines))
    }

    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Display name: the file name of the source, or the kind.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| self.kind.to_string(), |n| n.to_string_lossy().into_owned())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    #[must_use]
    pub fn content_hash(&self) -> u64 {
        self.lines.content_hash()
    }
}
