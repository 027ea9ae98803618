//! Document representation shared by extraction, comparison and reports.
//!
//! Slide decks are carried as lines keyed by slide number; prose documents
//! as one ordered list of lines.

mod document;

pub use document::{
    DocumentKind, DocumentLines, ExtractedDocument, FLAT_SECTION, SectionKey, SectionedLines,
};
