//! Extractor trait definitions and error types.

use crate::model::{DocumentKind, ExtractedDocument};
use crate::text::is_numeric_noise;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied or file locked: {} (close it in any other application and retry)", .0.display())]
    PermissionDenied(PathBuf),

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt or unreadable archive: {0}")]
    CorruptArchive(String),

    #[error("Archive is missing required part '{0}'")]
    MissingPart(String),

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(String),

    #[error("Unsupported file type: '{0}' (supported: .pptx, .docx, .txt)")]
    UnsupportedExtension(String),

    #[error("Legacy .{extension} files are not supported; convert to .{suggestion} first")]
    LegacyFormat {
        extension: String,
        suggestion: &'static str,
    },

    #[error("File too large: {} is {size} bytes (limit {limit})", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl ExtractError {
    /// Map an IO failure on `path` to the most specific error kind.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Options shared by all extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Drop lines made only of digits and separators (page numbers, counters)
    pub drop_numeric_noise: bool,
    /// Refuse files larger than this many bytes
    pub max_file_size: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            drop_numeric_noise: true,
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }
}

/// 256 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

impl ExtractOptions {
    /// Keep numeric-noise lines.
    #[must_use]
    pub const fn keep_numeric(mut self) -> Self {
        self.drop_numeric_noise = false;
        self
    }

    #[must_use]
    pub const fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Whether an extracted line should be kept.
    #[must_use]
    pub fn keeps(&self, line: &str) -> bool {
        !line.trim().is_empty() && !(self.drop_numeric_noise && is_numeric_noise(line))
    }

    /// Drop blank lines and, if enabled, numeric noise.
    pub fn retain_lines(&self, lines: &mut Vec<String>) {
        lines.retain(|line| self.keeps(line));
    }
}

/// Trait for format-specific document extractors.
///
/// Implementors only need to turn raw file bytes into lines; reading the
/// file and enforcing the size limit is shared.
pub trait DocumentExtractor {
    /// Extract a document from a file path.
    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError> {
        let metadata = std::fs::metadata(path).map_err(|e| ExtractError::from_io(path, e))?;
        if let Some(limit) = options.max_file_size
            && metadata.len() > limit
        {
            return Err(ExtractError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| ExtractError::from_io(path, e))?;
        Ok(self.extract_bytes(&bytes, options)?.with_source(path))
    }

    /// Extract a document from its raw bytes.
    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError>;

    /// Kind of document this extractor produces
    fn kind(&self) -> DocumentKind;
}
