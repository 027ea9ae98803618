//! Read-only access to the parts of an Office Open XML package.

use super::ExtractError;
use std::io::{Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipError;

/// An opened `.pptx`/`.docx` package.
pub(crate) struct OoxmlPackage<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> OoxmlPackage<'a> {
    pub(crate) fn open(bytes: &'a [u8]) -> Result<Self, ExtractError> {
        let archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| match e {
            ZipError::Io(io) => ExtractError::CorruptArchive(io.to_string()),
            other => ExtractError::CorruptArchive(other.to_string()),
        })?;
        Ok(Self { archive })
    }

    pub(crate) fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Names of all parts, in archive order.
    pub(crate) fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Read a part as UTF-8 text.
    pub(crate) fn read_part(&mut self, name: &str) -> Result<String, ExtractError> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => ExtractError::MissingPart(name.to_string()),
            other => ExtractError::CorruptArchive(format!("{name}: {other}")),
        })?;

        let mut bytes = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
        file.read_to_end(&mut bytes)
            .map_err(|e| ExtractError::CorruptArchive(format!("{name}: {e}")))?;
        String::from_utf8(bytes).map_err(|_| ExtractError::InvalidUtf8(name.to_string()))
    }
}

/// Last component of a qualified XML name (`p:txBody` -> `txBody`).
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map_or(name, |idx| &name[idx + 1..])
}
