//! Extract command handler.
//!
//! Prints the lines a comparison would see for a single document.

use crate::config::{ExtractConfig, ExtractFormat};
use crate::model::{DocumentLines, ExtractedDocument};
use crate::pipeline::{OutputTarget, extract_with_context, write_output};
use anyhow::{Context, Result};
use std::fmt::Write as _;

/// Run the extract command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_extract(config: ExtractConfig, quiet: bool) -> Result<()> {
    let options = config.extraction.options();
    let document = extract_with_context(&config.path, &options, quiet)?;
    let rendered = render_extraction(&document, config.format)?;
    write_output(
        rendered.trim_end(),
        &OutputTarget::from_option(config.file),
        quiet,
    )
}

/// Render extracted lines as plain text or JSON.
///
/// Plain text lists one line per row; slide decks get a heading per slide.
pub fn render_extraction(document: &ExtractedDocument, format: ExtractFormat) -> Result<String> {
    match format {
        ExtractFormat::Json => {
            serde_json::to_string_pretty(document).context("failed to serialize extraction")
        }
        ExtractFormat::Text => {
            let mut out = String::new();
            match &document.lines {
                DocumentLines::Sectioned(sections) => {
                    for (key, lines) in sections {
                        writeln!(out, "=== {} {key} ===", document.kind.section_label())?;
                        for line in lines {
                            writeln!(out, "{line}")?;
                        }
                        writeln!(out)?;
                    }
                }
                DocumentLines::Flat(lines) => {
                    for line in lines {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            Ok(out)
        }
    }
}
