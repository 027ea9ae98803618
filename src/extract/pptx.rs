//! Slide deck (`.pptx`) extraction.
//!
//! Slides are keyed by their 1-based position in the presentation's slide
//! list. Text comes from every shape text body, including shapes nested in
//! groups; tables and charts (graphic frames) are skipped.

use super::archive::{OoxmlPackage, local_name};
use super::{DocumentExtractor, ExtractError, ExtractOptions};
use crate::model::{DocumentKind, ExtractedDocument, SectionKey, SectionedLines};
use crate::text::split_into_lines;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

static SLIDE_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("static regex"));

/// Extractor for `.pptx` files: lines keyed by slide number.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxExtractor;

impl PptxExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PptxExtractor {
    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument, ExtractError> {
        let mut package = OoxmlPackage::open(bytes)?;
        let slide_parts = slide_order(&mut package)?;

        let mut sections = SectionedLines::new();
        for (position, part) in slide_parts.iter().enumerate() {
            let xml = package.read_part(part)?;
            let mut lines: Vec<String> = slide_text_bodies(&xml, part)?
                .iter()
                .flat_map(|body| split_into_lines(body))
                .collect();
            options.retain_lines(&mut lines);

            let key = SectionKey::try_from(position + 1).unwrap_or(SectionKey::MAX);
            sections.insert(key, lines);
        }

        tracing::debug!("Extracted {} slides", sections.len());
        Ok(ExtractedDocument::sectioned(sections))
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Slides
    }
}

/// Slide part names in presentation order.
///
/// Uses the slide id list of `ppt/presentation.xml` resolved through its
/// relationships; falls back to numeric order of `ppt/slides/slideN.xml`
/// when either part is missing or yields nothing.
fn slide_order(package: &mut OoxmlPackage<'_>) -> Result<Vec<String>, ExtractError> {
    if package.has_part(PRESENTATION_PART) && package.has_part(PRESENTATION_RELS) {
        let ids = slide_relationship_ids(&package.read_part(PRESENTATION_PART)?)?;
        let targets = relationship_targets(&package.read_part(PRESENTATION_RELS)?)?;

        let ordered: Vec<String> = ids
            .iter()
            .filter_map(|id| targets.get(id))
            .map(|target| resolve_target(target))
            .filter(|part| package.has_part(part))
            .collect();
        if !ordered.is_empty() {
            return Ok(ordered);
        }
    }

    tracing::debug!("Slide list unavailable, ordering slides by file name");
    let mut numbered: Vec<(u64, String)> = package
        .part_names()
        .into_iter()
        .filter_map(|name| {
            let number = SLIDE_PART.captures(&name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name))
        })
        .collect();
    numbered.sort();
    Ok(numbered.into_iter().map(|(_, name)| name).collect())
}

/// Relationship ids of `p:sldId` entries, in list order.
fn slide_relationship_ids(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e)) if local_name(e.name().as_ref()) == b"sldId" => {
                // `r:id`, not the numeric `id`
                if let Some(id) = attribute(e, |key| key != b"id" && local_name(key) == b"id")? {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(PRESENTATION_PART, &reader, &e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

/// Relationship id to target map.
fn relationship_targets(xml: &str) -> Result<HashMap<String, String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut targets = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e))
                if local_name(e.name().as_ref()) == b"Relationship" =>
            {
                if let (Some(id), Some(target)) = (
                    attribute(e, |key| key == b"Id")?,
                    attribute(e, |key| key == b"Target")?,
                ) {
                    targets.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(PRESENTATION_RELS, &reader, &e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(targets)
}

/// Value of the first attribute whose qualified name is accepted by `key_matches`.
fn attribute(
    element: &BytesStart<'_>,
    key_matches: impl Fn(&[u8]) -> bool,
) -> Result<Option<String>, ExtractError> {
    for attr in element.attributes() {
        let attr = attr?;
        if key_matches(attr.key.as_ref()) {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Resolve a relationship target against the `ppt/` folder.
fn resolve_target(target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut parts: Vec<&str> = vec!["ppt"];
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

/// Text of every shape text body on a slide, paragraphs joined by newlines.
fn slide_text_bodies(xml: &str, part: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut bodies = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut frame_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"graphicFrame" => frame_depth += 1,
                b"txBody" if frame_depth == 0 => current = Some(Vec::new()),
                b"p" => {
                    if let Some(paragraphs) = current.as_mut() {
                        paragraphs.push(String::new());
                    }
                }
                b"t" => in_text = current.is_some(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"br" => push_to_paragraph(&mut current, "\n"),
                b"p" => {
                    if let Some(paragraphs) = current.as_mut() {
                        paragraphs.push(String::new());
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                push_to_paragraph(&mut current, &e.unescape()?);
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"graphicFrame" => frame_depth = frame_depth.saturating_sub(1),
                b"txBody" => {
                    if let Some(paragraphs) = current.take() {
                        let text = paragraphs.join("\n");
                        if !text.trim().is_empty() {
                            bodies.push(text);
                        }
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(part, &reader, &e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(bodies)
}

fn push_to_paragraph(current: &mut Option<Vec<String>>, text: &str) {
    if let Some(paragraph) = current.as_mut().and_then(|p| p.last_mut()) {
        paragraph.push_str(text);
    }
}

fn xml_error(part: &str, reader: &Reader<&[u8]>, err: &quick_xml::Error) -> ExtractError {
    ExtractError::Xml(format!("{part} at position {}: {err}", reader.buffer_position()))
}
