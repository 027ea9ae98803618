//! Order-independent matching within each section.
//!
//! Used for slide decks, where text boxes have no stable order on a slide
//! but their content identity matters. Inside one section a line is matched
//! by exact normalized content wherever it sits; only what is left over on
//! either side is reported.

use super::traits::LineMatcher;
use super::{LineDiff, ParallelConfig};
use crate::model::{SectionKey, SectionedLines};
use crate::text::normalize;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Section-keyed matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionMatcher {
    parallel: ParallelConfig,
}

impl SectionMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure per-section parallelism.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compare two section-keyed line maps.
    ///
    /// Sections are visited in ascending key order over the union of both
    /// key sets; a key missing on one side is treated as an empty section.
    #[must_use]
    pub fn compare_sections<S>(
        &self,
        original: &BTreeMap<SectionKey, Vec<S>>,
        revised: &BTreeMap<SectionKey, Vec<S>>,
    ) -> Vec<LineDiff>
    where
        S: AsRef<str> + Sync,
    {
        let keys: Vec<SectionKey> = original
            .keys()
            .chain(revised.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if self.parallel.should_parallelize(keys.len()) {
            tracing::debug!("Matching {} sections in parallel", keys.len());
            keys.par_iter()
                .map(|&key| diff_section(key, lines_of(original, key), lines_of(revised, key)))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            keys.iter()
                .flat_map(|&key| diff_section(key, lines_of(original, key), lines_of(revised, key)))
                .collect()
        }
    }
}

impl LineMatcher for SectionMatcher {
    type Lines = SectionedLines;

    fn compare(&self, original: &SectionedLines, revised: &SectionedLines) -> Vec<LineDiff> {
        self.compare_sections(original, revised)
    }

    fn name(&self) -> &'static str {
        "section-keyed"
    }
}

/// Compare two section-keyed line maps with the default matcher.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use doc_compare::diff::compare_sections;
///
/// let original = BTreeMap::from([(1, vec!["Hello", "World"])]);
/// let revised = BTreeMap::from([(1, vec!["World", "Hello"])]);
/// assert!(compare_sections(&original, &revised).is_empty());
/// ```
#[must_use]
pub fn compare_sections<S>(
    original: &BTreeMap<SectionKey, Vec<S>>,
    revised: &BTreeMap<SectionKey, Vec<S>>,
) -> Vec<LineDiff>
where
    S: AsRef<str> + Sync,
{
    SectionMatcher::new().compare_sections(original, revised)
}

/// Lines of one section; a missing key reads as an empty section.
fn lines_of<S>(map: &BTreeMap<SectionKey, Vec<S>>, key: SectionKey) -> &[S] {
    map.get(&key).map_or(&[][..], Vec::as_slice)
}

/// Diff one section: greedy content matching, then positional pairing of
/// the leftovers.
fn diff_section<S: AsRef<str>>(key: SectionKey, original: &[S], revised: &[S]) -> Vec<LineDiff> {
    let original_norms: Vec<String> = original.iter().map(|l| normalize(l.as_ref())).collect();
    let revised_norms: Vec<String> = revised.iter().map(|l| normalize(l.as_ref())).collect();

    // Normalized content -> revised indices still available, leftmost first.
    let mut available: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (idx, norm) in revised_norms.iter().enumerate() {
        available.entry(norm.as_str()).or_default().push_back(idx);
    }

    let mut original_matched = vec![false; original.len()];
    let mut revised_matched = vec![false; revised.len()];
    for (idx, norm) in original_norms.iter().enumerate() {
        if let Some(candidates) = available.get_mut(norm.as_str())
            && let Some(revised_idx) = candidates.pop_front()
        {
            original_matched[idx] = true;
            revised_matched[revised_idx] = true;
        }
    }

    let leftover_original: Vec<usize> = (0..original.len()).filter(|&i| !original_matched[i]).collect();
    let leftover_revised: Vec<usize> = (0..revised.len()).filter(|&j| !revised_matched[j]).collect();

    let pairs = leftover_original.len().max(leftover_revised.len());
    let mut diffs = Vec::new();
    for k in 0..pairs {
        let (orig_text, orig_norm) = leftover_original
            .get(k)
            .map_or(("", ""), |&i| (original[i].as_ref(), original_norms[i].as_str()));
        let (rev_text, rev_norm) = leftover_revised
            .get(k)
            .map_or(("", ""), |&j| (revised[j].as_ref(), revised_norms[j].as_str()));

        if orig_norm != rev_norm {
            diffs.push(LineDiff::new(key, orig_text, rev_text));
        }
    }

    diffs.retain(|d| !d.is_blank());
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(key: SectionKey, lines: &[&'static str]) -> BTreeMap<SectionKey, Vec<&'static str>> {
        BTreeMap::from([(key, lines.to_vec())])
    }

    #[test]
    fn test_reorder_within_section_is_not_a_change() {
        let original = section(1, &["Hello", "World"]);
        let revised = section(1, &["World", "Hello"]);
        assert!(compare_sections(&original, &revised).is_empty());
    }

    #[test]
    fn test_content_change() {
        let original = section(1, &["Hello world"]);
        let revised = section(1, &["Hello there"]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(1, "Hello world", "Hello there")]
        );
    }

    #[test]
    fn test_whitespace_only_difference_is_ignored() {
        let original = section(2, &["Hello   world", "Title"]);
        let revised = section(2, &["Title", "Hello\u{00A0}world "]);
        assert!(compare_sections(&original, &revised).is_empty());
    }

    #[test]
    fn test_leftovers_are_paired_in_order() {
        let original = section(1, &["same", "old one", "old two"]);
        let revised = section(1, &["new one", "same"]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![
                LineDiff::new(1, "old one", "new one"),
                LineDiff::new(1, "old two", ""),
            ]
        );
    }

    #[test]
    fn test_duplicates_use_leftmost_available_match() {
        let original = section(1, &["dup", "dup", "dup"]);
        let revised = section(1, &["dup", "other", "dup"]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(1, "dup", "other")]
        );
    }

    #[test]
    fn test_section_only_on_one_side() {
        let mut original = section(1, &["kept"]);
        original.insert(2, vec!["gone"]);
        let mut revised = section(1, &["kept"]);
        revised.insert(3, vec!["fresh"]);

        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(2, "gone", ""), LineDiff::new(3, "", "fresh")]
        );
    }

    #[test]
    fn test_keys_processed_in_ascending_order() {
        let original = BTreeMap::from([(5, vec!["e"]), (-1, vec!["n"]), (2, vec!["b"])]);
        let revised = BTreeMap::from([(5, vec!["E"]), (-1, vec!["N"]), (2, vec!["B"])]);
        let keys: Vec<_> = compare_sections(&original, &revised)
            .into_iter()
            .map(|d| d.section_key)
            .collect();
        assert_eq!(keys, vec![-1, 2, 5]);
    }

    #[test]
    fn test_blank_lines_never_reported() {
        let original = section(1, &["  ", "text"]);
        let revised = section(1, &["text", "\t"]);
        assert!(compare_sections(&original, &revised).is_empty());

        let original = section(1, &[" "]);
        let revised = section(1, &[]);
        assert!(compare_sections(&original, &revised).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let original: BTreeMap<SectionKey, Vec<String>> = (1..=40)
            .map(|k| (k, vec![format!("title {k}"), format!("body {k}"), "shared".to_string()]))
            .collect();
        let revised: BTreeMap<SectionKey, Vec<String>> = (1..=40)
            .map(|k| {
                let body = if k % 3 == 0 { format!("body {k} edited") } else { format!("body {k}") };
                (k, vec!["shared".to_string(), body, format!("title {k}")])
            })
            .collect();

        let sequential = SectionMatcher::new()
            .with_parallel(ParallelConfig::sequential())
            .compare_sections(&original, &revised);
        let parallel = SectionMatcher::new()
            .with_parallel(ParallelConfig { enabled: true, min_sections: 1 })
            .compare_sections(&original, &revised);

        assert_eq!(sequential.len(), 13);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_line_matcher_trait() {
        let matcher = SectionMatcher::new();
        let original: SectionedLines = BTreeMap::from([(1, vec!["a".to_string()])]);
        let revised: SectionedLines = BTreeMap::from([(1, vec!["b".to_string()])]);
        assert_eq!(LineMatcher::compare(&matcher, &original, &revised).len(), 1);
        assert_eq!(matcher.name(), "section-keyed");
    }

    #[test]
    fn test_key_present_on_one_side_only() {
        let original: SectionedLines = BTreeMap::from([(2, vec!["only here".to_string()])]);
        let revised: SectionedLines = BTreeMap::from([(5, vec!["new slide".to_string()])]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(2, "only here", ""), LineDiff::new(5, "", "new slide")]
        );
        assert!(lines_of(&original, 5).is_empty());
        assert_eq!(lines_of(&original, 2).to_vec(), vec!["only here".to_string()]);
    }
}
