//! Engine integration tests.
//!
//! Exercise the public comparison API end to end on in-memory documents.

use doc_compare::diff::{DiffAlgorithm, ParallelConfig, compare_sequential_with};
use doc_compare::{
    ChangeKind, CompareEngine, DocCompareError, DocumentKind, ExtractedDocument, LineDiff,
    MatchStrategy, WordDiffMode, compare_sections, compare_sequential, is_numeric_noise, normalize,
    word_diff,
};
use std::collections::BTreeMap;

fn strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}

fn sections(entries: &[(i64, &[&str])]) -> BTreeMap<i64, Vec<String>> {
    entries.iter().map(|(k, lines)| (*k, strings(lines))).collect()
}

fn changed_words(text: &str, other: &str, mode: WordDiffMode) -> Vec<String> {
    word_diff(text, other, mode)
        .into_iter()
        .filter(|pair| pair.differs)
        .map(|pair| pair.word)
        .collect()
}

// ============================================================================
// Normalization
// ============================================================================

mod normalization {
    use super::*;

    #[test]
    fn idempotent_on_edge_inputs() {
        for input in ["", "   ", "\t\n \n", "a\u{0007}b", "  x \u{00A0} y  \n  z  "] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize("  Hello \t  world \n  again  "), "Hello world\nagain");
        assert_eq!(normalize("non\u{00A0}breaking"), "non breaking");
    }

    #[test]
    fn numeric_noise_examples() {
        for noise in ["12", "(3)", "- 4 -", "1.2.3", "[7]"] {
            assert!(is_numeric_noise(noise), "{noise:?}");
        }
        for text in ["", "12a", "Slide 1", "--", "   "] {
            assert!(!is_numeric_noise(text), "{text:?}");
        }
    }
}

// ============================================================================
// Section-keyed matching
// ============================================================================

mod section_matching {
    use super::*;

    #[test]
    fn reordered_lines_within_a_slide_match() {
        let original = sections(&[(1, &["A", "B", "C"])]);
        let revised = sections(&[(1, &["C", "A", "B"])]);
        assert!(compare_sections(&original, &revised).is_empty());
    }

    #[test]
    fn changed_line_yields_one_record() {
        let original = sections(&[(1, &["Hello world"])]);
        let revised = sections(&[(1, &["Hello there"])]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(1, "Hello world", "Hello there")]
        );
    }

    #[test]
    fn lines_do_not_match_across_slides() {
        let original = sections(&[(1, &["Moved"]), (2, &[])]);
        let revised = sections(&[(1, &[]), (2, &["Moved"])]);
        let diffs = compare_sections(&original, &revised);
        assert_eq!(
            diffs,
            vec![LineDiff::new(1, "Moved", ""), LineDiff::new(2, "", "Moved")]
        );
    }

    #[test]
    fn leftmost_available_tie_break() {
        // Both "X" lines on the revised side are consumed in order, leaving "Z" to pair with "Y"
        let original = sections(&[(3, &["X", "Y", "X"])]);
        let revised = sections(&[(3, &["X", "X", "Z"])]);
        assert_eq!(
            compare_sections(&original, &revised),
            vec![LineDiff::new(3, "Y", "Z")]
        );
    }

    #[test]
    fn whitespace_only_differences_ignored() {
        let original = sections(&[(1, &["Quarterly   results"])]);
        let revised = sections(&[(1, &["  Quarterly results "])]);
        assert!(compare_sections(&original, &revised).is_empty());
    }

    #[test]
    fn records_ordered_by_section_key() {
        let original = sections(&[(10, &["j"]), (2, &["b"]), (7, &["g"])]);
        let revised = sections(&[(10, &["J"]), (2, &["B"]), (7, &["G"])]);
        let keys: Vec<i64> = compare_sections(&original, &revised)
            .iter()
            .map(|d| d.section_key)
            .collect();
        assert_eq!(keys, vec![2, 7, 10]);
    }
}

// ============================================================================
// Sequential matching
// ============================================================================

mod sequential_matching {
    use super::*;

    #[test]
    fn reordering_is_a_change() {
        let diffs = compare_sequential(&strings(&["A", "B", "C"]), &strings(&["A", "C", "B"]));
        assert!(!diffs.is_empty());
    }

    #[test]
    fn appended_line_is_an_insert() {
        let diffs = compare_sequential(&strings(&["A"]), &strings(&["A", "B"]));
        assert_eq!(diffs, vec![LineDiff::flat("", "B")]);
        assert_eq!(diffs[0].kind(), ChangeKind::Added);
        assert_eq!(diffs[0].section_key, 0);
    }

    #[test]
    fn replace_pairs_lines_and_pads() {
        let diffs = compare_sequential(&strings(&["keep", "x1", "x2"]), &strings(&["keep", "y1"]));
        assert_eq!(diffs, vec![LineDiff::flat("x1", "y1"), LineDiff::flat("x2", "")]);
    }

    #[test]
    fn all_algorithms_agree_on_simple_edit() {
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let diffs = compare_sequential_with(
                algorithm,
                &strings(&["one", "two", "three"]),
                &strings(&["one", "2", "three"]),
            );
            assert_eq!(diffs, vec![LineDiff::flat("two", "2")], "{algorithm}");
        }
    }
}

// ============================================================================
// Word-level alignment
// ============================================================================

mod word_alignment {
    use super::*;

    #[test]
    fn positional_mode() {
        let pairs = word_diff("the quick fox", "the slow fox", WordDiffMode::Positional);
        let flags: Vec<(&str, bool)> = pairs.iter().map(|p| (p.word.as_str(), p.differs)).collect();
        assert_eq!(flags, vec![("the", false), ("quick", true), ("fox", false)]);
    }

    #[test]
    fn aligned_mode_tolerates_shifts() {
        assert_eq!(
            changed_words("the quick fox jumps", "the fox jumps", WordDiffMode::Aligned),
            vec!["quick"]
        );
        // Positional pairing flags every shifted word
        assert_eq!(
            changed_words("the quick fox jumps", "the fox jumps", WordDiffMode::Positional),
            vec!["quick", "fox", "jumps"]
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(word_diff("", "anything", WordDiffMode::Aligned).is_empty());
        assert!(word_diff("   ", "anything", WordDiffMode::Positional).is_empty());
    }
}

// ============================================================================
// Engine
// ============================================================================

mod engine {
    use super::*;

    #[test]
    fn slide_decks_use_section_matching() {
        let original = ExtractedDocument::sectioned(sections(&[(1, &["Title", "Point"]), (2, &["Old"])]));
        let revised = ExtractedDocument::sectioned(sections(&[(1, &["Point", "Title"]), (2, &["New"])]));

        let result = CompareEngine::new().compare(&original, &revised).unwrap();
        assert_eq!(result.strategy, MatchStrategy::Sectioned);
        assert_eq!(result.diffs, vec![LineDiff::new(2, "Old", "New")]);
        assert_eq!(result.summary.sections_affected, 1);
    }

    #[test]
    fn flat_documents_use_sequential_matching() {
        let original = ExtractedDocument::flat(DocumentKind::WordProcessing, strings(&["A", "B"]));
        let revised = ExtractedDocument::flat(DocumentKind::WordProcessing, strings(&["B", "A"]));

        let result = CompareEngine::new().compare(&original, &revised).unwrap();
        assert_eq!(result.strategy, MatchStrategy::Sequential);
        assert!(result.has_changes());
    }

    #[test]
    fn identical_documents_have_no_changes() {
        let doc = ExtractedDocument::flat(DocumentKind::PlainText, strings(&["same", "text"]));
        let result = CompareEngine::new().compare(&doc, &doc.clone()).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn kind_mismatch_is_an_error() {
        let deck = ExtractedDocument::sectioned(BTreeMap::new());
        let text = ExtractedDocument::flat(DocumentKind::PlainText, Vec::new());
        let err = CompareEngine::new().compare(&deck, &text).unwrap_err();
        assert!(matches!(err, DocCompareError::Compare { .. }));
    }

    #[test]
    fn mixed_flat_kinds_allowed_when_enabled() {
        let docx = ExtractedDocument::flat(DocumentKind::WordProcessing, strings(&["A"]));
        let text = ExtractedDocument::flat(DocumentKind::PlainText, strings(&["B"]));
        let result = CompareEngine::new()
            .allow_mixed_kinds(true)
            .compare(&docx, &text)
            .unwrap();
        assert_eq!(result.diffs, vec![LineDiff::flat("A", "B")]);
    }

    #[test]
    fn parallel_setting_does_not_change_output() {
        let original: BTreeMap<i64, Vec<String>> = (1..=64)
            .map(|k| (k, vec![format!("slide {k}"), format!("point {}", k % 5)]))
            .collect();
        let revised: BTreeMap<i64, Vec<String>> = (1..=64)
            .map(|k| (k, vec![format!("point {}", k % 7), format!("slide {k}")]))
            .collect();
        let original = ExtractedDocument::sectioned(original);
        let revised = ExtractedDocument::sectioned(revised);

        let parallel = CompareEngine::new()
            .with_parallel(ParallelConfig { enabled: true, min_sections: 1 })
            .compare(&original, &revised)
            .unwrap();
        let sequential = CompareEngine::new()
            .with_parallel(ParallelConfig::sequential())
            .compare(&original, &revised)
            .unwrap();
        assert_eq!(parallel.diffs, sequential.diffs);
    }
}
