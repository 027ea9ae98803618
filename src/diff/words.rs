//! Word-level alignment within a changed segment.
//!
//! Two modes are supported. [`WordDiffMode::Positional`] pairs words by
//! index and is what the terminal view uses; [`WordDiffMode::Aligned`] runs
//! an edit script over the two word sequences and only flags the words that
//! actually fall into a changed run, which is what exported reports use.

use super::opcodes::opcodes;
use super::DiffAlgorithm;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How words of one side are matched against the other side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WordDiffMode {
    /// Index-by-index comparison; trailing extra words always differ
    Positional,
    /// Edit-script alignment; only inserted or replaced words differ
    #[default]
    Aligned,
}

/// One word of a segment and whether it differs from the other side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordDiffPair {
    pub word: String,
    pub differs: bool,
}

impl WordDiffPair {
    #[must_use]
    pub fn new(word: impl Into<String>, differs: bool) -> Self {
        Self {
            word: word.into(),
            differs,
        }
    }

    /// Borrow as a `(word, differs)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, bool) {
        (&self.word, self.differs)
    }
}

/// Annotate every word of `text` with whether it differs from `other`.
///
/// Words are separated by whitespace and compared exactly. An empty `text`
/// yields an empty annotation.
///
/// # Examples
///
/// ```
/// use doc_compare::diff::{word_diff, WordDiffMode};
///
/// let pairs = word_diff("the quick fox jumps", "the fox jumps", WordDiffMode::Aligned);
/// let flagged: Vec<_> = pairs.iter().filter(|p| p.differs).map(|p| p.word.as_str()).collect();
/// assert_eq!(flagged, vec!["quick"]);
/// ```
#[must_use]
pub fn word_diff(text: &str, other: &str, mode: WordDiffMode) -> Vec<WordDiffPair> {
    word_diff_with_algorithm(text, other, mode, DiffAlgorithm::default())
}

/// Like [`word_diff`], choosing the edit-script algorithm for aligned mode.
#[must_use]
pub fn word_diff_with_algorithm(
    text: &str,
    other: &str,
    mode: WordDiffMode,
    algorithm: DiffAlgorithm,
) -> Vec<WordDiffPair> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }
    let other_words: Vec<&str> = other.split_whitespace().collect();

    let differs = match mode {
        WordDiffMode::Positional => positional_flags(&words, &other_words),
        WordDiffMode::Aligned => aligned_flags(&words, &other_words, algorithm),
    };

    words
        .into_iter()
        .zip(differs)
        .map(|(word, differs)| WordDiffPair::new(word, differs))
        .collect()
}

fn positional_flags(words: &[&str], other_words: &[&str]) -> Vec<bool> {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| other_words.get(idx) != Some(word))
        .collect()
}

fn aligned_flags(words: &[&str], other_words: &[&str], algorithm: DiffAlgorithm) -> Vec<bool> {
    let mut differs = vec![false; words.len()];
    // `other` is the base sequence; `text` is the one being annotated.
    for op in opcodes(algorithm, other_words, words) {
        if !op.is_equal() {
            for idx in op.revised {
                differs[idx] = true;
            }
        }
    }
    differs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(pairs: &[WordDiffPair]) -> Vec<&str> {
        pairs
            .iter()
            .filter(|p| p.differs)
            .map(|p| p.word.as_str())
            .collect()
    }

    #[test]
    fn test_positional_substitution() {
        let pairs = word_diff("the quick fox", "the slow fox", WordDiffMode::Positional);
        assert_eq!(
            pairs,
            vec![
                WordDiffPair::new("the", false),
                WordDiffPair::new("quick", true),
                WordDiffPair::new("fox", false),
            ]
        );
    }

    #[test]
    fn test_positional_trailing_words_differ() {
        let pairs = word_diff("the quick fox jumps", "the fox jumps", WordDiffMode::Positional);
        assert_eq!(flagged(&pairs), vec!["quick", "fox", "jumps"]);
    }

    #[test]
    fn test_positional_shorter_text() {
        // Only words of `text` are annotated, even when `other` is longer.
        let pairs = word_diff("the fox", "the fox jumps high", WordDiffMode::Positional);
        assert_eq!(pairs.len(), 2);
        assert!(flagged(&pairs).is_empty());
    }

    #[test]
    fn test_aligned_localizes_insertion() {
        let pairs = word_diff("the quick fox jumps", "the fox jumps", WordDiffMode::Aligned);
        assert_eq!(flagged(&pairs), vec!["quick"]);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_aligned_deletion_flags_nothing_on_shorter_side() {
        let pairs = word_diff("the fox jumps", "the quick fox jumps", WordDiffMode::Aligned);
        assert!(flagged(&pairs).is_empty());
    }

    #[test]
    fn test_aligned_substitution() {
        let pairs = word_diff("Hello there", "Hello world", WordDiffMode::Aligned);
        assert_eq!(flagged(&pairs), vec!["there"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(word_diff("", "anything", WordDiffMode::Aligned).is_empty());
        assert!(word_diff("   ", "anything", WordDiffMode::Positional).is_empty());
    }

    #[test]
    fn test_empty_other_flags_everything() {
        for mode in [WordDiffMode::Positional, WordDiffMode::Aligned] {
            let pairs = word_diff("brand new line", "", mode);
            assert!(pairs.iter().all(|p| p.differs), "mode {mode:?}");
        }
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        let pairs = word_diff("a\tb\nc", "a b c", WordDiffMode::Positional);
        assert_eq!(pairs.len(), 3);
        assert!(flagged(&pairs).is_empty());
        assert_eq!(pairs[1].as_tuple(), ("b", false));
    }
}
