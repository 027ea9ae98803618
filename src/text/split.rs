//! Splitting raw text into comparable lines.

use super::normalize;
use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminator followed by the whitespace that separates it from
/// the next sentence. Only the whitespace is consumed by the split.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("static regex"));

/// Split text into lines on line breaks and sentence-ending punctuation.
///
/// The text is normalized first; each newline-separated block is then cut
/// after every `.`, `?` or `!` that is followed by whitespace. Empty pieces
/// are dropped.
///
/// # Examples
///
/// ```
/// use doc_compare::text::split_into_lines;
///
/// assert_eq!(
///     split_into_lines("First one. Second one?\nThird"),
///     vec!["First one.", "Second one?", "Third"],
/// );
/// ```
#[must_use]
pub fn split_into_lines(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut chunks = Vec::new();

    for block in normalized.split('\n') {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let mut start = 0;
        for m in SENTENCE_BREAK.find_iter(block) {
            // Keep the terminator (always a single ASCII byte) with the sentence.
            push_piece(&mut chunks, &block[start..=m.start()]);
            start = m.end();
        }
        push_piece(&mut chunks, &block[start..]);
    }

    chunks
}

fn push_piece(chunks: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        chunks.push(piece.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_newlines() {
        assert_eq!(split_into_lines("a\nb\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_on_sentences() {
        assert_eq!(
            split_into_lines("It works. Really! Does it? Yes"),
            vec!["It works.", "Really!", "Does it?", "Yes"]
        );
    }

    #[test]
    fn test_no_split_without_whitespace() {
        assert_eq!(split_into_lines("version 1.2.3 is out"), vec!["version 1.2.3 is out"]);
        assert_eq!(split_into_lines("e.g.this"), vec!["e.g.this"]);
    }

    #[test]
    fn test_trailing_terminator() {
        assert_eq!(split_into_lines("Done.   "), vec!["Done."]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_into_lines("").is_empty());
        assert!(split_into_lines(" \n\t \n").is_empty());
    }

    #[test]
    fn test_non_latin_text() {
        assert_eq!(
            split_into_lines("Привет мир. Как дела?"),
            vec!["Привет мир.", "Как дела?"]
        );
    }
}
