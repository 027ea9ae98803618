//! Whitespace and Unicode normalization.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("static regex"));
static WS_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\n").expect("static regex"));
static WS_AFTER_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("static regex"));
static DECIMAL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+$").expect("static regex"));

/// Characters removed before deciding whether a line is a bare counter.
const NOISE_PUNCTUATION: &[char] = &['.', ',', ':', ';', '(', ')', '[', ']', '-'];

/// Normalize a piece of text for comparison.
///
/// Applies NFC composition, turns non-breaking spaces into plain spaces,
/// collapses runs of spaces/tabs, strips whitespace around newlines and trims
/// the result. The function is idempotent.
///
/// # Examples
///
/// ```
/// use doc_compare::text::normalize;
///
/// assert_eq!(normalize("  Hello\u{00A0}\t world  \n  next "), "Hello world\nnext");
/// assert_eq!(normalize(&normalize(" a  b ")), normalize(" a  b "));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let composed = composed.replace('\u{00A0}', " ");
    let collapsed = HORIZONTAL_WS.replace_all(&composed, " ");
    let collapsed = WS_BEFORE_NEWLINE.replace_all(&collapsed, "\n");
    let collapsed = WS_AFTER_NEWLINE.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}

/// Check whether a line is only a page number or counter.
///
/// The line qualifies when, once whitespace and the punctuation
/// `. , : ; ( ) [ ] -` are removed, something is left and it consists of
/// decimal digits (Unicode `Nd`) only.
///
/// # Examples
///
/// ```
/// use doc_compare::text::is_numeric_noise;
///
/// assert!(is_numeric_noise("- 4 -"));
/// assert!(!is_numeric_noise("Slide 1"));
/// ```
#[must_use]
pub fn is_numeric_noise(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !NOISE_PUNCTUATION.contains(c))
        .collect();

    DECIMAL_DIGITS.is_match(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_horizontal_whitespace() {
        assert_eq!(normalize("a  \t b"), "a b");
        assert_eq!(normalize("\t\tindented"), "indented");
    }

    #[test]
    fn test_normalize_non_breaking_space() {
        assert_eq!(normalize("10\u{00A0}%"), "10 %");
        assert_eq!(normalize("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_normalize_whitespace_around_newlines() {
        assert_eq!(normalize("first   \n   second"), "first\nsecond");
        assert_eq!(normalize("a\r\nb"), "a\nb");
        assert_eq!(normalize("a\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_composes_unicode() {
        // "e" + combining acute accent
        assert_eq!(normalize("caf\u{0065}\u{0301}"), "caf\u{00E9}");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n \u{00A0} "), "");
    }

    #[test]
    fn test_normalize_idempotent_samples() {
        let samples = [
            "",
            "   ",
            "\n\t\u{00A0}\n",
            "Hello   world",
            " x \n \n y ",
            "a\u{2003}\nb",
            "caf\u{0065}\u{0301}  au lait",
            "\u{3000}全角\u{3000}スペース",
            "line\u{000B}tab\u{000C}feed",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_numeric_noise_positive() {
        assert!(is_numeric_noise("12"));
        assert!(is_numeric_noise("(3)"));
        assert!(is_numeric_noise("- 4 -"));
        assert!(is_numeric_noise("[1.2]"));
        assert!(is_numeric_noise(" 7 "));
    }

    #[test]
    fn test_numeric_noise_negative() {
        assert!(!is_numeric_noise(""));
        assert!(!is_numeric_noise("   "));
        assert!(!is_numeric_noise("12a"));
        assert!(!is_numeric_noise("Slide 1"));
        assert!(!is_numeric_noise("()"));
        assert!(!is_numeric_noise("- -"));
        // Numeric but not decimal digits
        assert!(!is_numeric_noise("½"));
        assert!(!is_numeric_noise("Ⅻ"));
        assert!(!is_numeric_noise("(Ⅳ)"));
    }

    #[test]
    fn test_numeric_noise_non_ascii_decimal_digits() {
        assert!(is_numeric_noise("٣"));
        assert!(is_numeric_noise("- ١٢ -"));
    }
}
