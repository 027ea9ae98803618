#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz text normalization and line splitting.
///
/// Normalization must be idempotent for any input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = doc_compare::text::normalize(s);
        assert_eq!(doc_compare::text::normalize(&once), once);
        let _ = doc_compare::text::split_into_lines(s);
        let _ = doc_compare::text::is_numeric_noise(s);
    }
});
