#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz both line matchers and the word aligner.
///
/// The input is split at the first NUL byte into an original and a revised
/// text; lines become slides by their first character.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (original, revised) = s.split_once('\0').unwrap_or((s, ""));
    let a: Vec<&str> = original.lines().collect();
    let b: Vec<&str> = revised.lines().collect();

    for diff in doc_compare::compare_sequential(&a, &b) {
        assert!(!diff.is_blank());
        let _ = doc_compare::word_diff(&diff.revised, &diff.original, doc_compare::WordDiffMode::Aligned);
    }

    let deck = |lines: &[&str]| {
        let mut map = std::collections::BTreeMap::<i64, Vec<&str>>::new();
        for line in lines {
            let key = line.bytes().next().map_or(0, |b| i64::from(b % 8));
            map.entry(key).or_default().push(*line);
        }
        map
    };
    for diff in doc_compare::compare_sections(&deck(&a), &deck(&b)) {
        assert!(!diff.is_blank());
    }
});
