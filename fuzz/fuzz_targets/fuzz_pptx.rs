#![no_main]
use doc_compare::extract::{DocumentExtractor, ExtractOptions, PptxExtractor};
use libfuzzer_sys::fuzz_target;

/// Fuzz slide deck extraction from arbitrary archive bytes.
fuzz_target!(|data: &[u8]| {
    let _ = PptxExtractor::new().extract_bytes(data, &ExtractOptions::default());
});
