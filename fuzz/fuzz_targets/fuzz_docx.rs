#![no_main]
use doc_compare::extract::{DocumentExtractor, DocxExtractor, ExtractOptions};
use libfuzzer_sys::fuzz_target;

/// Fuzz Word document extraction from arbitrary archive bytes.
fuzz_target!(|data: &[u8]| {
    let _ = DocxExtractor::new().extract_bytes(data, &ExtractOptions::default().keep_numeric());
});
