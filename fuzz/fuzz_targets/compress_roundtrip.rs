#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // compress() rejects inputs shorter than 17 bytes outright; nothing to
    // round-trip in that case.
    let compressed = match yaz0::compress(data) {
        Ok(c) => c,
        Err(_) => return,
    };

    let recovered = yaz0::decompress(&compressed).expect("valid encoder output must decode");
    assert_eq!(
        recovered,
        data,
        "round-trip mismatch: compressed {} bytes back to {} bytes (expected {})",
        compressed.len(),
        recovered.len(),
        data.len()
    );
});
