#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the decoder. Err results are expected and
    // fine; what we verify is no panic, no out-of-bounds write.

    let _ = yaz0::decompress(data);

    // Also exercise decompress_into with a handful of undersized and
    // exactly-sized output buffers to stress the bounds checks directly.
    let declared = yaz0::decompressed_size(data) as usize;
    for len in [0usize, declared / 2, declared] {
        let mut out = vec![0u8; len];
        let _ = yaz0::decompress_into(data, &mut out);
    }
});
