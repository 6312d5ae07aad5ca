//! Decoder robustness against malformed input (`SPEC_FULL.md` §8, property 6).
//!
//! The fuzz crate (`fuzz/fuzz_targets/decompress_arbitrary.rs`) covers the
//! same property against unbounded arbitrary input; these are the specific
//! regression scenarios called out in the specification.

use yaz0::{decompress, decompress_into, DecompressError};

#[test]
fn empty_input_is_too_short() {
    assert_eq!(decompress(b""), Err(DecompressError::InputTooShort));
}

#[test]
fn wrong_magic_is_rejected() {
    let mut header = [0u8; 16];
    header[0..4].copy_from_slice(b"Xaz0");
    header[4..8].copy_from_slice(&4u32.to_be_bytes());
    assert_eq!(decompress(&header), Err(DecompressError::BadMagic));
}

#[test]
fn truncated_magic_is_rejected() {
    assert_eq!(decompress(b"Yaz"), Err(DecompressError::InputTooShort));
}

#[test]
fn zero_declared_size_is_rejected() {
    let mut header = [0u8; 16];
    header[0..4].copy_from_slice(b"Yaz0");
    header[4..8].copy_from_slice(&0u32.to_be_bytes());
    assert_eq!(decompress(&header), Err(DecompressError::ZeroDeclaredSize));
}

#[test]
fn minimal_valid_stream_decodes() {
    // Header declaring 4 decompressed bytes, one flag byte (0xF0: four
    // literals), then the four literal bytes "ABCD".
    let mut stream = Vec::new();
    stream.extend_from_slice(b"Yaz0");
    stream.extend_from_slice(&4u32.to_be_bytes());
    stream.extend_from_slice(&[0u8; 8]);
    stream.push(0xF0);
    stream.extend_from_slice(b"ABCD");

    assert_eq!(decompress(&stream).unwrap(), b"ABCD");
}

#[test]
fn flag_byte_claims_more_literals_than_input_has() {
    let mut stream = Vec::new();
    stream.extend_from_slice(b"Yaz0");
    stream.extend_from_slice(&4u32.to_be_bytes());
    stream.extend_from_slice(&[0u8; 8]);
    stream.push(0xFF); // claims 8 literals
    stream.extend_from_slice(b"AB"); // only 2 bytes follow

    assert_eq!(decompress(&stream), Err(DecompressError::TruncatedInput));
}

#[test]
fn match_distance_reaches_before_output_start() {
    let mut stream = Vec::new();
    stream.extend_from_slice(b"Yaz0");
    stream.extend_from_slice(&4u32.to_be_bytes());
    stream.extend_from_slice(&[0u8; 8]);
    // Flag byte 0x00: first token is a match with nothing yet decoded.
    stream.push(0x00);
    // Short-form match: length nibble 1 (len=3), distance-1 = 0 (distance 1).
    // With dst == 0, distance 1 reaches before the output start.
    stream.push(0x10);
    stream.push(0x00);

    assert_eq!(
        decompress(&stream),
        Err(DecompressError::DistanceUnderflow)
    );
}

#[test]
fn match_length_overruns_declared_output() {
    let mut stream = Vec::new();
    stream.extend_from_slice(b"Yaz0");
    stream.extend_from_slice(&3u32.to_be_bytes()); // declares only 3 bytes
    stream.extend_from_slice(&[0u8; 8]);
    stream.push(0x80); // bit0 = literal, bit1 = match
    stream.push(b'A');
    // Short-form match: length nibble 1 (len=3), distance-1 = 0 (distance 1).
    // dst is 1 after the literal; writing 3 more bytes would reach index 4,
    // past the declared 3-byte output.
    stream.push(0x10);
    stream.push(0x00);

    assert_eq!(decompress(&stream), Err(DecompressError::MatchOverflow));
}

#[test]
fn decompress_into_never_panics_on_undersized_buffer() {
    let mut stream = Vec::new();
    stream.extend_from_slice(b"Yaz0");
    stream.extend_from_slice(&4u32.to_be_bytes());
    stream.extend_from_slice(&[0u8; 8]);
    stream.push(0xF0);
    stream.extend_from_slice(b"ABCD");

    let mut tiny = [0u8; 1];
    assert_eq!(
        decompress_into(&stream, &mut tiny),
        Err(DecompressError::OutputTooSmall)
    );
}

#[test]
fn arbitrary_junk_never_panics() {
    let samples: &[&[u8]] = &[
        b"",
        b"Y",
        b"Yaz",
        b"Yaz0",
        b"Yaz0\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00",
        &[0xFFu8; 64],
        &[0x00u8; 16],
    ];
    for sample in samples {
        let _ = decompress(sample);
    }
}
