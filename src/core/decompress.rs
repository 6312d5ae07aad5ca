//! Yaz0 block decompression — one-shot decoder API.
//!
//! Implements the flag-byte decoder, corresponding to `yaz0_decompress` in
//! `fastyz.c`. Decompression has no tunable parameters and needs no hash
//! table: it is a straight bitstream walk that either runs to completion or
//! fails with a specific [`DecompressError`] the first time the stream
//! claims more than the buffers actually hold.

use super::header::{decompressed_size, is_valid, HEADER_SIZE};

/// Errors returned by [`decompress`] and [`decompress_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// `input` is shorter than the 16-byte header.
    InputTooShort,
    /// `input`'s first four bytes are not `"Yaz0"`.
    BadMagic,
    /// The header declares a decompressed size of zero.
    ZeroDeclaredSize,
    /// `output` is smaller than the size recorded in the header.
    OutputTooSmall,
    /// The flag bitstream ran out of input before `output` was filled.
    TruncatedInput,
    /// A match's back-reference distance reaches before the start of the
    /// output buffer.
    DistanceUnderflow,
    /// A match's length would write past the end of `output`.
    MatchOverflow,
}

/// Decompresses `input` into a freshly allocated `Vec<u8>` sized from the
/// header's recorded decompressed length.
#[must_use]
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if input.len() < HEADER_SIZE {
        return Err(DecompressError::InputTooShort);
    }
    if !is_valid(input) {
        return Err(DecompressError::BadMagic);
    }
    if decompressed_size(input) == 0 {
        return Err(DecompressError::ZeroDeclaredSize);
    }
    let mut out = vec![0u8; decompressed_size(input) as usize];
    let n = decompress_into(input, &mut out)?;
    debug_assert_eq!(n, out.len());
    Ok(out)
}

/// Decompresses `input` into caller-provided `output`. Returns the number of
/// bytes written, which always equals the header's recorded decompressed
/// size on success.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<usize, DecompressError> {
    if input.len() < HEADER_SIZE {
        return Err(DecompressError::InputTooShort);
    }
    if !is_valid(input) {
        return Err(DecompressError::BadMagic);
    }
    if decompressed_size(input) == 0 {
        return Err(DecompressError::ZeroDeclaredSize);
    }

    let out_len = decompressed_size(input) as usize;
    if output.len() < out_len {
        return Err(DecompressError::OutputTooSmall);
    }

    let mut src = HEADER_SIZE;
    let mut dst = 0usize;
    let mut flag: u8 = 0;
    let mut bits_remaining: u32 = 0;

    while dst < out_len {
        if bits_remaining == 0 {
            if src >= input.len() {
                return Err(DecompressError::TruncatedInput);
            }
            flag = input[src];
            src += 1;
            bits_remaining = 8;
        }

        if flag & 0x80 != 0 {
            if src >= input.len() || dst >= out_len {
                return Err(DecompressError::TruncatedInput);
            }
            output[dst] = input[src];
            src += 1;
            dst += 1;
        } else {
            if src + 2 > input.len() {
                return Err(DecompressError::TruncatedInput);
            }
            let byte1 = input[src];
            let byte2 = input[src + 1];
            src += 2;

            let distance = ((u32::from(byte1 & 0x0F) << 8) | u32::from(byte2)) + 1;

            let mut len = u32::from(byte1 >> 4);
            if len == 0 {
                if src >= input.len() {
                    return Err(DecompressError::TruncatedInput);
                }
                len = u32::from(input[src]) + 18;
                src += 1;
            } else {
                len += 2;
            }

            let distance = distance as usize;
            if dst < distance {
                return Err(DecompressError::DistanceUnderflow);
            }
            let len = len as usize;
            if dst + len > out_len {
                return Err(DecompressError::MatchOverflow);
            }

            // Copied byte-by-byte: source and destination ranges can overlap
            // when `distance < len` (runs of a repeated short pattern), so a
            // bulk `copy_within` would read bytes this same call is still
            // supposed to be writing.
            let mut ref_pos = dst - distance;
            for _ in 0..len {
                output[dst] = output[ref_pos];
                dst += 1;
                ref_pos += 1;
            }
        }

        flag <<= 1;
        bits_remaining -= 1;
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compress;

    #[test]
    fn rejects_too_short_input() {
        assert_eq!(decompress(b"Yaz0"), Err(DecompressError::InputTooShort));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(b"Xaz0");
        assert_eq!(decompress(&buf), Err(DecompressError::BadMagic));
    }

    #[test]
    fn rejects_zero_declared_size() {
        let mut header = [0u8; HEADER_SIZE];
        header[0..4].copy_from_slice(b"Yaz0");
        // bytes 4..8 left at zero: a well-formed magic but no declared payload.
        assert_eq!(
            decompress(&header),
            Err(DecompressError::ZeroDeclaredSize)
        );
        let mut out = [0u8; 4];
        assert_eq!(
            decompress_into(&header, &mut out),
            Err(DecompressError::ZeroDeclaredSize)
        );
    }

    #[test]
    fn rejects_truncated_stream() {
        let mut header = [0u8; HEADER_SIZE];
        header[0..4].copy_from_slice(b"Yaz0");
        header[4..8].copy_from_slice(&16u32.to_be_bytes());
        // No payload bytes at all after the header.
        assert_eq!(
            decompress(&header),
            Err(DecompressError::TruncatedInput)
        );
    }

    #[test]
    fn rejects_undersized_output_buffer() {
        let input = vec![b'q'; 64];
        let compressed = compress(&input).unwrap();
        let mut out = [0u8; 4];
        assert_eq!(
            decompress_into(&compressed, &mut out),
            Err(DecompressError::OutputTooSmall)
        );
    }

    #[test]
    fn overlapping_back_reference_repeats_pattern() {
        // A run of "ab" repeated many times forces distance (2) < length,
        // exercising the byte-by-byte overlap-safe copy.
        let input = b"ab".repeat(40);
        let compressed = compress(&input).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }
}
