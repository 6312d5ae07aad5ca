//! Yaz0 block compression — one-shot encoder API.
//!
//! Implements the hash-based LZ77 encoder, corresponding to the following
//! functions in the reference implementation (`fastyz.c`):
//!
//! | Rust function            | C equivalent      |
//! |---------------------------|-------------------|
//! | [`compress_into_with_config`] | `yaz0_compress`   |
//! | [`bound`]                  | `FASTYZ_BOUND`    |
//!
//! The encoder scans the input with a single rolling hash index (no chaining,
//! no dictionary) and greedily takes the first match it finds at each
//! position, the way `fastyz.c`'s main loop does. It never looks back to
//! reconsider an earlier literal once a match has been taken — this crate
//! trades ratio for the single-pass, allocation-light scan speed described
//! in `SPEC_FULL.md` §2.

use super::hash::HashIndex;
use super::header::{write_header, HEADER_SIZE};
use super::primitives::{compare, read_u32};
use super::writer::{FlagWriter, MIN_MATCH};
use super::Config;

/// Maximum back-reference distance: matches beyond this are rejected by the
/// main scan regardless of how well their fingerprint collides.
const MAX_MATCH_DISTANCE: u32 = 1 << 12;

/// Errors returned by [`compress_into`] and [`compress_into_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
    /// `output` is smaller than [`bound`] of the input length.
    OutputTooSmall,
    /// The input is shorter than 17 bytes.
    ///
    /// The scan loop needs at least `SHORT_FORM_MIN - 1` bytes of unconditional
    /// lead-in plus `ip_bound`/`ip_limit` slack to read a 32-bit fingerprint
    /// without going out of bounds; `fastyz.c` left this case as undefined
    /// behavior (a negative-length `ip_limit`), this crate turns it into an
    /// explicit error instead (see `SPEC_FULL.md` §9).
    InputTooShort,
    /// The input exceeds what a `u32` length field and 12-bit distance field
    /// can address (4 GiB).
    InputTooLarge,
}

/// Smallest input length the encoder accepts.
///
/// `ip_limit` in `fastyz.c` is `length - 12 - 1`; for the main loop to ever
/// run at all (and for the final `read_u32` at the match boundary refresh to
/// stay in bounds) the input must be at least this long.
const MIN_INPUT_LEN: usize = 17;

/// Worst-case compressed size for `input_len` bytes of input.
///
/// Equivalent to `FASTYZ_BOUND`: the header, plus every byte emitted as a
/// literal, plus one flag byte per 8 literals, plus one byte of slack for a
/// partially filled final flag group.
#[must_use]
pub fn bound(input_len: usize) -> usize {
    HEADER_SIZE + input_len + (input_len / 8) + 1
}

/// Compresses `input` into a freshly allocated `Vec<u8>`, using
/// [`Config::default`].
#[must_use]
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressError> {
    compress_with_config(input, Config::default())
}

/// Compresses `input` into a freshly allocated `Vec<u8>` with a custom
/// [`Config`].
pub fn compress_with_config(input: &[u8], config: Config) -> Result<Vec<u8>, CompressError> {
    let mut out = vec![0u8; bound(input.len())];
    let n = compress_into_with_config(input, &mut out, config)?;
    out.truncate(n);
    Ok(out)
}

/// Compresses `input` into caller-provided `output`, using
/// [`Config::default`]. Returns the number of bytes written.
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    compress_into_with_config(input, output, Config::default())
}

/// Compresses `input` into caller-provided `output` with a custom
/// [`Config`]. Returns the number of bytes written.
///
/// `output` must be at least [`bound(input.len())`](bound) bytes; inputs
/// shorter than 17 bytes are rejected (`CompressError::InputTooShort`) since
/// the scan loop below assumes that much lead-in and trailing slack exists.
pub fn compress_into_with_config(
    input: &[u8],
    output: &mut [u8],
    config: Config,
) -> Result<usize, CompressError> {
    if input.len() > u32::MAX as usize {
        return Err(CompressError::InputTooLarge);
    }
    if input.len() < MIN_INPUT_LEN {
        return Err(CompressError::InputTooShort);
    }
    if output.len() < bound(input.len()) {
        return Err(CompressError::OutputTooSmall);
    }

    write_header(output, input.len() as u32);
    let mut writer = FlagWriter::new(output, HEADER_SIZE);
    let mut index = HashIndex::new(config.hash_log());

    // `ip_bound`: last position at which a 4-byte fingerprint load is safe.
    let ip_bound = input.len() - 4;
    // `ip_limit`: the scan loop stops probing once `ip` reaches this point,
    // leaving enough trailing bytes for the match-boundary hash refresh
    // (two more 4-byte loads) to stay in bounds.
    let ip_limit = input.len() - 13;

    let mut anchor = 0usize;
    // The first two bytes can never be the start of a back-reference (no
    // prior data to reference), so the scan starts past them.
    let mut ip = MIN_MATCH as usize - 1;

    'scan: while ip < ip_limit {
        // Probe the hash index at each position until a confirmed match is
        // found or `ip_limit` is reached, updating every probed slot along
        // the way (not just the one that eventually hits).
        let (matched_ref, distance) = loop {
            let seq = read_u32(input, ip) & 0x00FF_FFFF;
            let h = index.hash(seq);
            let candidate = index.probe_and_insert(h, ip as u32);
            let distance = ip as u32 - candidate;
            let cmp = if distance < MAX_MATCH_DISTANCE {
                read_u32(input, candidate as usize) & 0x00FF_FFFF
            } else {
                0x0100_0000
            };

            if ip >= ip_limit {
                break 'scan;
            }
            if seq == cmp {
                break (candidate as usize, distance);
            }
            ip += 1;
        };

        if anchor < ip {
            writer.emit_literals(&input[anchor..ip]);
        }

        let extra = compare(
            &input[matched_ref + MIN_MATCH as usize..ip_bound],
            &input[ip + MIN_MATCH as usize..ip_bound],
        );
        let len = extra as u32 + MIN_MATCH;
        writer.emit_match(len, distance);

        ip += len as usize;
        anchor = ip;

        // Refresh the hash index at both bytes straddling the match boundary
        // using a single 4-byte load, reused via a right-shift for the
        // second hash instead of a second, possibly out-of-bounds, read.
        let seq = read_u32(input, ip);
        let h0 = index.hash(seq & 0x00FF_FFFF);
        index.insert(h0, ip as u32);
        ip += 1;
        let h1 = index.hash(seq >> 8);
        index.insert(h1, ip as u32);
        ip += 1;
    }

    let remaining = input.len() - anchor;
    writer.emit_literals(&input[anchor..anchor + remaining]);

    Ok(writer.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{decompress, is_valid};

    #[test]
    fn bound_accounts_for_header_and_flag_overhead() {
        assert_eq!(bound(0), HEADER_SIZE + 1);
        assert_eq!(bound(8), HEADER_SIZE + 8 + 1 + 1);
    }

    #[test]
    fn rejects_short_input() {
        let mut out = [0u8; 64];
        assert_eq!(
            compress_into(b"short", &mut out),
            Err(CompressError::InputTooShort)
        );
    }

    #[test]
    fn rejects_undersized_output() {
        let input = vec![b'a'; 64];
        let mut out = [0u8; 4];
        assert_eq!(
            compress_into(&input, &mut out),
            Err(CompressError::OutputTooSmall)
        );
    }

    #[test]
    fn compresses_repetitive_input_and_round_trips() {
        let input = vec![b'a'; 64];
        let compressed = compress(&input).unwrap();
        assert!(is_valid(&compressed));
        assert!(compressed.len() < input.len());
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn compresses_incompressible_input_and_round_trips() {
        let input: Vec<u8> = (0u8..=255).cycle().take(200).collect();
        let compressed = compress(&input).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn oversized_match_input_round_trips() {
        let input = vec![b'z'; 512];
        let compressed = compress(&input).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn custom_hash_log_round_trips() {
        let input: Vec<u8> = (0..300).map(|i| (i % 17) as u8).collect();
        let cfg = Config::with_hash_log(10);
        let compressed = compress_with_config(&input, cfg).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }
}
