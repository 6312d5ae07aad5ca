//! The Yaz0 codec core: hash-based LZ77 compression and flag-byte decompression.
//!
//! This module tree implements the algorithm described by `fastyz.c` /
//! `fastyz.h` (FastYZ, itself an adaptation of Ariya Hidayat's FastLZ strategy
//! to Nintendo's Yaz0 container format). Every public function here operates
//! on borrowed byte slices; no part of this module touches the filesystem or
//! prints anything — that is the CLI's job (`crate::cli`, `crate::io`).
//!
//! | Module       | Responsibility                                        |
//! |--------------|--------------------------------------------------------|
//! | [`primitives`] | unaligned loads, prefix-match length                 |
//! | [`hash`]       | the single-probe hash index                           |
//! | [`writer`]     | the flag-byte bitstream emitter                       |
//! | [`header`]     | the 16-byte Yaz0 header codec                         |
//! | [`compress`]   | the encoder driver and public compression API         |
//! | [`decompress`] | the decoder and public decompression API              |

mod compress;
mod decompress;
mod hash;
mod header;
mod primitives;
mod writer;

pub use compress::{
    bound, compress, compress_into, compress_into_with_config, compress_with_config,
    CompressError,
};
pub use decompress::{decompress, decompress_into, DecompressError};
pub use header::{decompressed_size, is_valid, HEADER_SIZE};

/// Tunable knobs for one compression call.
///
/// The only knob Yaz0 compression has is the hash table size — there is no
/// dictionary, no block size, no worker count (§5: single-threaded, no
/// chunking). This is the Yaz0-scoped analogue of the teacher crate's much
/// larger `Prefs` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    hash_log: u32,
}

/// Smallest allowed `hash_log`: a 1 Ki-entry (4 KiB) table.
const MIN_HASH_LOG: u32 = 10;
/// Largest allowed `hash_log`: a 1 Mi-entry (4 MiB) table.
const MAX_HASH_LOG: u32 = 20;
/// Default `hash_log`: a 16 Ki-entry (64 KiB) table, matching `fastyz.c`'s
/// compile-time default of `HASH_LOG = 14`.
const DEFAULT_HASH_LOG: u32 = 14;

impl Default for Config {
    fn default() -> Self {
        Config {
            hash_log: DEFAULT_HASH_LOG,
        }
    }
}

impl Config {
    /// Returns a config with the hash table sized to `2^hash_log` entries,
    /// clamping `hash_log` into `[10, 20]` rather than rejecting out-of-range
    /// requests — this mirrors the teacher's `Prefs` setters, which clamp
    /// tuning parameters instead of erroring.
    #[must_use]
    pub fn with_hash_log(hash_log: u32) -> Self {
        Config {
            hash_log: hash_log.clamp(MIN_HASH_LOG, MAX_HASH_LOG),
        }
    }

    /// The configured hash log (`2^hash_log` table entries).
    #[must_use]
    pub fn hash_log(&self) -> u32 {
        self.hash_log
    }
}
