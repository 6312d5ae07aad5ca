//! Yaz0/SZS compression and decompression library and CLI.

pub mod cli;
pub mod core;
pub mod io;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for a given input size. Equivalent to `FASTYZ_BOUND`.
pub use core::bound;

/// One-shot compression using the default [`Config`]. Equivalent to `yaz0_compress`.
pub use core::compress;

/// One-shot compression with a tunable [`Config`].
pub use core::compress_with_config;

/// Compress into a caller-provided buffer. Equivalent to `yaz0_compress`.
pub use core::compress_into;

/// Compress into a caller-provided buffer with a tunable [`Config`].
pub use core::compress_into_with_config;

/// Error type for compression operations.
pub use core::CompressError;

/// One-shot decompression. Equivalent to `yaz0_decompress`.
pub use core::decompress;

/// Decompress into a caller-provided buffer. Equivalent to `yaz0_decompress`.
pub use core::decompress_into;

/// Error type for decompression operations.
pub use core::DecompressError;

/// Read the decompressed size recorded in a Yaz0 header.
/// Equivalent to `yaz0_get_decompressed_size`.
pub use core::decompressed_size;

/// Check whether a buffer starts with a valid Yaz0 magic.
/// Equivalent to `yaz0_is_valid`.
pub use core::is_valid;

/// Fixed size of the Yaz0 header, in bytes.
pub use core::HEADER_SIZE;

/// Tunable knobs for a compression call (currently just the hash table size).
pub use core::Config;

// ─────────────────────────────────────────────────────────────────────────────
// Version API
// ─────────────────────────────────────────────────────────────────────────────

pub const YAZ0FAST_VERSION_MAJOR: i32 = 1;
pub const YAZ0FAST_VERSION_MINOR: i32 = 0;
pub const YAZ0FAST_VERSION_REVISION: i32 = 0;
pub const YAZ0FAST_VERSION_STRING: &str = "1.0.0";

/// Returns the library version string (e.g. `"1.0.0"`).
pub fn version_string() -> &'static str {
    YAZ0FAST_VERSION_STRING
}
