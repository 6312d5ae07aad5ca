//! File I/O for the `yaz0fast` binary: whole-file reads/writes and output
//! filename derivation.
//!
//! Ported from `read_file`/`write_file`/`generate_output_filename` in
//! `fastyz_cli.c`. The core codec (`crate::core`) never touches the
//! filesystem; this module is the thin, binary-only layer that does.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::cli::op_mode::OpMode;

/// Reads the entire contents of `path` into memory.
pub fn read_file(path: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot open '{path}' for reading"))
}

/// Writes `data` to `path`, refusing to clobber an existing file unless
/// `force` is set.
pub fn write_file(path: &str, data: &[u8], force: bool) -> Result<()> {
    if !force && Path::new(path).exists() {
        return Err(anyhow!(
            "'{path}' already exists (use -f to overwrite)"
        ));
    }
    fs::write(path, data).with_context(|| format!("cannot write '{path}'"))
}

/// Derives an output filename from `input` for the given `mode`, the way
/// `generate_output_filename` does in the C CLI:
///
/// - Compressing: appends `.yaz0`.
/// - Decompressing: strips a recognized `.yaz0`/`.szs` extension, rewrites
///   `.carc` to `.arc`, or appends `.bin` if the input carries none of
///   those extensions.
#[must_use]
pub fn derive_output_filename(input: &str, mode: OpMode) -> String {
    match mode {
        OpMode::Compress => format!("{input}.yaz0"),
        OpMode::Decompress => {
            let lower = input.to_ascii_lowercase();
            if let Some(stem) = strip_suffix_ci(input, &lower, ".yaz0") {
                stem.to_owned()
            } else if let Some(stem) = strip_suffix_ci(input, &lower, ".szs") {
                stem.to_owned()
            } else if let Some(stem) = strip_suffix_ci(input, &lower, ".carc") {
                format!("{stem}.arc")
            } else {
                format!("{input}.bin")
            }
        }
    }
}

/// Returns `input` with `suffix` removed, if `lower` (the lowercased form of
/// `input`) ends with `suffix`. Case-insensitive, byte-length preserving.
fn strip_suffix_ci<'a>(input: &'a str, lower: &str, suffix: &str) -> Option<&'a str> {
    if lower.ends_with(suffix) {
        Some(&input[..input.len() - suffix.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_appends_yaz0() {
        assert_eq!(
            derive_output_filename("data.bin", OpMode::Compress),
            "data.bin.yaz0"
        );
    }

    #[test]
    fn decompress_strips_yaz0_case_insensitively() {
        assert_eq!(
            derive_output_filename("data.YAZ0", OpMode::Decompress),
            "data"
        );
    }

    #[test]
    fn decompress_strips_szs() {
        assert_eq!(
            derive_output_filename("data.szs", OpMode::Decompress),
            "data"
        );
    }

    #[test]
    fn decompress_rewrites_carc_to_arc() {
        assert_eq!(
            derive_output_filename("course.carc", OpMode::Decompress),
            "course.arc"
        );
    }

    #[test]
    fn decompress_appends_bin_when_no_known_extension() {
        assert_eq!(
            derive_output_filename("data", OpMode::Decompress),
            "data.bin"
        );
    }

    #[test]
    fn read_write_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.bin");
        let path_str = path.to_str().unwrap();
        write_file(path_str, b"hello", false)?;
        assert_eq!(read_file(path_str)?, b"hello");
        Ok(())
    }

    #[test]
    fn write_refuses_to_clobber_without_force() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("exists.bin");
        let path_str = path.to_str().unwrap();
        write_file(path_str, b"first", false)?;
        assert!(write_file(path_str, b"second", false).is_err());
        write_file(path_str, b"second", true)?;
        assert_eq!(read_file(path_str)?, b"second");
        Ok(())
    }
}
