//! The resolved compress/decompress operation mode.

/// Which direction `yaz0fast` operates in, either forced by `-c`/`-d` or
/// resolved by [`OpMode::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
}

impl OpMode {
    /// Auto-detects the mode from `input_path`'s extension, falling back to
    /// sniffing the file's magic bytes.
    ///
    /// Ported from the extension check and `fopen`/`fread` magic probe in
    /// `fastyz_cli.c`'s `main`. Extension matching is case-insensitive.
    pub fn detect(input_path: &str, first_bytes: &[u8]) -> Self {
        let lower = input_path.to_ascii_lowercase();
        let has_compressed_ext = super::constants::COMPRESSED_EXTENSIONS
            .iter()
            .any(|ext| lower.ends_with(ext));

        if has_compressed_ext || crate::is_valid(first_bytes) {
            OpMode::Decompress
        } else {
            OpMode::Compress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension_case_insensitively() {
        assert_eq!(OpMode::detect("FILE.SZS", b""), OpMode::Decompress);
        assert_eq!(OpMode::detect("file.yaz0", b""), OpMode::Decompress);
        assert_eq!(OpMode::detect("file.carc", b""), OpMode::Decompress);
    }

    #[test]
    fn detects_by_magic_when_extension_unknown() {
        assert_eq!(OpMode::detect("file.bin", b"Yaz0"), OpMode::Decompress);
    }

    #[test]
    fn defaults_to_compress() {
        assert_eq!(OpMode::detect("file.bin", b"junk"), OpMode::Compress);
    }
}
