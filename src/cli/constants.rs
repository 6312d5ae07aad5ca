//! Program identity strings and the process-wide diagnostics verbosity level.
//!
//! Rust port of the globals declared near the top of `fastyz_cli.c`.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "yaz0fast";
pub const PROGRAM_VERSION: &str = crate::YAZ0FAST_VERSION_STRING;

pub const COMPRESSED_EXTENSIONS: [&str; 3] = [".yaz0", ".szs", ".carc"];

/// Process-wide verbosity level for the `displaylevel!` macro.
///
/// `0` silent, `1` errors only, `2` default, `3` ratio/size summary (`-v`),
/// `4` verbose internals. Mirrors the teacher's `static unsigned displayLevel`.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_level_round_trips() {
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }

    #[test]
    fn compressed_extensions_cover_known_suffixes() {
        assert!(COMPRESSED_EXTENSIONS.contains(&".yaz0"));
        assert!(COMPRESSED_EXTENSIONS.contains(&".szs"));
        assert!(COMPRESSED_EXTENSIONS.contains(&".carc"));
    }
}
