//! Command-line argument parsing for `yaz0fast`.
//!
//! The entry point is [`parse_args_from`], which takes an explicit slice so
//! it can be exercised from tests without touching `std::env`. Unrecognised
//! or malformed options return an `Err` with a human-readable message; the
//! caller (`main.rs`) prints it prefixed `yaz0fast: ` and exits 1.

use anyhow::{anyhow, Result};

use super::op_mode::OpMode;

/// Complete set of options and filenames produced by the argument parsing loop.
#[derive(Debug, Default)]
pub struct ParsedArgs {
    /// Forced operation mode; `None` means auto-detect from the input file.
    pub op_mode: Option<OpMode>,
    /// Input file path.
    pub input_filename: Option<String>,
    /// Output file path; `None` means derive one from the input filename.
    pub output_filename: Option<String>,
    /// Overwrite an existing output file without prompting (`-f`).
    pub force_overwrite: bool,
    /// Explicit display level requested by `-q` (1) or `-v` (3).
    pub display_level: Option<u32>,
    /// A `-h`/`--help` or `-V`/`--version` flag was processed; the caller
    /// should print the corresponding text and exit 0 without touching the
    /// filesystem.
    pub exit_early: Option<ExitEarly>,
}

/// Which early-exit message to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitEarly {
    Help,
    Version,
}

/// Parses an explicit argument list (argv[1..]).
pub fn parse_args_from(argv: &[String]) -> Result<ParsedArgs> {
    let mut parsed = ParsedArgs::default();
    let mut idx = 0usize;

    while idx < argv.len() {
        let arg = argv[idx].as_str();
        match arg {
            "-c" => parsed.op_mode = Some(OpMode::Compress),
            "-d" => parsed.op_mode = Some(OpMode::Decompress),
            "-f" => parsed.force_overwrite = true,
            "-q" => parsed.display_level = Some(1),
            "-v" => parsed.display_level = Some(3),
            "-h" | "--help" => {
                parsed.exit_early = Some(ExitEarly::Help);
                return Ok(parsed);
            }
            "-V" | "--version" => {
                parsed.exit_early = Some(ExitEarly::Version);
                return Ok(parsed);
            }
            "-o" => {
                idx += 1;
                let value = argv
                    .get(idx)
                    .ok_or_else(|| anyhow!("-o requires an argument"))?;
                parsed.output_filename = Some(value.clone());
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(anyhow!("unknown option '{}'", arg));
            }
            _ => {
                if parsed.input_filename.is_some() {
                    return Err(anyhow!("multiple input files specified"));
                }
                parsed.input_filename = Some(arg.to_owned());
            }
        }
        idx += 1;
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_input_only() {
        let parsed = parse_args_from(&args(&["file.bin"])).unwrap();
        assert_eq!(parsed.input_filename.as_deref(), Some("file.bin"));
        assert_eq!(parsed.op_mode, None);
    }

    #[test]
    fn parses_forced_mode_and_output() {
        let parsed = parse_args_from(&args(&["-c", "in.bin", "-o", "out.szs"])).unwrap();
        assert_eq!(parsed.op_mode, Some(OpMode::Compress));
        assert_eq!(parsed.input_filename.as_deref(), Some("in.bin"));
        assert_eq!(parsed.output_filename.as_deref(), Some("out.szs"));
    }

    #[test]
    fn rejects_dangling_dash_o() {
        assert!(parse_args_from(&args(&["-o"])).is_err());
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(parse_args_from(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn rejects_multiple_inputs() {
        assert!(parse_args_from(&args(&["a.bin", "b.bin"])).is_err());
    }

    #[test]
    fn help_short_circuits_parsing() {
        let parsed = parse_args_from(&args(&["-h", "ignored.bin"])).unwrap();
        assert_eq!(parsed.exit_early, Some(ExitEarly::Help));
    }

    #[test]
    fn quiet_and_verbose_set_display_level() {
        let parsed = parse_args_from(&args(&["-q", "in.bin"])).unwrap();
        assert_eq!(parsed.display_level, Some(1));
        let parsed = parse_args_from(&args(&["-v", "in.bin"])).unwrap();
        assert_eq!(parsed.display_level, Some(3));
    }
}
