//! Binary entry point for the `yaz0fast` command-line tool.
//!
//! Handles post-parse validation, output filename resolution, and
//! compress/decompress dispatch. Corresponds to the post-argument-parsing
//! section of `main()` in `fastyz_cli.c`.
//!
//! # Control flow
//!
//! 1. [`parse_args_from`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] dispatches to the appropriate I/O operation and returns a `Result`.
//!
//! All heap allocations are released by Rust's RAII; there is no explicit
//! `free` or `goto cleanup`.

use std::time::Instant;

use anyhow::{anyhow, Result};

use yaz0::cli::args::{parse_args_from, ExitEarly, ParsedArgs};
use yaz0::cli::constants::set_display_level;
use yaz0::cli::help;
use yaz0::cli::op_mode::OpMode;
use yaz0::{compress, decompress, displaylevel, io};

fn run(args: ParsedArgs) -> Result<()> {
    if let Some(level) = args.display_level {
        set_display_level(level);
    }

    let input_filename = args
        .input_filename
        .ok_or_else(|| anyhow!("no input file specified (use --help for usage information)"))?;

    let input_data = io::read_file(&input_filename)?;

    let op_mode = args
        .op_mode
        .unwrap_or_else(|| OpMode::detect(&input_filename, &input_data));

    let output_filename = args
        .output_filename
        .unwrap_or_else(|| io::derive_output_filename(&input_filename, op_mode));

    match op_mode {
        OpMode::Compress => {
            let start = Instant::now();
            let compressed = compress(&input_data)
                .map_err(|e| anyhow!("compression failed: {e:?}"))?;
            let elapsed = start.elapsed();

            io::write_file(&output_filename, &compressed, args.force_overwrite)?;

            let ratio = 100.0 * compressed.len() as f64 / input_data.len().max(1) as f64;
            let mb_per_sec = (input_data.len() as f64 / (1024.0 * 1024.0)) / elapsed.as_secs_f64().max(1e-9);
            displaylevel!(2, "Compressed: {input_filename} -> {output_filename}");
            displaylevel!(
                3,
                "  {} bytes -> {} bytes ({:.1}%) in {:.3} sec ({:.1} MB/s)",
                input_data.len(),
                compressed.len(),
                ratio,
                elapsed.as_secs_f64(),
                mb_per_sec
            );
        }
        OpMode::Decompress => {
            let start = Instant::now();
            let decompressed = decompress(&input_data)
                .map_err(|e| anyhow!("'{input_filename}' is not a valid Yaz0 stream: {e:?}"))?;
            let elapsed = start.elapsed();

            io::write_file(&output_filename, &decompressed, args.force_overwrite)?;

            let mb_per_sec =
                (decompressed.len() as f64 / (1024.0 * 1024.0)) / elapsed.as_secs_f64().max(1e-9);
            displaylevel!(2, "Decompressed: {input_filename} -> {output_filename}");
            displaylevel!(
                3,
                "  {} bytes -> {} bytes in {:.3} sec ({:.1} MB/s)",
                input_data.len(),
                decompressed.len(),
                elapsed.as_secs_f64(),
                mb_per_sec
            );
        }
    }

    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let args = match parse_args_from(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("yaz0fast: {e}");
            std::process::exit(1);
        }
    };

    match args.exit_early {
        Some(ExitEarly::Help) => {
            help::print_usage();
            std::process::exit(0);
        }
        Some(ExitEarly::Version) => {
            help::print_version();
            std::process::exit(0);
        }
        None => {}
    }

    if let Err(e) = run(args) {
        eprintln!("yaz0fast: {e}");
        std::process::exit(1);
    }
}
