//! Usage and version text, ported from `print_usage`/`print_version` in
//! `fastyz_cli.c`.

use super::constants::{PROGRAM_NAME, PROGRAM_VERSION};

pub fn print_usage() {
    println!("yaz0fast v{PROGRAM_VERSION} - Fast Yaz0 compression");
    println!();
    println!("Usage: {PROGRAM_NAME} [options] <input>");
    println!();
    println!("Options:");
    println!("  -c          Force compression mode");
    println!("  -d          Force decompression mode");
    println!("  -o <file>   Specify output filename");
    println!("  -f          Overwrite an existing output file without prompting");
    println!("  -q          Suppress non-error output");
    println!("  -v          Print a timing/ratio summary after the operation");
    println!("  -h, --help  Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("If no mode is specified, the operation is auto-detected:");
    println!("  - Files with .yaz0, .szs, or .carc extension are decompressed");
    println!("  - Files starting with the 'Yaz0' magic are decompressed");
    println!("  - All other files are compressed");
    println!();
    println!("Examples:");
    println!("  {PROGRAM_NAME} file.bin                 Compress to file.bin.yaz0");
    println!("  {PROGRAM_NAME} -c file.bin -o out.szs   Compress to out.szs");
    println!("  {PROGRAM_NAME} file.yaz0                Decompress to file");
    println!("  {PROGRAM_NAME} -d data.szs -o raw.bin   Decompress to raw.bin");
}

pub fn print_version() {
    println!("yaz0fast v{PROGRAM_VERSION}");
    println!("Fast Yaz0 (SZS) compression, hash-based LZ77 over the Yaz0 container format");
}
