//! Command-line argument parsing and dispatch for `yaz0fast`.
//!
//! Split out from `main.rs` the way the teacher splits its much larger
//! `lz4cli.c` into `cli::args`/`cli::constants`/`cli::help`/`cli::op_mode`:
//! argument parsing, diagnostics plumbing, usage/version text, and the
//! auto-detect mode enum each get their own module.

pub mod args;
pub mod constants;
pub mod help;
pub mod op_mode;

pub use args::{parse_args_from, ExitEarly, ParsedArgs};
pub use op_mode::OpMode;
