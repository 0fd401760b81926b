//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! shelf [OPTIONS] <INPUT> <OUTPUT>
//! ```
//!
//! `INPUT` is a tab-separated command file, `OUTPUT` is created or truncated and
//! receives the results. Diagnostics and logs go to stderr, never to `OUTPUT`.
//!
//! Exit codes:
//! - `0`: every line of the input was processed
//! - `1`: bad arguments, or a fatal error (unopenable file, malformed line)

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
