//! flatfield CLI entry point
//!
//! Minimal entrypoint: dispatch to cli::run, print errors to stderr,
//! exit non-zero on failure. No decoding logic lives here.

use flatfield::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
