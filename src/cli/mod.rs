//! Command-line interface for flatfield
//!
//! A thin shell over the library: argument parsing, input checks,
//! and JSON output. All decoding logic lives in the schema and
//! decoder subsystems.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::run;
pub use errors::{CliError, CliResult};
