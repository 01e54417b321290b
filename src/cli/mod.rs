//! CLI module for todcalc
//!
//! Provides command-line interface for:
//! - serve: run the HTTP API server
//! - estimate: one-shot estimate from a JSON request

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{estimate, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
