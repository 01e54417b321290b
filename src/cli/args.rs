//! CLI argument definitions using clap
//!
//! Commands:
//! - todcalc serve [--config <path>] [--host <host>] [--port <port>]
//! - todcalc estimate [--input <path>] [--pretty]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todcalc - time-of-death estimation by Newton's Law of Cooling
#[derive(Parser, Debug)]
#[command(name = "todcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute one estimate from a JSON request and exit
    Estimate {
        /// Read the request from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
