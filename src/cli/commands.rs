//! CLI command implementations

use std::io::{self, Read, Write};
use std::path::Path;

use uuid::Uuid;

use crate::api::EstimateHandler;
use crate::estimator::Clock;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::Estimate { input, pretty } => {
            // stdout carries exactly one JSON envelope
            Logger::route_all_to_stderr();
            estimate(
                &EstimateHandler::new(),
                input.as_deref(),
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                pretty,
            )
        }
    }
}

/// Resolve server configuration: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => {
            let config = HttpServerConfig::load(path)?;
            Logger::event(
                Event::ConfigLoaded,
                &[("path", path.display().to_string().as_str())],
            );
            config
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

/// Start the HTTP API server and block until shutdown
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            Logger::event(Event::ServerFailed, &[("error", e.to_string().as_str())]);
            CliError::server_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Compute one estimate and write the JSON envelope to `out`.
///
/// A rejected request still writes an error envelope, then returns
/// `Err` so the process exits non-zero.
pub fn estimate<C: Clock, R: Read, W: Write>(
    handler: &EstimateHandler<C>,
    input: Option<&Path>,
    stdin: &mut R,
    out: &mut W,
    pretty: bool,
) -> CliResult<()> {
    let body = read_request(input, stdin)?;
    let request_id = Uuid::new_v4().to_string();

    match handler.handle_json(&body, &request_id) {
        Ok(result) => write_response(out, &result, pretty),
        Err(err) => {
            write_error(out, &err, pretty)?;
            Err(CliError::rejected(err.to_string()))
        }
    }
}
