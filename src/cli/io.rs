//! JSON I/O handling for CLI
//!
//! - Input: one JSON request document (file or stdin)
//! - Output: one JSON envelope on stdout
//! - UTF-8 only

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiError, ErrorResponse};

use super::errors::{CliError, CliResult};

/// Read a whole JSON request from `path`, or from `stdin` when no path is given
pub fn read_request<R: Read>(path: Option<&Path>, stdin: &mut R) -> CliResult<String> {
    let body = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?,
        None => {
            let mut body = String::new();
            stdin.read_to_string(&mut body)?;
            body
        }
    };

    if body.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(body)
}

/// Write a success envelope
pub fn write_response<W: Write, T: Serialize>(out: &mut W, data: &T, pretty: bool) -> CliResult<()> {
    let data = serde_json::to_value(data)?;
    let envelope = json!({
        "status": "ok",
        "data": data
    });
    write_value(out, &envelope, pretty)
}

/// Write an error envelope
pub fn write_error<W: Write>(out: &mut W, err: &ApiError, pretty: bool) -> CliResult<()> {
    let body = ErrorResponse::from(err);
    let mut envelope = json!({
        "status": "error",
        "code": body.code,
        "message": body.message
    });
    if let Some(field_errors) = body.field_errors {
        envelope["fieldErrors"] = json!(field_errors);
    }
    write_value(out, &envelope, pretty)
}

fn write_value<W: Write>(out: &mut W, value: &Value, pretty: bool) -> CliResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
