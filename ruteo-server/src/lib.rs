//! HTTP service and command-line interface for the Ruteo route optimiser.
//!
//! The `ruteo` binary offers three subcommands:
//!
//! - `serve` runs `POST /optimize-route` behind a single-origin CORS policy;
//! - `solve` answers a request stored on disk, printing the HTTP body;
//! - `matrix` builds a request from waypoints with `lat`/`lng` fields.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
pub mod http;
mod matrix;
pub mod optimize;
mod serve;
mod solve;

pub use error::CliError;

use matrix::{MatrixArgs, run_matrix};
use serve::{ServeArgs, run_serve};
use solve::{SolveArgs, run_solve};

pub(crate) const ARG_BIND: &str = "bind";
pub(crate) const ARG_ALLOWED_ORIGIN: &str = "allowed-origin";
pub(crate) const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";
pub(crate) const ARG_MAX_BODY_BYTES: &str = "max-body-bytes";
pub(crate) const ARG_SOLVE_REQUEST: &str = "request-path";
pub(crate) const ENV_SOLVE_REQUEST: &str = "RUTEO_CMDS_SOLVE_REQUEST_PATH";
pub(crate) const ARG_MATRIX_WAYPOINTS: &str = "waypoints-path";
pub(crate) const ENV_MATRIX_WAYPOINTS: &str = "RUTEO_CMDS_MATRIX_WAYPOINTS_PATH";

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Run the Ruteo CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, an
/// input cannot be read, or the server fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    init_tracing();
    match cli.command {
        Command::Serve(args) => run_serve(args),
        Command::Solve(args) => run_solve(args),
        Command::Matrix(args) => run_matrix(args),
    }
}

/// Install the global subscriber; it also receives `log` records from the
/// library crates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        log::debug!("tracing subscriber already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ruteo",
    about = "Single-vehicle route optimisation service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the optimiser over HTTP.
    Serve(ServeArgs),
    /// Solve a route request stored in a JSON file.
    Solve(SolveArgs),
    /// Build a route request from located waypoints.
    Matrix(MatrixArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
