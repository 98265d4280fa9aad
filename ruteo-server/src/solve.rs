//! Solve command implementation for the Ruteo CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ruteo_core::{RouteRequest, Solver};
use ruteo_solver_tsp::{TspSolver, TspSolverConfig};
use serde::{Deserialize, Serialize};

use crate::fs::{read_input, require_existing};
use crate::optimize::{OptimizeResponse, optimize};
use crate::serve::time_limit_from_millis;
use crate::{ARG_SOLVE_REQUEST, ARG_TIME_LIMIT_MS, CliError, ENV_SOLVE_REQUEST, write_json};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a route request stored as JSON on disk and print \
                 the body the HTTP endpoint would return for it.",
    about = "Solve a route request file"
)]
#[ortho_config(prefix = "RUTEO")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file holding `locations` and `distance_matrix`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Solver time limit, in milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Solver time limit.
    pub(crate) time_limit: Duration,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_SOLVE_REQUEST)
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            time_limit: time_limit_from_millis(args.time_limit_ms),
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver> {
        Box::new(TspSolver::with_config(TspSolverConfig {
            time_limit: config.time_limit,
        }))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_solve(args, builder)?;
    write_json(writer, &response)
}

fn execute_solve(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
) -> Result<OptimizeResponse, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = load_route_request(&config.request_path)?;
    let solver = builder.build(&config);
    optimize(solver.as_ref(), request).map_err(|source| CliError::InvalidRouteRequest {
        path: config.request_path.clone(),
        source,
    })
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(crate) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let contents = read_input(path)?;
    RouteRequest::from_json(&contents).map_err(|source| CliError::InvalidRouteRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
