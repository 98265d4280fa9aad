//! `matrix` command: turn located waypoints into a complete route request.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ruteo_core::{Location, RouteRequest, haversine_matrix};
use serde::{Deserialize, Serialize};

use crate::fs::{read_input, require_existing};
use crate::{ARG_MATRIX_WAYPOINTS, CliError, ENV_MATRIX_WAYPOINTS, write_json};

/// CLI arguments for the `matrix` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON array of waypoint objects carrying `lat` and \
                 `lng` fields and print a route request whose distance \
                 matrix holds great-circle distances in metres.",
    about = "Build a route request from located waypoints"
)]
#[ortho_config(prefix = "RUTEO")]
pub(crate) struct MatrixArgs {
    /// Path to a JSON array of waypoints; the first is the depot.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) waypoints_path: Option<Utf8PathBuf>,
}

impl MatrixArgs {
    pub(crate) fn into_config(self) -> Result<MatrixConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatrixConfig::try_from(merged)
    }
}

/// Resolved `matrix` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatrixConfig {
    pub(crate) waypoints_path: Utf8PathBuf,
}

impl TryFrom<MatrixArgs> for MatrixConfig {
    type Error = CliError;

    fn try_from(args: MatrixArgs) -> Result<Self, Self::Error> {
        let waypoints_path = args.waypoints_path.ok_or(CliError::MissingArgument {
            field: ARG_MATRIX_WAYPOINTS,
            env: ENV_MATRIX_WAYPOINTS,
        })?;
        Ok(Self { waypoints_path })
    }
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_matrix_with(args, &mut stdout)
}

pub(crate) fn run_matrix_with(args: MatrixArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.waypoints_path, ARG_MATRIX_WAYPOINTS)?;
    let request = build_request(&config.waypoints_path)?;
    write_json(writer, &request)
}

fn build_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let contents = read_input(path)?;
    let waypoints: Vec<Location> =
        serde_json::from_slice(&contents).map_err(|source| CliError::ParseWaypoints {
            path: path.to_path_buf(),
            source,
        })?;
    let matrix = haversine_matrix(&waypoints).map_err(|source| CliError::Coordinates {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Built a {0}x{0} great-circle matrix", matrix.dimension());
    Ok(RouteRequest::new(waypoints, &matrix))
}
