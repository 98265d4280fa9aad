//! `serve` command: run the HTTP endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ruteo_solver_tsp::{DEFAULT_TIME_LIMIT, TspSolver, TspSolverConfig};
use serde::{Deserialize, Serialize};

use crate::http::{AppState, DEFAULT_MAX_BODY_BYTES, router};
use crate::{ARG_ALLOWED_ORIGIN, ARG_BIND, ARG_MAX_BODY_BYTES, ARG_TIME_LIMIT_MS, CliError};

/// Listen address used when none is configured.
pub(crate) const DEFAULT_BIND: &str = "0.0.0.0:8000";
/// Browser origin granted CORS access when none is configured.
pub(crate) const DEFAULT_ALLOWED_ORIGIN: &str = "https://singular-raindrop-329837.netlify.app";

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the route optimiser over HTTP. Clients POST a JSON \
                 body with `locations` and `distance_matrix` to \
                 /optimize-route and receive the locations in visiting order.",
    about = "Run the route optimisation HTTP service"
)]
#[ortho_config(prefix = "RUTEO")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on.
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Browser origin allowed to call the service.
    #[arg(long = ARG_ALLOWED_ORIGIN, value_name = "url")]
    #[serde(default)]
    pub(crate) allowed_origin: Option<String>,
    /// Solver time limit per request, in milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
    /// Largest accepted request body, in bytes.
    #[arg(long = ARG_MAX_BODY_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) max_body_bytes: Option<usize>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) allowed_origin: HeaderValue,
    pub(crate) time_limit: Duration,
    pub(crate) max_body_bytes: usize,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = CliError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let bind_text = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind_text
            .parse::<SocketAddr>()
            .map_err(|err| CliError::InvalidArgument {
                field: ARG_BIND,
                value: bind_text.clone(),
                reason: err.to_string(),
            })?;

        let origin_text = args
            .allowed_origin
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_owned());
        let allowed_origin =
            HeaderValue::from_str(&origin_text).map_err(|err| CliError::InvalidArgument {
                field: ARG_ALLOWED_ORIGIN,
                value: origin_text.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            bind,
            allowed_origin,
            time_limit: time_limit_from_millis(args.time_limit_ms),
            max_body_bytes: args.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES),
        })
    }
}

/// Convert an optional millisecond budget, defaulting to the solver's.
pub(crate) fn time_limit_from_millis(millis: Option<u64>) -> Duration {
    millis.map_or(DEFAULT_TIME_LIMIT, Duration::from_millis)
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(serve(config))
}

async fn serve(config: ServeConfig) -> Result<(), CliError> {
    let solver = TspSolver::with_config(TspSolverConfig {
        time_limit: config.time_limit,
    });
    let app = router(
        AppState::new(Arc::new(solver)),
        config.allowed_origin.clone(),
        config.max_body_bytes,
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| CliError::Bind {
            addr: config.bind,
            source,
        })?;
    log::info!(
        "Listening for route requests on {} (origin {:?}, time limit {:?}, body limit {} bytes)",
        config.bind,
        config.allowed_origin,
        config.time_limit,
        config.max_body_bytes
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Serve)?;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("Cannot listen for Ctrl-C ({err}); shut down by terminating the process");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}
