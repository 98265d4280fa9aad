//! The request/response protocol shared by the HTTP endpoint and the
//! `solve` command.

use ruteo_core::{Location, RouteRequest, SolveError, Solver, ValidationError};
use serde::{Deserialize, Serialize};

/// Message returned when the solver finds no tour.
pub const NO_SOLUTION_MESSAGE: &str = "No se encontró solución";

/// Body of a handled optimisation request.
///
/// Serialises as `{"status": "success", "route": [...]}` or
/// `{"status": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OptimizeResponse {
    /// A tour was found.
    Success {
        /// Input locations in visiting order, depot first.
        route: Vec<Location>,
    },
    /// The solver found no tour.
    Error {
        /// Human-readable reason.
        message: String,
    },
}

impl OptimizeResponse {
    /// The response sent when no tour exists.
    #[must_use]
    pub fn no_solution() -> Self {
        Self::Error {
            message: NO_SOLUTION_MESSAGE.to_owned(),
        }
    }
}

/// Validate a request and solve it.
///
/// Solver failures are part of the protocol and become
/// [`OptimizeResponse::Error`]; only malformed requests are errors.
///
/// # Errors
///
/// Returns the [`ValidationError`] raised by [`RouteRequest::validate`].
pub fn optimize(
    solver: &dyn Solver,
    request: RouteRequest,
) -> Result<OptimizeResponse, ValidationError> {
    let problem = request.validate()?;
    match solver.solve(&problem) {
        Ok(response) => {
            log::info!(
                "Optimised {} locations: cost {} -> {} in {:?} ({:?})",
                problem.len(),
                response.diagnostics.initial_cost,
                response.diagnostics.final_cost,
                response.diagnostics.solve_time,
                response.diagnostics.stop_reason
            );
            Ok(OptimizeResponse::Success {
                route: response.route.into_locations(),
            })
        }
        Err(SolveError::NoSolution) => {
            log::info!("No route found for {} locations", problem.len());
            Ok(OptimizeResponse::no_solution())
        }
    }
}
