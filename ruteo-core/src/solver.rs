//! The solver boundary: trait, response and error types.

use std::time::Duration;

use thiserror::Error;

use crate::{Route, RoutingProblem};

/// Response from a successful solve.
///
/// Contains the chosen [`Route`] and how the search went.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResponse {
    /// The tour in visiting order, depot first.
    pub route: Route,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

/// Statistics describing a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Cost of the constructed tour before improvement.
    pub initial_cost: f64,
    /// Cost of the returned tour.
    pub final_cost: f64,
    /// Number of improving moves applied.
    pub improving_moves: u64,
    /// Why the improvement phase ended.
    pub stop_reason: StopReason,
}

/// Why a solver stopped searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No improving move remained.
    Converged,
    /// The time budget ran out first.
    DeadlineReached,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No feasible tour exists, e.g. the problem has no nodes.
    #[error("no solution found")]
    NoSolution,
}

/// Find a minimum-cost closed tour through every node of a problem.
///
/// Implementations return [`SolveError::NoSolution`] rather than panicking
/// when no tour exists. Solvers must be `Send + Sync` so a single instance can
/// serve concurrent requests.
pub trait Solver: Send + Sync {
    /// Solve a problem, producing a route or an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when no feasible tour exists.
    fn solve(&self, problem: &RoutingProblem) -> Result<SolveResponse, SolveError>;
}
