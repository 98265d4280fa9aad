//! `TspSolver` implementation: cheapest-arc construction followed by
//! deadline-bounded local search.

use std::time::{Duration, Instant};

use ruteo_core::{Diagnostics, RoutingProblem, SolveError, SolveResponse, Solver, StopReason};

use crate::construction::path_cheapest_arc;
use crate::improvement::{Deadline, Improvement, improve};

/// Wall-clock budget applied when no explicit limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(3);

/// Configuration for [`TspSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TspSolverConfig {
    /// Upper bound on time spent solving a single problem.
    ///
    /// The constructed tour is always returned, even when the budget is
    /// zero; the limit only curtails local search.
    pub time_limit: Duration,
}

impl Default for TspSolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

/// Native solver producing a closed tour that starts and ends at the depot.
///
/// The solver holds no per-request state, so one instance can be shared
/// across threads.
///
/// # Examples
/// ```
/// use ruteo_core::Solver;
/// use ruteo_core::test_support::delivery_problem;
/// use ruteo_solver_tsp::TspSolver;
///
/// let problem = delivery_problem()?;
/// let response = TspSolver::new().solve(&problem)?;
/// assert_eq!(response.route.nodes().first(), Some(&0));
/// assert_eq!(response.route.len(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TspSolver {
    config: TspSolverConfig,
}

impl TspSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TspSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: TspSolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &TspSolverConfig {
        &self.config
    }
}

impl Solver for TspSolver {
    fn solve(&self, problem: &RoutingProblem) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        if problem.is_empty() {
            return Err(SolveError::NoSolution);
        }

        let matrix = problem.matrix();
        let initial = path_cheapest_arc(matrix);
        let initial_cost = matrix.tour_cost(&initial);

        let mut tour = initial.clone();
        let deadline = Deadline::new(started_at, self.config.time_limit);
        let Improvement { moves, stop_reason } = improve(&mut tour, matrix, &deadline);

        // Summing a reordered tour can round above the constructed cost.
        let tour = if matrix.tour_cost(&tour) <= initial_cost {
            tour
        } else {
            initial
        };
        let route = problem.route_for(&tour);

        if stop_reason == StopReason::DeadlineReached && !self.config.time_limit.is_zero() {
            log::warn!(
                "Local search stopped after {moves} moves on a {}-node problem: time limit of {:?} reached",
                problem.len(),
                self.config.time_limit
            );
        }
        log::debug!(
            "Solved {}-node problem: cost {initial_cost} -> {} in {moves} moves",
            problem.len(),
            route.total_cost()
        );

        Ok(SolveResponse {
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                initial_cost,
                final_cost: route.total_cost(),
                improving_moves: moves,
                stop_reason,
            },
            route,
        })
    }
}
