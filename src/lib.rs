//! Facade crate for the Ruteo route optimiser.
//!
//! This crate re-exports the core domain types and exposes the solver
//! implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use ruteo_core::{
    CoordinateError, Diagnostics, DistanceMatrix, Location, Route, RouteRequest, RoutingProblem,
    SolveError, SolveResponse, Solver, StopReason, ValidationError, haversine_matrix,
};

#[cfg(feature = "solver-tsp")]
pub use ruteo_solver_tsp::{TspSolver, TspSolverConfig};
