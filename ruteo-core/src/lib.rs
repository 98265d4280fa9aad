//! Core domain types for the Ruteo route optimiser.
//!
//! A caller supplies opaque [`Location`] objects and a pairwise cost matrix.
//! [`RouteRequest::validate`] turns that payload into a [`RoutingProblem`],
//! and a [`Solver`] turns the problem into an ordered [`Route`] that starts
//! and ends at the depot (index 0).
//!
//! Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesic;
mod location;
mod matrix;
mod problem;
pub mod request;
mod route;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use geodesic::{CoordinateError, haversine_matrix};
pub use location::Location;
pub use matrix::DistanceMatrix;
pub use problem::RoutingProblem;
pub use request::{RouteRequest, ValidationError};
pub use route::Route;
pub use solver::{Diagnostics, SolveError, SolveResponse, Solver, StopReason};
