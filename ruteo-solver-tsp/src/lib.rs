//! Native single-vehicle tour solver for Ruteo.
//!
//! This crate provides [`TspSolver`], the default implementation of the
//! [`Solver`](ruteo_core::Solver) trait. It treats the routing problem as an
//! asymmetric travelling salesman tour anchored at the depot:
//!
//! 1. [`path_cheapest_arc`] builds a first tour by always extending the open
//!    end with its cheapest unvisited neighbour.
//! 2. Local search applies 2-opt segment reversals and single-node
//!    relocations, accepting only strictly improving moves, until no move
//!    improves the tour or the wall-clock budget runs out.
//!
//! The returned tour never costs more than the constructed one.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod construction;
mod improvement;
mod solver;

pub use construction::path_cheapest_arc;
pub use solver::{DEFAULT_TIME_LIMIT, TspSolver, TspSolverConfig};
