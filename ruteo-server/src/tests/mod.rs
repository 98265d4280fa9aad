//! Shared test harness modules for the Ruteo server and CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

mod helpers;
mod solve_unit;
