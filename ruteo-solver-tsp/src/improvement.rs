//! Deadline-bounded local search over a closed tour.
//!
//! Tours are node sequences with the depot at position 0 and an implicit
//! closing arc back to it. Moves never touch position 0. Both neighbourhoods
//! price moves exactly for asymmetric matrices, so an accepted move always
//! lowers the tour cost.

#![expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "move evaluation indexes positions bounded by the tour length and sums float costs"
)]

use std::time::{Duration, Instant};

use ruteo_core::{DistanceMatrix, StopReason};

/// Moves must beat the current cost by this fraction to be accepted, which
/// keeps rounding noise from cycling between equal-cost tours.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Wall-clock budget for the improvement phase.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    started_at: Instant,
    budget: Duration,
}

impl Deadline {
    pub(crate) const fn new(started_at: Instant, budget: Duration) -> Self {
        Self { started_at, budget }
    }

    pub(crate) fn expired(&self) -> bool {
        self.started_at.elapsed() >= self.budget
    }
}

/// Result of [`improve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Improvement {
    pub(crate) moves: u64,
    pub(crate) stop_reason: StopReason,
}

#[derive(Debug, Clone, Copy)]
struct Sweep {
    moves: u64,
    expired: bool,
}

/// Improve `tour` in place until no move helps or `deadline` passes.
///
/// The deadline is polled before every candidate position, so the call
/// returns shortly after the budget runs out.
pub(crate) fn improve(
    tour: &mut Vec<usize>,
    matrix: &DistanceMatrix,
    deadline: &Deadline,
) -> Improvement {
    // Fewer than three nodes admit a single cyclic order.
    if tour.len() < 3 {
        return Improvement {
            moves: 0,
            stop_reason: StopReason::Converged,
        };
    }

    let mut moves = 0_u64;
    loop {
        if deadline.expired() {
            return Improvement {
                moves,
                stop_reason: StopReason::DeadlineReached,
            };
        }
        let tolerance = RELATIVE_TOLERANCE * matrix.tour_cost(tour).max(1.0);

        let two_opt = two_opt_sweep(tour, matrix, deadline, tolerance);
        moves += two_opt.moves;
        if two_opt.expired {
            return Improvement {
                moves,
                stop_reason: StopReason::DeadlineReached,
            };
        }

        let relocate = relocate_sweep(tour, matrix, deadline, tolerance);
        moves += relocate.moves;
        if relocate.expired {
            return Improvement {
                moves,
                stop_reason: StopReason::DeadlineReached,
            };
        }

        if two_opt.moves == 0 && relocate.moves == 0 {
            return Improvement {
                moves,
                stop_reason: StopReason::Converged,
            };
        }
    }
}

/// Node following `position` on the closed tour.
fn successor(tour: &[usize], position: usize) -> usize {
    tour.get(position + 1).or_else(|| tour.first()).copied().unwrap_or(0)
}

/// Reverse segments `tour[i..=j]` that shorten the tour.
///
/// Internal arc costs are accumulated in both directions as `j` grows, so
/// each candidate is priced in constant time even for asymmetric matrices.
fn two_opt_sweep(
    tour: &mut [usize],
    matrix: &DistanceMatrix,
    deadline: &Deadline,
    tolerance: f64,
) -> Sweep {
    let len = tour.len();
    let mut moves = 0;
    for i in 1..len - 1 {
        if deadline.expired() {
            return Sweep {
                moves,
                expired: true,
            };
        }
        let prev = tour[i - 1];
        let first = tour[i];
        let mut forward = 0.0;
        let mut backward = 0.0;
        for j in i + 1..len {
            let before_last = tour[j - 1];
            let last = tour[j];
            forward += matrix.cost(before_last, last);
            backward += matrix.cost(last, before_last);
            let next = successor(tour, j);

            let current = matrix.cost(prev, first) + forward + matrix.cost(last, next);
            let reversed = matrix.cost(prev, last) + backward + matrix.cost(first, next);
            if reversed < current - tolerance {
                tour[i..=j].reverse();
                moves += 1;
                break;
            }
        }
    }
    Sweep {
        moves,
        expired: false,
    }
}

/// Move single nodes to a cheaper place in the tour (or-opt with segment
/// length one).
fn relocate_sweep(
    tour: &mut Vec<usize>,
    matrix: &DistanceMatrix,
    deadline: &Deadline,
    tolerance: f64,
) -> Sweep {
    let mut moves = 0;
    for position in 1..tour.len() {
        if deadline.expired() {
            return Sweep {
                moves,
                expired: true,
            };
        }
        if let Some(target) = improving_insertion(tour, matrix, position, tolerance) {
            let node = tour.remove(position);
            tour.insert(target, node);
            moves += 1;
        }
    }
    Sweep {
        moves,
        expired: false,
    }
}

/// Find where the node at `position` could be reinserted more cheaply.
///
/// Returns the insertion index to use after the node has been removed.
fn improving_insertion(
    tour: &[usize],
    matrix: &DistanceMatrix,
    position: usize,
    tolerance: f64,
) -> Option<usize> {
    let node = tour[position];
    let prev = tour[position - 1];
    let next = successor(tour, position);
    let removal_gain = matrix.cost(prev, node) + matrix.cost(node, next) - matrix.cost(prev, next);

    (0..tour.len())
        // Arcs touching the node itself would recreate the same tour.
        .filter(|&k| k != position && k + 1 != position)
        .find(|&k| {
            let from = tour[k];
            let to = successor(tour, k);
            let insertion = matrix.cost(from, node) + matrix.cost(node, to) - matrix.cost(from, to);
            insertion < removal_gain - tolerance
        })
        .map(|k| if k < position { k + 1 } else { k })
}
