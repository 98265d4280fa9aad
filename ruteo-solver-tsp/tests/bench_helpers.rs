//! Unit tests for benchmark helper functions.
//!
//! These tests verify the `generate_clustered_points`, `generate_cost_rows`
//! and `generate_problem` functions produce correct, deterministic outputs.

use rstest::rstest;

/// Include the benchmark support module from the benches directory.
/// Note: This path works because Cargo compiles tests with the package root as base.
#[path = "../benches/bench_support.rs"]
mod bench_support;

use bench_support::{
    BENCHMARK_SEED, generate_clustered_points, generate_cost_rows, generate_problem,
};

// =============================================================================
// Unit tests for generate_clustered_points
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(100)]
fn generate_clustered_points_handles_various_sizes(#[case] count: usize) {
    let points = generate_clustered_points(count, BENCHMARK_SEED);
    assert_eq!(points.len(), count);
}

#[rstest]
fn generate_clustered_points_is_deterministic() {
    let points1 = generate_clustered_points(20, BENCHMARK_SEED);
    let points2 = generate_clustered_points(20, BENCHMARK_SEED);
    assert_eq!(points1, points2);
}

#[rstest]
fn generate_clustered_points_different_seeds_produce_different_results() {
    let points1 = generate_clustered_points(10, 42);
    let points2 = generate_clustered_points(10, 43);
    assert_ne!(
        points1, points2,
        "Different seeds should produce different distributions"
    );
}

// =============================================================================
// Unit tests for generate_cost_rows
// =============================================================================

#[rstest]
fn generate_cost_rows_returns_square_matrix() {
    let points = generate_clustered_points(5, BENCHMARK_SEED);
    let rows = generate_cost_rows(&points, BENCHMARK_SEED);

    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert_eq!(row.len(), 5);
    }
}

#[rstest]
#[expect(
    clippy::indexing_slicing,
    clippy::float_cmp,
    reason = "Test uses loop indices and exact zero checks on the diagonal"
)]
fn generate_cost_rows_diagonal_is_zero_and_off_diagonal_positive() {
    let points = generate_clustered_points(10, BENCHMARK_SEED);
    let rows = generate_cost_rows(&points, BENCHMARK_SEED);

    for (i, row) in rows.iter().enumerate() {
        for (j, cost) in row.iter().enumerate() {
            if i == j {
                assert_eq!(*cost, 0.0, "Diagonal element [{i}][{j}] should be zero");
            } else {
                assert!(
                    *cost >= 0.0 && cost.is_finite(),
                    "Off-diagonal element [{i}][{j}] should be a valid cost"
                );
            }
        }
    }
    assert!(rows[0][1] > 0.0);
}

#[rstest]
fn generate_cost_rows_handles_empty_input() {
    assert!(generate_cost_rows(&[], BENCHMARK_SEED).is_empty());
}

#[rstest]
#[expect(clippy::indexing_slicing, reason = "Test uses known fixed indices")]
fn generate_cost_rows_reflects_distance() {
    let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
    let rows = generate_cost_rows(&points, BENCHMARK_SEED);

    // The noise is at most 20%, so the far point still costs more.
    assert!(
        rows[0][2] > rows[0][1],
        "Farther stop should cost more (near: {}, far: {})",
        rows[0][1],
        rows[0][2]
    );
}

// =============================================================================
// Unit tests for generate_problem
// =============================================================================

#[rstest]
#[case(1)]
#[case(50)]
fn generate_problem_builds_valid_problem(#[case] count: usize) {
    let problem = generate_problem(count, BENCHMARK_SEED).expect("generated rows validate");
    assert_eq!(problem.len(), count);
    assert_eq!(problem.matrix().dimension(), count);
}
