//! First-solution construction.

use ruteo_core::{DistanceMatrix, RoutingProblem};

/// Build a tour by repeatedly appending the unvisited node reached by the
/// cheapest arc from the current end of the path.
///
/// The path starts at the depot. Ties go to the lowest node index, so the
/// result is fully deterministic. An empty matrix yields an empty tour.
///
/// # Examples
/// ```
/// use ruteo_core::DistanceMatrix;
/// use ruteo_solver_tsp::path_cheapest_arc;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 9.0, 1.0],
///     vec![1.0, 0.0, 9.0],
///     vec![9.0, 1.0, 0.0],
/// ])?;
/// assert_eq!(path_cheapest_arc(&matrix), vec![0, 2, 1]);
/// # Ok::<(), ruteo_core::ValidationError>(())
/// ```
#[must_use]
pub fn path_cheapest_arc(matrix: &DistanceMatrix) -> Vec<usize> {
    let dimension = matrix.dimension();
    if dimension == 0 {
        return Vec::new();
    }

    let mut tour = Vec::with_capacity(dimension);
    tour.push(RoutingProblem::DEPOT);
    // Kept sorted so `min_by` resolves ties to the lowest index.
    let mut unvisited: Vec<usize> = (0..dimension)
        .filter(|&node| node != RoutingProblem::DEPOT)
        .collect();

    let mut current = RoutingProblem::DEPOT;
    loop {
        let from = current;
        let Some((position, next)) = unvisited
            .iter()
            .copied()
            .enumerate()
            .min_by(|(_, lhs), (_, rhs)| matrix.cost(from, *lhs).total_cmp(&matrix.cost(from, *rhs)))
        else {
            break;
        };
        unvisited.remove(position);
        tour.push(next);
        current = next;
    }
    tour
}
