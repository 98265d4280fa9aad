//! Validated routing problems.

use crate::{DistanceMatrix, Location, Route, ValidationError};

/// A validated single-vehicle routing problem.
///
/// Node `i` of the matrix corresponds to `locations[i]`; node
/// [`RoutingProblem::DEPOT`] is the start and end of the tour.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingProblem {
    locations: Vec<Location>,
    matrix: DistanceMatrix,
}

impl RoutingProblem {
    /// Index of the depot node.
    pub const DEPOT: usize = 0;

    /// Pair locations with their cost matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LocationCountMismatch`] when the matrix
    /// dimension differs from the number of locations.
    pub fn new(locations: Vec<Location>, matrix: DistanceMatrix) -> Result<Self, ValidationError> {
        if locations.len() != matrix.dimension() {
            return Err(ValidationError::LocationCountMismatch {
                locations: locations.len(),
                dimension: matrix.dimension(),
            });
        }
        Ok(Self { locations, matrix })
    }

    /// Locations in input order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Pairwise arc costs.
    #[must_use]
    pub const fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of nodes, depot included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the problem has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Materialise a visiting order into a [`Route`].
    ///
    /// Indices without a matching location are skipped and logged.
    #[must_use]
    pub fn route_for(&self, order: &[usize]) -> Route {
        let mut nodes = Vec::with_capacity(order.len());
        let mut locations = Vec::with_capacity(order.len());
        for &node in order {
            if let Some(location) = self.locations.get(node) {
                nodes.push(node);
                locations.push(location.clone());
            } else {
                log::warn!("Node {node} has no matching location; dropping it from the route");
            }
        }
        let total_cost = self.matrix.tour_cost(&nodes);
        Route::new(nodes, locations, total_cost)
    }
}
