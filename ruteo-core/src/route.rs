//! Routes through caller-supplied locations.
//!
//! Aggregates the visiting order with the cost of the closed tour.

use crate::Location;

/// An ordered visit of every location, starting at the depot.
///
/// The closing return to the depot is priced into
/// [`total_cost`](Route::total_cost) but not repeated in the sequence.
///
/// # Examples
/// ```
/// use ruteo_core::{Location, Route};
///
/// let route = Route::new(vec![0], vec![Location::default()], 0.0);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.nodes(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    nodes: Vec<usize>,
    locations: Vec<Location>,
    total_cost: f64,
}

impl Route {
    /// Construct a route from node indices, their locations and the tour cost.
    #[must_use]
    pub const fn new(nodes: Vec<usize>, locations: Vec<Location>, total_cost: f64) -> Self {
        Self {
            nodes,
            locations,
            total_cost,
        }
    }

    /// Construct an empty route.
    ///
    /// # Examples
    /// ```
    /// use ruteo_core::Route;
    ///
    /// let route = Route::empty();
    /// assert!(route.is_empty());
    /// assert_eq!(route.total_cost(), 0.0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), 0.0)
    }

    /// Node indices in visiting order.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Locations in visiting order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Cost of the closed tour, including the return to the depot.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of visited locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the route visits nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Consume the route, returning its locations in visiting order.
    #[must_use]
    pub fn into_locations(self) -> Vec<Location> {
        self.locations
    }
}
