//! Square pairwise cost matrices.

use crate::request::ValidationError;

/// Square matrix of non-negative, finite travel costs.
///
/// Entry `(i, j)` is the cost of the arc from node `i` to node `j`. Costs are
/// stored row-major so lookups are a single offset computation. Diagonal
/// entries are not required to be zero.
///
/// # Examples
/// ```
/// use ruteo_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![3.0, 0.0]])?;
/// assert_eq!(matrix.dimension(), 2);
/// assert_eq!(matrix.cost(1, 0), 3.0);
/// assert_eq!(matrix.tour_cost(&[0, 1]), 7.0);
/// # Ok::<(), ruteo_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dimension: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Validate and flatten a row-major matrix.
    ///
    /// An empty matrix is accepted here; callers that need at least one node
    /// (such as [`crate::RouteRequest::validate`]) check that separately.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RaggedRow`] when a row length differs from
    /// the number of rows, and [`ValidationError::NegativeEntry`] or
    /// [`ValidationError::NonFiniteEntry`] for unusable costs.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let dimension = rows.len();
        let mut costs = Vec::with_capacity(dimension * dimension);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(ValidationError::RaggedRow {
                    row,
                    len: values.len(),
                    dimension,
                });
            }
            for (column, value) in values.into_iter().enumerate() {
                costs.push(check_entry(row, column, value)?);
            }
        }
        Ok(Self { dimension, costs })
    }

    /// Build a matrix from a cost function. The function must return finite,
    /// non-negative values.
    pub(crate) fn from_fn(dimension: usize, mut cost: impl FnMut(usize, usize) -> f64) -> Self {
        let costs = (0..dimension)
            .flat_map(|from| (0..dimension).map(move |to| (from, to)))
            .map(|(from, to)| cost(from, to))
            .collect();
        Self { dimension, costs }
    }

    /// A matrix where every arc is free.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            costs: vec![0.0; dimension * dimension],
        }
    }

    /// Number of nodes.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether the matrix has no nodes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dimension == 0
    }

    /// Cost of the arc `from -> to`, or `None` when either index is out of
    /// range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.dimension || to >= self.dimension {
            return None;
        }
        self.costs.get(from * self.dimension + to).copied()
    }

    /// Cost of the arc `from -> to`.
    ///
    /// Out-of-range lookups indicate a solver bug; they are logged and
    /// treated as free arcs in release builds.
    #[must_use]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to).unwrap_or_else(|| {
            log::warn!(
                "Matrix lookup out of range from index {from} to index {to} (dimension {}); falling back to zero cost",
                self.dimension
            );
            debug_assert!(false, "Matrix lookup failed: from={from}, to={to}");
            0.0
        })
    }

    /// Cost of the closed tour visiting `order` and returning to its first
    /// node.
    #[must_use]
    pub fn tour_cost(&self, order: &[usize]) -> f64 {
        let Some(&first) = order.first() else {
            return 0.0;
        };
        let open: f64 = order
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(self.cost(*from, *to)),
                _ => None,
            })
            .sum();
        let last = order.last().copied().unwrap_or(first);
        open + self.cost(last, first)
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.costs.chunks(self.dimension.max(1))
    }
}

fn check_entry(row: usize, column: usize, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteEntry { row, column });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeEntry { row, column, value });
    }
    Ok(value)
}
