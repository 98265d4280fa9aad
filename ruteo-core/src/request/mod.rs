//! Route request payloads and their validation.
//!
//! [`RouteRequest`] mirrors the JSON body accepted by the HTTP endpoint. It
//! is deliberately loose (matrix entries are arbitrary JSON values) so that
//! shape problems surface as a [`ValidationError`] naming the offending entry
//! rather than a generic decoding failure.

mod error;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DistanceMatrix, Location, RoutingProblem};

pub use error::ValidationError;

/// Unvalidated request body.
///
/// # Examples
/// ```
/// use ruteo_core::RouteRequest;
///
/// let body = br#"{"locations": [{"id": "depot"}, {"id": "a"}],
///                 "distance_matrix": [[0, 3], [4, 0]]}"#;
/// let problem = RouteRequest::from_json(body)?.validate()?;
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.matrix().cost(1, 0), 4.0);
/// # Ok::<(), ruteo_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Caller-supplied stops; index 0 is the depot.
    pub locations: Vec<Value>,
    /// Row-major pairwise costs.
    pub distance_matrix: Vec<Vec<Value>>,
}

impl RouteRequest {
    /// Build a request body from already-typed parts.
    #[must_use]
    pub fn new(locations: Vec<Location>, matrix: &DistanceMatrix) -> Self {
        Self {
            locations: locations.into_iter().map(Value::from).collect(),
            distance_matrix: matrix
                .rows()
                .map(|row| row.iter().copied().map(Value::from).collect())
                .collect(),
        }
    }

    /// Decode a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] when the bytes are not JSON or
    /// either field is missing or of the wrong JSON type.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|err| ValidationError::Malformed(err.to_string()))
    }

    /// Check the payload's shape and produce a solvable problem.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the matrix is empty, not square,
    /// disagrees with the number of locations, or holds an entry that is
    /// negative, non-numeric or non-finite; or when a location is not a JSON
    /// object.
    pub fn validate(self) -> Result<RoutingProblem, ValidationError> {
        let Self {
            locations,
            distance_matrix,
        } = self;

        let dimension = distance_matrix.len();
        if dimension == 0 {
            return Err(ValidationError::EmptyMatrix);
        }
        if let Some((row, values)) = distance_matrix
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != dimension)
        {
            return Err(ValidationError::RaggedRow {
                row,
                len: values.len(),
                dimension,
            });
        }
        if locations.len() != dimension {
            return Err(ValidationError::LocationCountMismatch {
                locations: locations.len(),
                dimension,
            });
        }

        let locations = locations
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Location::try_from(value).map_err(|_| ValidationError::LocationNotObject { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let rows = numeric_rows(distance_matrix)?;
        let matrix = DistanceMatrix::from_rows(rows)?;
        RoutingProblem::new(locations, matrix)
    }
}

fn numeric_rows(rows: Vec<Vec<Value>>) -> Result<Vec<Vec<f64>>, ValidationError> {
    rows.into_iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .into_iter()
                .enumerate()
                .map(|(column, value)| {
                    value
                        .as_f64()
                        .ok_or(ValidationError::NonNumericEntry { row, column })
                })
                .collect()
        })
        .collect()
}
