use thiserror::Error;

/// Reasons a route request is rejected before solving.
///
/// Messages name the offending row, column or location so HTTP callers can
/// fix their payload from the error text alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The body was not JSON or did not match the request shape.
    #[error("malformed request body: {0}")]
    Malformed(String),
    /// The distance matrix had no rows.
    #[error("distance_matrix must contain at least one row")]
    EmptyMatrix,
    /// A row length differs from the number of rows.
    #[error(
        "distance_matrix is not square: row {row} has {len} entries but the matrix has {dimension} rows"
    )]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Number of rows in the matrix.
        dimension: usize,
    },
    /// The matrix dimension differs from the number of locations.
    #[error("distance_matrix has {dimension} rows but {locations} locations were supplied")]
    LocationCountMismatch {
        /// Number of locations supplied.
        locations: usize,
        /// Number of matrix rows.
        dimension: usize,
    },
    /// A location was not a JSON object.
    #[error("location {index} must be a JSON object")]
    LocationNotObject {
        /// Index of the offending location.
        index: usize,
    },
    /// A matrix entry was not a JSON number.
    #[error("distance_matrix[{row}][{column}] is not a number")]
    NonNumericEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
    /// A matrix entry was NaN or infinite.
    #[error("distance_matrix[{row}][{column}] is not finite")]
    NonFiniteEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
    /// A matrix entry was below zero.
    #[error("distance_matrix[{row}][{column}] is negative ({value})")]
    NegativeEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The rejected cost.
        value: f64,
    },
}
