//! Test-only fixtures shared by unit, behaviour and property tests across the
//! workspace.

use serde_json::{Map, Value};

use crate::{DistanceMatrix, Location, RoutingProblem, ValidationError};

/// A location carrying only a `label` field.
///
/// # Examples
/// ```rust
/// use ruteo_core::test_support::labelled;
///
/// let depot = labelled("depot");
/// assert_eq!(depot.get("label"), Some(&serde_json::json!("depot")));
/// ```
#[must_use]
pub fn labelled(label: &str) -> Location {
    let mut fields = Map::new();
    fields.insert("label".to_owned(), Value::from(label));
    Location::new(fields)
}

/// `count` locations labelled `n0`, `n1`, ...
#[must_use]
pub fn labelled_locations(count: usize) -> Vec<Location> {
    (0..count).map(|idx| labelled(&format!("n{idx}"))).collect()
}

/// Build a problem over labelled locations from raw matrix rows.
///
/// # Errors
///
/// Propagates any [`ValidationError`] raised by the matrix rows.
pub fn problem_from_rows(rows: Vec<Vec<f64>>) -> Result<RoutingProblem, ValidationError> {
    let matrix = DistanceMatrix::from_rows(rows)?;
    RoutingProblem::new(labelled_locations(matrix.dimension()), matrix)
}

/// Labels of the four-stop delivery scenario.
pub const DELIVERY_LABELS: [&str; 4] = ["depot", "A", "B", "C"];

/// Symmetric matrix for the four-stop delivery scenario: depot→A=10,
/// depot→B=15, depot→C=20, A→B=35, A→C=25, B→C=30.
#[must_use]
pub fn delivery_rows() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 10.0, 15.0, 20.0],
        vec![10.0, 0.0, 35.0, 25.0],
        vec![15.0, 35.0, 0.0, 30.0],
        vec![20.0, 25.0, 30.0, 0.0],
    ]
}

/// The four-stop delivery scenario as a validated problem.
///
/// # Errors
///
/// Never fails for the fixed data; the `Result` mirrors [`RoutingProblem::new`].
pub fn delivery_problem() -> Result<RoutingProblem, ValidationError> {
    let matrix = DistanceMatrix::from_rows(delivery_rows())?;
    RoutingProblem::new(DELIVERY_LABELS.iter().map(|l| labelled(l)).collect(), matrix)
}
