//! Great-circle cost matrices for located waypoints.
//!
//! Browser clients typically pick waypoints on a map and send each one as an
//! object carrying `lat` and `lng` fields. [`haversine_matrix`] turns such a
//! list into a [`DistanceMatrix`] of great-circle distances in metres, so the
//! same request body can be produced without an external routing service.

use geo::{Distance, Haversine, Point};
use thiserror::Error;

use crate::{DistanceMatrix, Location};

/// Field holding the latitude in decimal degrees.
pub const LATITUDE_FIELD: &str = "lat";
/// Field holding the longitude in decimal degrees.
pub const LONGITUDE_FIELD: &str = "lng";

/// Errors from [`haversine_matrix`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A coordinate field was absent or not a number.
    #[error("location {index} has no numeric `{field}` field")]
    MissingField {
        /// Index of the offending location.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },
    /// A coordinate lay outside its valid range.
    #[error("location {index} has `{field}` {value} outside [-{limit}, {limit}]")]
    OutOfRange {
        /// Index of the offending location.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Absolute bound for the field.
        limit: f64,
    },
}

/// Compute pairwise great-circle distances, in metres, between locations.
///
/// # Errors
///
/// Returns a [`CoordinateError`] when a location lacks a numeric `lat` or
/// `lng` field, or either lies outside its valid range.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ruteo_core::{Location, haversine_matrix};
///
/// let stops: Vec<Location> = serde_json::from_value(json!([
///     {"lat": -34.6037, "lng": -58.3816},
///     {"lat": -34.6158, "lng": -58.4333},
/// ]))?;
/// let matrix = haversine_matrix(&stops)?;
/// assert_eq!(matrix.cost(0, 0), 0.0);
/// assert!((matrix.cost(0, 1) - matrix.cost(1, 0)).abs() < 1e-6);
/// assert!(matrix.cost(0, 1) > 4_000.0 && matrix.cost(0, 1) < 6_000.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn haversine_matrix(locations: &[Location]) -> Result<DistanceMatrix, CoordinateError> {
    let points = locations
        .iter()
        .enumerate()
        .map(|(index, location)| point_of(index, location))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DistanceMatrix::from_fn(points.len(), |from, to| {
        match (points.get(from), points.get(to)) {
            (Some(origin), Some(destination)) if from != to => {
                Haversine.distance(*origin, *destination)
            }
            _ => 0.0,
        }
    }))
}

fn point_of(index: usize, location: &Location) -> Result<Point<f64>, CoordinateError> {
    let lat = coordinate(index, location, LATITUDE_FIELD, 90.0)?;
    let lng = coordinate(index, location, LONGITUDE_FIELD, 180.0)?;
    Ok(Point::new(lng, lat))
}

fn coordinate(
    index: usize,
    location: &Location,
    field: &'static str,
    limit: f64,
) -> Result<f64, CoordinateError> {
    let value = location
        .get(field)
        .and_then(serde_json::Value::as_f64)
        .ok_or(CoordinateError::MissingField { index, field })?;
    if !(-limit..=limit).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            index,
            field,
            value,
            limit,
        });
    }
    Ok(value)
}
