//! Request handler for `POST /optimize-route`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use ruteo_core::RouteRequest;

use super::{ApiError, AppState};
use crate::optimize::{OptimizeResponse, optimize};

/// Decode, validate and solve a request body.
///
/// The body is decoded by hand rather than through `Json`, and a body that
/// cannot be buffered (for example one over the size limit) is taken as a
/// rejection, so every failure reports through the `{"detail": ...}` shape.
/// Solving is CPU-bound and runs on the blocking pool.
pub(super) async fn optimize_route(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let request = RouteRequest::from_json(&body?)?;
    let solver = Arc::clone(&state.solver);
    let response =
        tokio::task::spawn_blocking(move || optimize(solver.as_ref(), request)).await??;
    Ok(Json(response))
}
