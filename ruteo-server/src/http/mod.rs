//! HTTP surface: the `/optimize-route` endpoint with its CORS policy.

mod handler;
mod response;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::post;
use ruteo_core::Solver;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use response::{ApiError, ErrorBody};

/// Path of the optimisation endpoint.
pub const OPTIMIZE_ROUTE_PATH: &str = "/optimize-route";

/// Request body cap applied when none is configured (64 MiB).
///
/// A dense matrix of full-precision floats takes roughly 20 bytes per cell,
/// so this admits requests of well over a thousand stops.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    solver: Arc<dyn Solver>,
}

impl AppState {
    /// Serve requests with `solver`.
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self { solver }
    }
}

/// Build the application router.
///
/// Browsers on `allowed_origin` may call the endpoint with any method and
/// headers; other origins receive no CORS grant. Bodies longer than
/// `max_body_bytes` are refused with the usual `{"detail": ...}` failure.
pub fn router(state: AppState, allowed_origin: HeaderValue, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route(OPTIMIZE_ROUTE_PATH, post(handler::optimize_route))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
