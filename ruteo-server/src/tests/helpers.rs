//! Test helpers for temporary inputs and in-process HTTP calls.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header};
use camino::{Utf8Path, Utf8PathBuf};
use ruteo_core::{RoutingProblem, SolveError, SolveResponse, Solver};
use ruteo_solver_tsp::TspSolver;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::http::{AppState, DEFAULT_MAX_BODY_BYTES, OPTIMIZE_ROUTE_PATH, router};

/// Origin granted CORS access by [`test_router`].
pub(super) const TEST_ORIGIN: &str = "https://planner.example";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory and its UTF-8 path.
pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Solver that never finds a tour.
pub(super) struct NoSolutionSolver;

impl Solver for NoSolutionSolver {
    fn solve(&self, _problem: &RoutingProblem) -> Result<SolveResponse, SolveError> {
        Err(SolveError::NoSolution)
    }
}

/// Solver that panics, standing in for a crashed solve task.
pub(super) struct PanickingSolver;

impl Solver for PanickingSolver {
    fn solve(&self, _problem: &RoutingProblem) -> Result<SolveResponse, SolveError> {
        panic!("solver exploded");
    }
}

pub(super) fn test_router(solver: Arc<dyn Solver>) -> Router {
    limited_router(solver, DEFAULT_MAX_BODY_BYTES)
}

pub(super) fn limited_router(solver: Arc<dyn Solver>, max_body_bytes: usize) -> Router {
    router(
        AppState::new(solver),
        HeaderValue::from_static(TEST_ORIGIN),
        max_body_bytes,
    )
}

pub(super) fn tsp_router() -> Router {
    test_router(Arc::new(TspSolver::new()))
}

/// Response pieces captured from a single call.
#[derive(Debug)]
pub(super) struct Captured {
    pub(super) status: StatusCode,
    pub(super) headers: HeaderMap,
    pub(super) body: Value,
    /// The body exactly as sent.
    pub(super) text: String,
}

/// POST `body` to the endpoint from [`TEST_ORIGIN`].
pub(super) async fn post_optimize(app: Router, body: impl Into<Body>) -> Captured {
    let request = Request::builder()
        .method(Method::POST)
        .uri(OPTIMIZE_ROUTE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, TEST_ORIGIN)
        .body(body.into())
        .expect("request");
    call(app, request).await
}

pub(super) async fn call(app: Router, request: Request<Body>) -> Captured {
    let response = app.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let text = String::from_utf8(bytes.to_vec()).expect("UTF-8 body");
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).expect("JSON body")
    };
    Captured {
        status,
        headers,
        body,
        text,
    }
}

/// Run an async call from a synchronous behaviour step.
pub(super) fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(future)
}
