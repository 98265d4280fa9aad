//! Focused unit tests covering solve CLI configuration and request loading.

use std::time::Duration;

use ortho_config::MergeComposer;
use rstest::rstest;
use ruteo_core::{Solver, ValidationError};
use serde_json::{Value, json};

use super::helpers::{NoSolutionSolver, temp_root, write_utf8};
use crate::optimize::OptimizeResponse;
use crate::solve::{
    DefaultSolveSolverBuilder, SolveArgs, SolveConfig, SolveSolverBuilder,
    config_from_layers_for_test, load_route_request, run_solve_with,
};
use crate::{ARG_SOLVE_REQUEST, CliError, ENV_SOLVE_REQUEST};

const DELIVERY_REQUEST: &[u8] = br#"{
    "locations": [{"name": "depot"}, {"name": "A"}, {"name": "B"}, {"name": "C"}],
    "distance_matrix": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]
}"#;

struct NoSolutionBuilder;

impl SolveSolverBuilder for NoSolutionBuilder {
    fn build(&self, _config: &SolveConfig) -> Box<dyn Solver> {
        Box::new(NoSolutionSolver)
    }
}

#[rstest]
fn converting_solve_without_request_errors() {
    let err = SolveConfig::try_from(SolveArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(env, ENV_SOLVE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn solve_config_defaults_time_limit() {
    let (_tmp, root) = temp_root();
    let args = SolveArgs {
        request_path: Some(root.join("request.json")),
        time_limit_ms: None,
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.request_path, root.join("request.json"));
    assert_eq!(config.time_limit, Duration::from_secs(3));
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = temp_root();
    let config = SolveConfig {
        request_path: root.join("request.json"),
        time_limit: Duration::ZERO,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SOLVE_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config = SolveConfig {
        request_path: request_path.clone(),
        time_limit: Duration::ZERO,
    };

    match config.validate_sources().expect_err("directory should fail") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_route_request_decodes_json() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    write_utf8(&request_path, DELIVERY_REQUEST);

    let request = load_route_request(&request_path).expect("request should decode");
    assert_eq!(request.locations.len(), 4);
    assert_eq!(request.distance_matrix.len(), 4);
}

#[rstest]
fn load_route_request_rejects_invalid_json() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"{ not valid json");

    match load_route_request(&request_path).expect_err("invalid json should error") {
        CliError::InvalidRouteRequest { path, source } => {
            assert_eq!(path, request_path);
            assert!(matches!(source, ValidationError::Malformed(_)));
        }
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[rstest]
fn load_route_request_io_error_returns_open_error() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");

    match load_route_request(&request_path).expect_err("missing request should error") {
        CliError::OpenInput { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn run_solve_prints_the_http_body() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    write_utf8(&request_path, DELIVERY_REQUEST);
    let args = SolveArgs {
        request_path: Some(request_path),
        time_limit_ms: Some(500),
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout)
        .expect("solve should succeed");

    let body: Value = serde_json::from_slice(&stdout).expect("JSON output");
    assert_eq!(body["status"], "success");
    let route = body["route"].as_array().expect("route array");
    assert_eq!(route.len(), 4);
    assert_eq!(route.first(), Some(&json!({"name": "depot"})));
}

#[rstest]
fn run_solve_reports_missing_solution_in_band() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    write_utf8(&request_path, DELIVERY_REQUEST);
    let args = SolveArgs {
        request_path: Some(request_path),
        time_limit_ms: None,
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &NoSolutionBuilder, &mut stdout).expect("command should succeed");
    let response: OptimizeResponse = serde_json::from_slice(&stdout).expect("JSON output");
    assert_eq!(response, OptimizeResponse::no_solution());
}

#[rstest]
fn run_solve_rejects_invalid_matrix() {
    let (_tmp, root) = temp_root();
    let request_path = root.join("request.json");
    write_utf8(
        &request_path,
        br#"{"locations": [{"id": 0}, {"id": 1}], "distance_matrix": [[0, -3], [1, 0]]}"#,
    );
    let args = SolveArgs {
        request_path: Some(request_path.clone()),
        time_limit_ms: None,
    };

    let mut stdout = Vec::new();
    let err = run_solve_with(args, &NoSolutionBuilder, &mut stdout).expect_err("invalid matrix");
    match err {
        CliError::InvalidRouteRequest { path, source } => {
            assert_eq!(path, request_path);
            assert!(matches!(
                source,
                ValidationError::NegativeEntry {
                    row: 0,
                    column: 1,
                    ..
                }
            ));
        }
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    match config_from_layers_for_test(composer.layers()).expect_err("invalid layer") {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let (_tmp, root) = temp_root();
    let env_request = root.join("from-env-request.json");

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": root.join("from-file-request.json").as_str(),
            "time_limit_ms": 900,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "time_limit_ms": 700,
    }));
    composer.push_cli(json!({ "time_limit_ms": 100 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.time_limit, Duration::from_millis(100));
}
