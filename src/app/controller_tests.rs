//! Tests for the query UI controller

use super::*;
use crate::api::worker::spawn_worker;
use crate::api::{ApiClient, ApiEndpoint, ApiRequest};
use crate::test_utils::test_helpers::{
    app_with_channels, rainfall_result, serve_once, test_app, type_query,
};
use proptest::prelude::*;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

fn submitted(app: &mut App, query: &str) -> bool {
    type_query(app, query);
    app.submit_query()
}

// ==================== Validation ====================

#[test]
fn test_empty_query_shows_validation_error_without_request() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    assert!(!submitted(&mut app, ""));

    assert_eq!(app.ui, UiState::Error(EMPTY_QUERY_MESSAGE.to_string()));
    assert_eq!(request_rx.try_recv(), Err(TryRecvError::Empty));
    assert!(app.is_submit_enabled());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_whitespace_query_never_sends(query in "[ \t]{0,12}") {
        let (mut app, request_rx, _response_tx) = app_with_channels();

        prop_assert!(!submitted(&mut app, &query));
        prop_assert_eq!(request_rx.try_recv(), Err(TryRecvError::Empty));
        prop_assert_eq!(app.ui.error_message(), Some(EMPTY_QUERY_MESSAGE));
    }
}

// ==================== Submission ====================

#[test]
fn test_submit_sends_trimmed_query_and_enters_loading() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    assert!(submitted(&mut app, "  What is the rainfall in Region X?  "));

    assert_eq!(app.ui, UiState::Loading);
    assert!(!app.is_submit_enabled());
    assert_eq!(
        request_rx.try_recv().unwrap(),
        ApiRequest::Query {
            query: "What is the rainfall in Region X?".to_string(),
            request_id: 1,
        }
    );
}

#[test]
fn test_submit_clears_previous_error() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();
    app.show_error("Error: index unavailable");

    assert!(submitted(&mut app, "rainfall"));
    assert_eq!(app.ui.error_message(), None);
}

#[test]
fn test_submit_while_loading_is_ignored() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    assert!(submitted(&mut app, "first"));
    assert!(!submitted(&mut app, "second"));

    assert!(request_rx.try_recv().is_ok());
    assert_eq!(request_rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_submit_without_worker_reports_error_and_recovers() {
    let mut app = test_app();

    assert!(!submitted(&mut app, "rainfall"));

    assert_eq!(
        app.ui,
        UiState::Error(format!("Error: {}", WORKER_UNAVAILABLE_MESSAGE))
    );
    assert!(app.is_submit_enabled());
}

#[test]
fn test_submit_example_fills_field_and_sends() {
    let (mut app, request_rx, _response_tx) = app_with_channels();

    assert!(app.submit_example(2));

    let expected = app.examples.get(2).unwrap().to_string();
    assert_eq!(app.query(), expected);
    assert_eq!(
        request_rx.try_recv().unwrap(),
        ApiRequest::Query {
            query: expected,
            request_id: 1,
        }
    );
}

#[test]
fn test_unknown_example_number_does_nothing() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    assert!(!app.submit_example(42));
    assert_eq!(app.ui, UiState::Idle);
    assert_eq!(request_rx.try_recv(), Err(TryRecvError::Empty));
}

// ==================== Responses ====================

#[test]
fn test_success_response_renders_results() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "What is the rainfall in Region X?");
    app.results_scroll.offset = 7;

    response_tx
        .send(ApiResponse::Query {
            request_id: 1,
            result: Ok(rainfall_result()),
        })
        .unwrap();

    assert!(app.poll_api_responses());
    let result = app.ui.results().expect("results state");
    assert_eq!(result.answer, "42mm");
    assert_eq!(result.sources.len(), 1);
    assert_eq!(app.results_scroll.offset, 0);
    assert!(app.is_submit_enabled());
}

#[test]
fn test_server_error_response_shows_prefixed_message() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    response_tx
        .send(ApiResponse::Query {
            request_id: 1,
            result: Err(ApiError::Application("index unavailable".to_string())),
        })
        .unwrap();
    app.poll_api_responses();

    assert_eq!(app.ui, UiState::Error("Error: index unavailable".to_string()));
    assert!(app.is_submit_enabled());
}

#[test]
fn test_transport_error_response_shows_message() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    response_tx
        .send(ApiResponse::Query {
            request_id: 1,
            result: Err(ApiError::Transport("connection refused".to_string())),
        })
        .unwrap();
    app.poll_api_responses();

    assert_eq!(app.ui.error_message(), Some("Error: connection refused"));
}

#[test]
fn test_stale_response_is_ignored() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    response_tx
        .send(ApiResponse::Query {
            request_id: 99,
            result: Ok(rainfall_result()),
        })
        .unwrap();
    app.poll_api_responses();

    assert_eq!(app.ui, UiState::Loading);
}

#[test]
fn test_worker_disconnect_while_loading_recovers() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    drop(response_tx);
    assert!(app.poll_api_responses());

    assert_eq!(
        app.ui.error_message(),
        Some(format!("Error: {}", WORKER_UNAVAILABLE_MESSAGE).as_str())
    );
    assert!(app.is_submit_enabled());
}

#[test]
fn test_worker_failure_while_loading_recovers() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    response_tx
        .send(ApiResponse::WorkerFailed("Network worker crashed: boom".to_string()))
        .unwrap();
    app.poll_api_responses();

    assert_eq!(
        app.ui.error_message(),
        Some("Error: Network worker crashed: boom")
    );
    assert_eq!(app.api.in_flight(), None);
}

#[derive(Debug, Clone)]
enum Outcome {
    Success,
    Application(String),
    Transport(String),
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Success),
        "[a-z ]{0,20}".prop_map(Outcome::Application),
        "[a-z ]{0,20}".prop_map(Outcome::Transport),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_submit_is_reenabled_after_any_resolution(outcome in arb_outcome()) {
        let (mut app, _request_rx, response_tx) = app_with_channels();
        prop_assert!(submitted(&mut app, "rainfall"));
        prop_assert!(!app.is_submit_enabled());

        let result = match outcome.clone() {
            Outcome::Success => Ok(rainfall_result()),
            Outcome::Application(m) => Err(ApiError::Application(m)),
            Outcome::Transport(m) => Err(ApiError::Transport(m)),
        };
        response_tx.send(ApiResponse::Query { request_id: 1, result }).unwrap();
        app.poll_api_responses();

        prop_assert!(app.is_submit_enabled());
        match outcome {
            Outcome::Success => prop_assert!(app.ui.results().is_some()),
            _ => prop_assert!(app.ui.error_message().is_some()),
        }
    }
}

// ==================== Health check ====================

#[test]
fn test_health_check_sends_request() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    app.check_backend_health();
    assert_eq!(request_rx.try_recv().unwrap(), ApiRequest::Health);
    assert_eq!(app.ui, UiState::Idle);
}

#[test]
fn test_health_success_leaves_state_alone() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    response_tx
        .send(ApiResponse::Health(Ok(
            serde_json::json!({"status": "healthy"}),
        )))
        .unwrap();

    app.poll_api_responses();
    assert_eq!(app.ui, UiState::Idle);
}

#[test]
fn test_health_failure_shows_warning_when_idle() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    response_tx
        .send(ApiResponse::Health(Err(ApiError::Transport(
            "connection refused".to_string(),
        ))))
        .unwrap();

    app.poll_api_responses();
    assert_eq!(app.ui.error_message(), Some(BACKEND_UNREACHABLE_MESSAGE));
}

#[test]
fn test_health_failure_does_not_interrupt_loading() {
    let (mut app, _request_rx, response_tx) = app_with_channels();
    submitted(&mut app, "rainfall");

    response_tx
        .send(ApiResponse::Health(Err(ApiError::Transport(
            "connection refused".to_string(),
        ))))
        .unwrap();
    app.poll_api_responses();

    assert_eq!(app.ui, UiState::Loading);
}

#[test]
fn test_health_without_worker_shows_warning() {
    let mut app = test_app();
    app.check_backend_health();
    assert_eq!(app.ui.error_message(), Some(BACKEND_UNREACHABLE_MESSAGE));
}

#[test]
fn test_hide_error_only_affects_error_state() {
    let mut app = test_app();
    app.render_results(rainfall_result());
    app.hide_error();
    assert!(app.ui.results().is_some());

    app.show_error("Error: x");
    app.hide_error();
    assert_eq!(app.ui, UiState::Idle);
}

// ==================== End to end ====================

#[test]
fn test_round_trip_through_worker_and_server() {
    let (base_url, _request) = serve_once(
        "200 OK",
        r#"{"success":true,"answer":"42mm","sources":[{"dataset":"RainDB","region":"X","file":"x.csv","description":"annual rainfall"}],"raw_data":{"value":42}}"#,
    );

    let mut app = test_app();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.api.set_channels(request_tx, response_rx);
    spawn_worker(
        ApiClient::new(ApiEndpoint::from_base_url(&base_url)),
        request_rx,
        response_tx,
    );

    assert!(submitted(&mut app, "What is the rainfall in Region X?"));

    for _ in 0..400 {
        app.poll_api_responses();
        if !app.ui.is_loading() {
            break;
        }
        std::thread::sleep(Duration::from_millis(25));
    }

    assert_eq!(app.ui, UiState::Results(rainfall_result()));
}
