use std::sync::Arc;

use chrono::NaiveDate;
use futures::StreamExt;
use serde_json::json;
use taskit_core::app::{App, AppBuilder, GatewayConfig, ProcessingDelays};
use taskit_core::domain::{ParamMap, TaskExecutionRequest, TaskExecutionResult, TaskType};
use taskit_core::impls::PerTaskDispatch;
use taskit_core::ports::FixedClock;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(base_url: &str) -> GatewayConfig {
    GatewayConfig::default()
        .with_base_url(base_url)
        .with_delays(ProcessingDelays::none())
}

fn app(server: &MockServer) -> App {
    AppBuilder::new()
        .config(config(&server.uri()))
        .clock(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())))
        .build()
        .unwrap()
}

async fn run(app: &App, request: TaskExecutionRequest) -> Vec<TaskExecutionResult> {
    app.gateway.execute(request).collect().await
}

fn assert_single_terminal(events: &[TaskExecutionResult]) {
    assert!(matches!(events.first(), Some(TaskExecutionResult::Loading { .. })));
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
    assert!(events.last().is_some_and(|e| e.is_terminal()));
}

#[tokio::test]
async fn email_task_runs_to_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/email-task"))
        .and(body_partial_json(json!({
            "recipientEmail": "a@b.com",
            "content": "Hello there, this is a test.",
            "tone": "professional"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exec-1",
            "status": "success",
            "data": {"draft": "Dear A,", "cc": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new())
        .with_param("recipientEmail", "a@b.com")
        .with_param("content", "Hello there, this is a test.");
    let events = run(&app(&server), request).await;

    assert_single_terminal(&events);
    assert_eq!(events.len(), 3);
    match &events[0] {
        TaskExecutionResult::Loading { execution_id, status } => {
            assert_eq!(execution_id, "");
            assert_eq!(status, "Starting execution...");
        }
        other => panic!("unexpected: {other:?}"),
    }
    match &events[1] {
        TaskExecutionResult::Loading { execution_id, status } => {
            assert_eq!(execution_id, "exec-1");
            assert_eq!(status, "Processing...");
        }
        other => panic!("unexpected: {other:?}"),
    }
    match &events[2] {
        TaskExecutionResult::Success { execution_id, result } => {
            assert_eq!(execution_id, "exec-1");
            assert_eq!(result["draft"], "Dear A,");
            assert!(!result.contains_key("cc"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn video_summary_unwraps_array_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/youtube-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exec-2",
            "status": "success",
            "data": {"output": [{"summary": "Short talk", "timestamps": null}]}
        })))
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("summarize_video", ParamMap::new())
        .with_param("youtubeUrl", "https://youtu.be/abc");
    let events = run(&app(&server), request).await;

    let result = events.last().and_then(|e| e.result()).unwrap();
    assert_eq!(result["summary"], "Short talk");
    assert_eq!(result["timestamps"], "");
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/email-task"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new());
    let events = run(&app(&server), request).await;

    assert_single_terminal(&events);
    assert_eq!(events.len(), 2);
    match events.last() {
        Some(TaskExecutionResult::Error { message, cause }) => {
            assert!(message.contains("500"), "{message}");
            assert!(message.contains("Internal error"), "{message}");
            assert!(cause.is_some());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_data_is_partial_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/report-task"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exec-3",
            "status": "success",
            "data": "report.pdf"
        })))
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("create_report", ParamMap::new());
    let events = run(&app(&server), request).await;

    assert_single_terminal(&events);
    match events.last() {
        Some(TaskExecutionResult::PartialSuccess {
            execution_id,
            result,
            error,
        }) => {
            assert_eq!(execution_id, "exec-3");
            assert_eq!(result["status"], "completed_with_errors");
            assert!(error.starts_with("Data parsing error"));
            assert!(result["raw_response"].as_str().unwrap().contains("report.pdf"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new());
    let events = run(&app(&server), request).await;

    match events.last() {
        Some(TaskExecutionResult::Error { message, .. }) => {
            assert_eq!(message, "Empty response from server")
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unmapped_type_goes_to_generic_webhook() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/business"))
        .and(body_json(json!({"clientName": "Acme", "currency": "EUR"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exec-4",
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("create_invoice", ParamMap::new())
        .with_param("clientName", "Acme")
        .with_param("currency", "EUR");
    assert_eq!(request.task_type, TaskType::Business);
    let events = run(&app(&server), request).await;

    match events.last() {
        Some(TaskExecutionResult::Success { execution_id, result }) => {
            assert_eq!(execution_id, "exec-4");
            assert!(result.is_empty());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn per_task_dispatch_uses_dedicated_webhook() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/create-invoice-task"))
        .and(body_partial_json(json!({
            "clientName": "Acme",
            "currency": "USD",
            "items": [{"description": "Design work", "quantity": 1, "unitPrice": 0.0}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "exec-5"})))
        .expect(1)
        .mount(&server)
        .await;

    let app = AppBuilder::new()
        .config(config(&server.uri()))
        .dispatch(Arc::new(PerTaskDispatch::new()))
        .build()
        .unwrap();
    let request = TaskExecutionRequest::for_task("create_invoice", ParamMap::new())
        .with_param("clientName", "Acme")
        .with_param("items", "Design work");
    let events = run(&app, request).await;

    assert!(events.last().is_some_and(|e| e.is_success()));
}

#[tokio::test]
async fn summarize_day_defaults_date_to_today() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/summarize-day-task"))
        .and(body_partial_json(json!({
            "userEmail": "me@example.com",
            "date": "2026-10-18",
            "includeEmails": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "exec-6", "data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("summarize_day", ParamMap::new())
        .with_param("userEmail", "me@example.com");
    let events = run(&app(&server), request).await;

    assert!(events.last().is_some_and(|e| e.is_success()));
}

#[tokio::test]
async fn scraper_with_bad_url_sends_safe_mode_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/web-scraper"))
        .and(body_json(json!({
            "url": "",
            "jobName": "Web Scrape Job (Safe Mode)",
            "category": "general",
            "extractionType": "general"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "exec-7"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = TaskExecutionRequest::for_task("scrape_url", ParamMap::new())
        .with_param("url", "http://")
        .with_param("jobName", json!(null));
    let events = run(&app(&server), request).await;

    assert!(events.last().is_some_and(|e| e.is_success()));
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    // Nothing listens on the discard port.
    let app = AppBuilder::new()
        .config(config("http://127.0.0.1:9/"))
        .build()
        .unwrap();
    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new());
    let events = run(&app, request).await;

    assert_single_terminal(&events);
    match events.last() {
        Some(TaskExecutionResult::Error { message, .. }) => {
            assert!(message.starts_with("Network error:"), "{message}")
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn status_query_needs_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = app(&server).gateway.execution_status("42").await;
    match result {
        TaskExecutionResult::Error { message, .. } => assert_eq!(message, "no api key configured"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn status_query_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/executions/42"))
        .and(header("X-N8N-API-KEY", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"finished": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = AppBuilder::new()
        .config(config(&server.uri()).with_api_key("secret"))
        .build()
        .unwrap();
    match app.gateway.execution_status("42").await {
        TaskExecutionResult::Success { execution_id, result } => {
            assert_eq!(execution_id, "42");
            assert_eq!(result["finished"], true);
        }
        other => panic!("unexpected: {other:?}"),
    }
}
