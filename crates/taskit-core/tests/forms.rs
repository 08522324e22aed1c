use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use taskit_core::catalog::ParameterCatalog;
use taskit_core::domain::{ParamMap, TaskExecutionRequest};
use taskit_core::impls::{PerTaskDispatch, PriorityDispatch};
use taskit_core::ports::DispatchStrategy;
use taskit_core::typed::{Route, TaskFamily, TaskRequest, map_request};
use taskit_core::validation::FormValidator;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn validator() -> FormValidator {
    FormValidator::new(Arc::new(ParameterCatalog::builtin())).unwrap()
}

#[test]
fn email_validates_and_maps_with_default_tone() {
    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new())
        .with_param("recipientEmail", "a@b.com")
        .with_param("content", "Hello there, this is a test.");
    assert!(validator().validate(&request.task_id, &request.parameters));

    let route = PriorityDispatch.select(&request);
    assert_eq!(route, Route::Family(TaskFamily::Email));
    match map_request(&route, &request, today()) {
        TaskRequest::Email(email) => {
            assert_eq!(email.recipient_email, "a@b.com");
            assert_eq!(email.tone, "professional");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn empty_recipient_fails_validation() {
    let request = TaskExecutionRequest::for_task("send_email", ParamMap::new())
        .with_param("recipientEmail", "")
        .with_param("content", "Hello there, this is a test.");
    assert!(!validator().validate(&request.task_id, &request.parameters));
}

#[test]
fn every_catalog_task_maps_an_empty_form() {
    let catalog = ParameterCatalog::builtin();
    let dispatch = PerTaskDispatch::new();
    for task_id in catalog.task_ids() {
        let request = TaskExecutionRequest::for_task(task_id, ParamMap::new());
        let route = dispatch.select(&request);
        assert!(matches!(route, Route::Family(_)), "{task_id} has no family");
        let mapped = map_request(&route, &request, today());
        assert!(mapped.body().unwrap().is_object(), "{task_id}");
    }
}

#[test]
fn scraper_with_missing_url_and_job_name_uses_safe_mode() {
    let request = TaskExecutionRequest::for_task("scrape_url", ParamMap::new())
        .with_param("category", json!(["not", "a", "string"]));
    let route = PriorityDispatch.select(&request);
    match map_request(&route, &request, today()) {
        TaskRequest::WebScraper(req) => {
            assert_eq!(req.job_name, "Web Scrape Job (Safe Mode)");
            assert_eq!(req.url, "");
        }
        other => panic!("unexpected: {other:?}"),
    }
}
