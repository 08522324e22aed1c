//! ExecutionGateway - 1 回の呼び出しを 1 本の webhook 呼び出しとして実行し、Stream で観測する
//!
//! # 状態遷移
//! ```text
//! Start ──▶ Dispatch ──ok──▶ Wait ──▶ Done
//!              │                 (delay, normalize)
//!              └──err──────────────────▶ Done
//! ```
//! - Start: `Loading("", "Starting execution...")` を emit
//! - Dispatch: ルートを選び、フォームをマッピングして POST。成功なら
//!   `Loading(<server id>, "Processing...")`、失敗なら終端の `Error`
//! - Wait: タスクごとの固定時間だけ待ち、`Success` を emit。結果データを
//!   正規化できなければ `PartialSuccess`
//!
//! # 学習ポイント
//! - `stream::unfold` による明示的な状態機械
//! - Stream は cold: poll されるまで何も送信しない。drop すると呼び出しはキャンセルされる

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{Instrument, Span, error, info, info_span, warn};
use url::Url;

use super::config::{GatewayConfig, ProcessingDelays};
use crate::domain::{
    InvocationId, ResultMap, TaskExecutionRequest, TaskExecutionResult, TaskitError,
};
use crate::impls::{HttpTransport, PriorityDispatch};
use crate::ports::{Clock, DispatchStrategy, SystemClock, TransportResponse, WebhookTransport};
use crate::typed::map_request;

pub const STATUS_STARTING: &str = "Starting execution...";
pub const STATUS_PROCESSING: &str = "Processing...";

/// Response body of a webhook call.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionEnvelope {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("expected an object in `data`, found {0}")]
    NotAnObject(&'static str),
}

/// Turn the envelope's `data` into a result map.
///
/// Some workflows wrap their output in an array under a single key. When the
/// first value is a list whose first element is an object, that object is the
/// result and its `null`s become `""`. Otherwise the map is used as is, minus
/// `null` entries. Missing data is an empty result.
pub fn normalize_result(data: Option<&serde_json::Value>) -> Result<ResultMap, NormalizeError> {
    use serde_json::Value;

    let map = match data {
        None | Some(Value::Null) => return Ok(ResultMap::new()),
        Some(Value::Object(map)) => map,
        Some(other) => return Err(NormalizeError::NotAnObject(json_kind(other))),
    };

    if let Some(Value::Array(items)) = map.values().next()
        && let Some(Value::Object(first)) = items.first()
    {
        return Ok(first
            .iter()
            .map(|(k, v)| {
                let v = if v.is_null() { Value::String(String::new()) } else { v.clone() };
                (k.clone(), v)
            })
            .collect());
    }

    Ok(map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Terminal event for a successfully fetched envelope.
fn complete(envelope: &ExecutionEnvelope, raw: &str) -> TaskExecutionResult {
    match normalize_result(envelope.data.as_ref()) {
        Ok(result) => TaskExecutionResult::success(envelope.id.clone(), result),
        Err(err) => {
            let message = format!("Data parsing error: {err}");
            warn!(execution_id = %envelope.id, error = %err, "result data not normalized");
            let result = ResultMap::from([
                ("status".to_string(), "completed_with_errors".into()),
                ("error".to_string(), message.clone().into()),
                ("raw_response".to_string(), raw.into()),
            ]);
            TaskExecutionResult::PartialSuccess {
                execution_id: envelope.id.clone(),
                result,
                error: message,
            }
        }
    }
}

/// Check status and decode a 2xx body. Returns the envelope and the raw text.
fn read_envelope(response: TransportResponse) -> Result<(ExecutionEnvelope, String), TaskitError> {
    if !response.is_success() {
        let body = match response.body {
            None => "Failed to read error response".to_string(),
            Some(body) if body.trim().is_empty() => "Unknown server error".to_string(),
            Some(body) => body,
        };
        return Err(TaskitError::Status {
            status: response.status,
            body,
        });
    }

    let raw = response
        .body
        .ok_or_else(|| TaskitError::transport("failed to read response body"))?;
    if raw.trim().is_empty() {
        return Err(TaskitError::EmptyResponse);
    }
    let envelope: Option<ExecutionEnvelope> = serde_json::from_str(&raw)?;
    let envelope = envelope.ok_or(TaskitError::EmptyResponse)?;
    Ok((envelope, raw))
}

/// Runs task invocations against the workflow backend.
#[derive(Clone)]
pub struct ExecutionGateway {
    transport: Arc<dyn WebhookTransport>,
    dispatch: Arc<dyn DispatchStrategy>,
    clock: Arc<dyn Clock>,
    delays: ProcessingDelays,
    api_key: Option<String>,
}

impl ExecutionGateway {
    /// Gateway over `transport` with default routing and the system clock.
    pub fn new(transport: Arc<dyn WebhookTransport>, config: &GatewayConfig) -> Self {
        Self {
            transport,
            dispatch: Arc::new(PriorityDispatch::new()),
            clock: Arc::new(SystemClock),
            delays: config.delays,
            api_key: config.api_key.clone(),
        }
    }

    /// Production gateway: HTTP transport built from `config`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, TaskitError> {
        let transport = HttpTransport::new(
            &config.base_url,
            config.connect_timeout(),
            config.request_timeout(),
        )?;
        Ok(Self::new(Arc::new(transport), config))
    }

    pub fn with_dispatch(mut self, dispatch: Arc<dyn DispatchStrategy>) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Execute one task. See the module docs for the emitted sequence.
    pub fn execute(&self, request: TaskExecutionRequest) -> BoxStream<'static, TaskExecutionResult> {
        let id = InvocationId::new();
        let span = info_span!("execute", invocation = %id, task_id = %request.task_id);
        let invocation = Invocation {
            delay: self.delays.for_task(&request.task_id),
            request,
            gateway: self.clone(),
            span,
        };
        stream::unfold(Step::Start(invocation), Step::advance).boxed()
    }

    /// Query the backend for the state of a run.
    ///
    /// Needs an api key; without one this fails without touching the network.
    pub async fn execution_status(&self, execution_id: &str) -> TaskExecutionResult {
        let Some(api_key) = self.api_key.as_deref() else {
            return TaskExecutionResult::from_error(TaskitError::MissingApiKey);
        };
        let fetched = async {
            let path = status_path(execution_id)?;
            let response = self.transport.get_with_key(&path, api_key).await?;
            read_envelope(response)
        }
        .await;

        match fetched {
            Ok((mut envelope, raw)) => {
                if envelope.id.is_empty() {
                    envelope.id = execution_id.to_string();
                }
                complete(&envelope, &raw)
            }
            Err(err) => {
                warn!(execution_id, error = %err, "status query failed");
                TaskExecutionResult::from_error(err)
            }
        }
    }

    async fn dispatch(
        &self,
        request: &TaskExecutionRequest,
    ) -> Result<(ExecutionEnvelope, String), TaskitError> {
        let route = self.dispatch.select(request);
        let mapped = map_request(&route, request, self.clock.today());
        let body = mapped.body()?;
        let response = self.transport.post_json(&mapped.path(), &body).await?;
        read_envelope(response)
    }
}

/// `api/v1/executions/{id}` with the id percent-encoded as a single segment.
fn status_path(execution_id: &str) -> Result<String, TaskitError> {
    let mut url = Url::parse("http://status.invalid/")?;
    url.path_segments_mut()
        .map_err(|()| TaskitError::transport("cannot build status path"))?
        .clear()
        .extend(["api", "v1", "executions", execution_id]);
    Ok(url.path().trim_start_matches('/').to_string())
}

struct Invocation {
    request: TaskExecutionRequest,
    gateway: ExecutionGateway,
    delay: Duration,
    span: Span,
}

enum Step {
    Start(Invocation),
    Dispatch(Invocation),
    Wait {
        invocation: Invocation,
        envelope: ExecutionEnvelope,
        raw: String,
    },
    Done,
}

impl Step {
    async fn advance(self) -> Option<(TaskExecutionResult, Step)> {
        match self {
            Step::Start(invocation) => {
                invocation.span.in_scope(|| info!("execution started"));
                Some((
                    TaskExecutionResult::loading("", STATUS_STARTING),
                    Step::Dispatch(invocation),
                ))
            }
            Step::Dispatch(invocation) => {
                let span = invocation.span.clone();
                let dispatched = invocation
                    .gateway
                    .dispatch(&invocation.request)
                    .instrument(span.clone())
                    .await;
                match dispatched {
                    Ok((envelope, raw)) => {
                        let event =
                            TaskExecutionResult::loading(envelope.id.clone(), STATUS_PROCESSING);
                        Some((
                            event,
                            Step::Wait {
                                invocation,
                                envelope,
                                raw,
                            },
                        ))
                    }
                    Err(err) => {
                        span.in_scope(|| match &err {
                            TaskitError::Status { status, .. } => {
                                warn!(status, "execution rejected by server")
                            }
                            TaskitError::EmptyResponse => warn!("empty response"),
                            other => error!(error = %other, "execution failed"),
                        });
                        Some((TaskExecutionResult::from_error(err), Step::Done))
                    }
                }
            }
            Step::Wait {
                invocation,
                envelope,
                raw,
            } => {
                let span = invocation.span;
                async {
                    tokio::time::sleep(invocation.delay).await;
                    let result = complete(&envelope, &raw);
                    let partial = matches!(result, TaskExecutionResult::PartialSuccess { .. });
                    info!(execution_id = %envelope.id, partial, "execution finished");
                    Some((result, Step::Done))
                }
                .instrument(span)
                .await
            }
            Step::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_wrapped_data_takes_first_element() {
        let data = json!({"output": [{"summary": "ok", "link": null}, {"summary": "ignored"}]});
        let result = normalize_result(Some(&data)).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result["summary"], "ok");
        assert_eq!(result["link"], "");
    }

    #[test]
    fn plain_data_drops_nulls() {
        let data = json!({"subject": "Hi", "cc": null, "sent": true});
        let result = normalize_result(Some(&data)).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result["sent"], true);
        assert!(!result.contains_key("cc"));
    }

    #[test]
    fn first_value_decides_unwrapping() {
        let data = json!({"title": "x", "items": [{"a": 1}]});
        let result = normalize_result(Some(&data)).unwrap();
        assert_eq!(result["title"], "x");
        assert_eq!(result["items"], json!([{"a": 1}]));
    }

    #[test]
    fn empty_array_keeps_raw_map() {
        let data = json!({"rows": []});
        let result = normalize_result(Some(&data)).unwrap();
        assert_eq!(result["rows"], json!([]));
    }

    #[test]
    fn missing_data_is_empty_result() {
        assert!(normalize_result(None).unwrap().is_empty());
        assert!(normalize_result(Some(&json!(null))).unwrap().is_empty());
    }

    #[test]
    fn non_object_data_is_rejected() {
        let err = normalize_result(Some(&json!("done"))).unwrap_err();
        assert!(matches!(err, NormalizeError::NotAnObject("a string")));
    }

    #[test]
    fn complete_degrades_to_partial_success() {
        let envelope = ExecutionEnvelope {
            id: "exec-9".into(),
            status: Some("success".into()),
            data: Some(json!([1, 2])),
            error: None,
        };
        match complete(&envelope, "{\"id\":\"exec-9\",\"data\":[1,2]}") {
            TaskExecutionResult::PartialSuccess {
                execution_id,
                result,
                error,
            } => {
                assert_eq!(execution_id, "exec-9");
                assert_eq!(result["status"], "completed_with_errors");
                assert!(error.starts_with("Data parsing error:"));
                assert!(result["raw_response"].as_str().unwrap().contains("exec-9"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn error_body_placeholders() {
        let unreadable = TransportResponse { status: 502, body: None };
        assert_eq!(
            read_envelope(unreadable).unwrap_err().to_string(),
            "Server error: 502 - Failed to read error response"
        );
        let blank = TransportResponse::new(404, "");
        assert_eq!(
            read_envelope(blank).unwrap_err().to_string(),
            "Server error: 404 - Unknown server error"
        );
    }

    #[test]
    fn status_path_keeps_id_in_one_segment() {
        assert_eq!(status_path("42").unwrap(), "api/v1/executions/42");

        let path = status_path("../../webhook/email-task?x=1").unwrap();
        let segments: Vec<&str> = path.split('/').collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(&segments[..3], ["api", "v1", "executions"]);
        assert!(!path.contains('?'));
        assert!(segments[3].starts_with("..%2F"));
    }

    #[test]
    fn null_body_is_empty_response() {
        let err = read_envelope(TransportResponse::new(200, "null")).unwrap_err();
        assert!(matches!(err, TaskitError::EmptyResponse));
    }
}
