//! TaskSession - 1 タスク分のフォームと実行状態
//!
//! フォームの値、フィールドごとのエラー、実行中の進捗を保持し、
//! 変更のたびに `watch` チャネルで publish する。表示側は subscribe して
//! 最新の [`SessionState`] をそのまま描画すればよい。

use futures::StreamExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::gateway::ExecutionGateway;
use crate::domain::{
    TaskExecutionRequest, TaskExecutionResult, TaskParameter, params_from_strings,
};
use crate::validation::FormValidator;

pub const STATUS_COMPLETED: &str = "Completed successfully";
pub const STATUS_FAILED: &str = "Failed";

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub task_id: String,
    pub parameters: Vec<TaskParameter>,
    pub values: BTreeMap<String, String>,
    pub field_errors: BTreeMap<String, String>,
    pub is_executing: bool,
    /// 0.0 idle or failed, 0.5 running, 1.0 done.
    pub progress: f32,
    pub status: Option<String>,
    pub error: Option<String>,
    /// Latest event of the current execution.
    pub result: Option<TaskExecutionResult>,
}

pub struct TaskSession {
    gateway: ExecutionGateway,
    validator: Arc<FormValidator>,
    state: watch::Sender<SessionState>,
}

impl TaskSession {
    pub fn new(gateway: ExecutionGateway, validator: Arc<FormValidator>) -> Self {
        Self {
            gateway,
            validator,
            state: watch::Sender::new(SessionState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Load the form of `task_id` and seed each field with its default.
    ///
    /// Unknown ids get an empty form.
    pub fn initialize(&self, task_id: &str) {
        let parameters = self.validator.catalog().parameters_for(task_id).to_vec();
        let values = parameters
            .iter()
            .map(|p| (p.key.clone(), p.default_value.clone().unwrap_or_default()))
            .collect();
        self.state.send_replace(SessionState {
            task_id: task_id.to_string(),
            parameters,
            values,
            ..SessionState::default()
        });
    }

    /// Store a field value and re-check that field.
    pub fn update_field(&self, key: &str, value: &str) {
        self.state.send_modify(|s| {
            s.values.insert(key.to_string(), value.to_string());
            s.field_errors.remove(key);
            let error = s
                .parameters
                .iter()
                .find(|p| p.key == key)
                .and_then(|p| self.validator.validate_field(p, value));
            if let Some(error) = error {
                s.field_errors.insert(key.to_string(), error);
            }
        });
    }

    /// Validate the whole form and, if it passes, run the task to completion.
    ///
    /// Returns the terminal event, or `None` when nothing was executed (no
    /// task initialized, or the form has errors).
    pub async fn execute(&self) -> Option<TaskExecutionResult> {
        let (task_id, values) = {
            let s = self.state.borrow();
            (s.task_id.clone(), params_from_strings(&s.values))
        };
        if task_id.is_empty() {
            warn!("execute called before initialize");
            return None;
        }

        let errors = self.validator.validate_form(&task_id, &values);
        let invalid = !errors.is_empty();
        self.state.send_modify(|s| s.field_errors = errors);
        if invalid {
            warn!(task_id = %task_id, "form has errors, not executing");
            return None;
        }

        self.state.send_modify(|s| {
            s.is_executing = true;
            s.error = None;
        });

        let request = TaskExecutionRequest::for_task(task_id, values);
        let mut events = self.gateway.execute(request);
        let mut terminal = None;
        while let Some(event) = events.next().await {
            debug!(?event, "execution event");
            self.state.send_modify(|s| apply(s, &event));
            if event.is_terminal() {
                terminal = Some(event);
            }
        }
        terminal
    }

    /// Drop the last result and reset progress. Form values stay.
    pub fn clear_result(&self) {
        self.state.send_modify(|s| {
            s.result = None;
            s.progress = 0.0;
            s.status = None;
            s.error = None;
        });
    }

    pub async fn retry(&self) -> Option<TaskExecutionResult> {
        self.clear_result();
        self.execute().await
    }
}

fn apply(state: &mut SessionState, event: &TaskExecutionResult) {
    match event {
        TaskExecutionResult::Loading { status, .. } => {
            state.progress = 0.5;
            state.status = Some(status.clone());
        }
        TaskExecutionResult::Success { .. } | TaskExecutionResult::PartialSuccess { .. } => {
            state.is_executing = false;
            state.progress = 1.0;
            state.status = Some(STATUS_COMPLETED.to_string());
        }
        TaskExecutionResult::Error { message, .. } => {
            state.is_executing = false;
            state.progress = 0.0;
            state.status = Some(STATUS_FAILED.to_string());
            state.error = Some(message.clone());
        }
    }
    state.result = Some(event.clone());
}
