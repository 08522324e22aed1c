//! 実行イベント - ゲートウェイが emit するものすべての型
//!
//! 1 回の呼び出しは 1 つ以上の `Loading` と、その後に続くちょうど 1 つの
//! 終端イベント（`Success` / `PartialSuccess` / `Error`）を返す。

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::errors::TaskitError;

/// Result payload returned by a workflow run.
pub type ResultMap = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskExecutionResult {
    /// Work in progress. `execution_id` is empty until the backend assigns one.
    Loading { execution_id: String, status: String },

    Success { execution_id: String, result: ResultMap },

    /// The remote run completed but its output could not be normalized.
    ///
    /// `result` holds a diagnostic payload (`status = "completed_with_errors"`,
    /// the parse error and the raw body) instead of the workflow output.
    PartialSuccess {
        execution_id: String,
        result: ResultMap,
        error: String,
    },

    Error {
        message: String,
        #[serde(skip)]
        cause: Option<Arc<TaskitError>>,
    },
}

impl TaskExecutionResult {
    pub fn loading(execution_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self::Loading {
            execution_id: execution_id.into(),
            status: status.into(),
        }
    }

    pub fn success(execution_id: impl Into<String>, result: ResultMap) -> Self {
        Self::Success {
            execution_id: execution_id.into(),
            result,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: None,
        }
    }

    /// Terminal error built from a pipeline failure.
    pub fn from_error(err: TaskitError) -> Self {
        Self::Error {
            message: err.user_message(),
            cause: Some(Arc::new(err)),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::PartialSuccess { .. })
    }

    pub fn execution_id(&self) -> Option<&str> {
        match self {
            Self::Loading { execution_id, .. }
            | Self::Success { execution_id, .. }
            | Self::PartialSuccess { execution_id, .. } => Some(execution_id),
            Self::Error { .. } => None,
        }
    }

    pub fn result(&self) -> Option<&ResultMap> {
        match self {
            Self::Success { result, .. } | Self::PartialSuccess { result, .. } => Some(result),
            _ => None,
        }
    }
}
