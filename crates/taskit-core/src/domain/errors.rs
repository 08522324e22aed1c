//! 実行パイプライン内で発生するエラー
//!
//! どれも `ExecutionGateway::execute` の外には出ない。ゲートウェイが
//! 終端の [`TaskExecutionResult::Error`](super::TaskExecutionResult) に畳み込む。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskitError {
    /// Connection failure, timeout, or any other fault below HTTP.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },

    /// 2xx with no (or a `null`) body.
    #[error("Empty response from server")]
    EmptyResponse,

    /// The body is not a valid execution envelope.
    #[error("invalid response envelope: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no api key configured")]
    MissingApiKey,
}

impl TaskitError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Text shown to the user for a failed execution.
    pub fn user_message(&self) -> String {
        match self {
            TaskitError::Status { .. } | TaskitError::EmptyResponse | TaskitError::MissingApiKey => {
                self.to_string()
            }
            other => format!("Network error: {other}"),
        }
    }
}
