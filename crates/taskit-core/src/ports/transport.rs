//! WebhookTransport ポート - HTTP の境界
//!
//! ゲートウェイはこの trait 越しにしかバックエンドと話さない。テストでは
//! スクリプト化した transport に差し替え、本番では
//! [`HttpTransport`](crate::impls::HttpTransport) を使う。

use async_trait::async_trait;

use crate::domain::TaskitError;

/// Raw answer from the backend.
///
/// `body` is `None` when the body could not be read at all; an empty body is
/// `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the workflow backend.
///
/// Only faults below HTTP (connect, timeout, broken body stream) are `Err`;
/// every status code comes back as a [`TransportResponse`].
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POST `body` as JSON to `path` (relative to the base URL).
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TaskitError>;

    /// GET `path` with the `X-N8N-API-KEY` header set.
    async fn get_with_key(&self, path: &str, api_key: &str)
    -> Result<TransportResponse, TaskitError>;
}
