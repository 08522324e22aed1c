//! ゲートウェイ設定
//!
//! すべての値にデフォルトがあり、`GatewayConfig::default()` が本番設定。
//! テストと CLI は個別のフィールドだけを上書きする。

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jgyhfkshmani67789.app.n8n.cloud/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Whole-call budget, covering send and body read.
    pub request_timeout_secs: u64,
    pub delays: ProcessingDelays,
    /// Key for the execution status endpoint. Status queries fail without it.
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            delays: ProcessingDelays::default(),
            api_key: None,
        }
    }
}

impl GatewayConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_delays(mut self, delays: ProcessingDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Fixed wait after a successful dispatch, before the result is read.
///
/// The backend runs workflows asynchronously; the wait gives it time to
/// finish. It is not a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingDelays {
    pub default_ms: u64,
    pub summarize_video_ms: u64,
    pub scrape_url_ms: u64,
}

impl Default for ProcessingDelays {
    fn default() -> Self {
        Self {
            default_ms: 2000,
            summarize_video_ms: 5000,
            scrape_url_ms: 8000,
        }
    }
}

impl ProcessingDelays {
    /// No waiting at all.
    pub fn none() -> Self {
        Self {
            default_ms: 0,
            summarize_video_ms: 0,
            scrape_url_ms: 0,
        }
    }

    pub fn for_task(&self, task_id: &str) -> Duration {
        let ms = match task_id {
            "summarize_video" => self.summarize_video_ms,
            "scrape_url" => self.scrape_url_ms,
            _ => self.default_ms,
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_by_task() {
        let delays = ProcessingDelays::default();
        assert_eq!(delays.for_task("scrape_url"), Duration::from_secs(8));
        assert_eq!(delays.for_task("summarize_video"), Duration::from_secs(5));
        assert_eq!(delays.for_task("send_email"), Duration::from_secs(2));
        assert_eq!(ProcessingDelays::none().for_task("scrape_url"), Duration::ZERO);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:5678/","delays":{"default_ms":10}}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:5678/");
        assert_eq!(config.connect_timeout(), Duration::from_secs(15));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.delays.default_ms, 10);
        assert_eq!(config.delays.scrape_url_ms, 8000);
        assert_eq!(config.api_key, None);
    }
}
