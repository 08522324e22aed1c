//! HttpTransport - reqwest による WebhookTransport 実装

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::TaskitError;
use crate::ports::{TransportResponse, WebhookTransport};

pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// `base_url` is the root every webhook path is joined onto.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TaskitError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| TaskitError::transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, TaskitError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn read(response: reqwest::Response) -> TransportResponse {
        let status = response.status().as_u16();
        let body = response.text().await.ok();
        TransportResponse { status, body }
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TaskitError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TaskitError::transport(e.to_string()))?;
        Ok(Self::read(response).await)
    }

    async fn get_with_key(
        &self,
        path: &str,
        api_key: &str,
    ) -> Result<TransportResponse, TaskitError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| TaskitError::transport(e.to_string()))?;
        Ok(Self::read(response).await)
    }
}
