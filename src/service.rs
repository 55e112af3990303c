// SPDX-License-Identifier: MIT
//! HTTP client for the assist service.
//!
//! Every endpoint takes the same request — POST with a JSON body
//! holding the selection under `"code"` — and returns a JSON body
//! that is decoded but otherwise left untyped for
//! [`crate::normalize`] to classify. One call per invocation, no
//! retry; the client timeout is the only thing bounding a request.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::AssistConfig;
use crate::endpoint::Endpoint;

/// Transport-level failures, reported verbatim to the user.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("service returned HTTP {0}")]
    Status(StatusCode),
    #[error("could not decode service reply: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Outbound contract of the command core. Implemented by [`HttpClient`]
/// in production and by canned doubles in tests.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// POST the selection to the endpoint and decode the JSON reply.
    async fn request(&self, endpoint: Endpoint, code: &str) -> Result<Value>;
}

pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &AssistConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.service_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl ServiceClient for HttpClient {
    async fn request(&self, endpoint: Endpoint, code: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!(endpoint = %endpoint, url = %url, chars = code.chars().count(), "sending selection to service");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "code": code }))
            .send()
            .await
            .map_err(ServiceError::Network)?;

        let response = response.error_for_status().map_err(|e| match e.status() {
            Some(status) => ServiceError::Status(status),
            None => ServiceError::Network(e),
        })?;

        let body: Value = response.json().await.map_err(ServiceError::Decode)?;
        debug!(endpoint = %endpoint, "service reply decoded");
        Ok(body)
    }
}
