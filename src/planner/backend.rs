//! The vendor collaborator contract (spec §6 "LLM collaborator contract"),
//! kept behind a trait so tests substitute a scripted backend instead of a
//! live network call — the same shape the teacher uses for its Postgres
//! pool and forwarder command channel: a handle tests construct directly.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum PlannerError {
    #[error("planner backend network error: {0}")]
    Network(String),
    #[error("planner backend returned an empty response")]
    EmptyResponse,
}

#[async_trait]
pub trait PlannerBackend: Send + Sync {
    /// Sends `prompt` to the remote chat-style completion API and returns
    /// its raw text body (spec §6: "given a prompt, returns a single text
    /// body"). The only semantics callers rely on is that, on success, the
    /// text contains a `$$$...$$$`-delimited JSON array somewhere in it.
    async fn complete(&self, prompt: String) -> Result<String, PlannerError>;
}

/// Production backend: an HTTP POST to a configured completion endpoint.
pub struct ReqwestPlannerBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl ReqwestPlannerBackend {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("reqwest client builds with default TLS backend"),
            endpoint: endpoint.into(),
            api_key,
            model: model.into(),
        }
    }
}

#[async_trait]
impl PlannerBackend for ReqwestPlannerBackend {
    async fn complete(&self, prompt: String) -> Result<String, PlannerError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "model": self.model, "prompt": prompt }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| PlannerError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlannerError::Network(format!("upstream status {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|err| PlannerError::Network(err.to_string()))?;

        if text.trim().is_empty() {
            return Err(PlannerError::EmptyResponse);
        }
        Ok(text)
    }
}
