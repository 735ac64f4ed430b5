use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::config::ExecutionConfig;
use crate::error::ExecutionError;

/// Something that compiles and runs source text remotely.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Send `code` for execution and return the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError` when the endpoint cannot be reached or its
    /// body is not the expected JSON.
    async fn execute(&self, code: &str) -> Result<ExecutionResponse, ExecutionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub content: String,
}

impl ExecutionRequest {
    #[must_use]
    pub fn new(config: &ExecutionConfig, code: &str) -> Self {
        Self {
            language: config.language.clone(),
            version: config.version.clone(),
            files: vec![SourceFile {
                content: code.to_string(),
            }],
        }
    }
}

/// Fields of the endpoint's reply that are consumed; the rest is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExecutionResponse {
    #[serde(default)]
    pub run: Option<RunResult>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
}

/// `CodeExecutor` for the Piston execution API.
///
/// Non-2xx replies are still decoded: the endpoint reports its own errors in
/// a `message` field.
#[derive(Clone)]
pub struct PistonExecutor {
    client: Client,
    config: ExecutionConfig,
}

impl PistonExecutor {
    #[must_use]
    pub fn new(config: ExecutionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CodeExecutor for PistonExecutor {
    async fn execute(&self, code: &str) -> Result<ExecutionResponse, ExecutionError> {
        let payload = ExecutionRequest::new(&self.config, code);
        tracing::debug!(
            endpoint = %self.config.endpoint,
            language = %payload.language,
            bytes = code.len(),
            "sending code for execution"
        );

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body: ExecutionResponse = response.json().await?;
        tracing::debug!(%status, "execution response received");
        Ok(body)
    }
}
