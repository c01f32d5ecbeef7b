//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API.
//!
//! # Features
//!
//! - Async HTTP communication with Ollama API
//! - Configurable endpoint, model and timeouts
//! - Single attempt per request; callers decide what a failure means
//! - Reachability probe against the service root
//!
//! # Examples
//!
//! ```no_run
//! use digest_llm::OllamaProvider;
//!
//! let provider = OllamaProvider::try_new("http://localhost:11434", "llama3.2").unwrap();
//! ```

use crate::LlmError;
use digest_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default timeout for generation requests (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default timeout for the reachability probe
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Ollama API provider for local LLM inference
///
/// This provider communicates with a local Ollama instance to generate text.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    timeout: Duration,
    probe_timeout: Duration,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[serde(default)]
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3.2", "mistral")
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Transport` if the HTTP client cannot be built.
    pub fn try_new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint: String = endpoint.into();

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        })
    }

    /// Create a new Ollama provider against `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::try_new(DEFAULT_ENDPOINT, model)
    }

    /// Set the generation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the reachability probe timeout
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Base address requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate text using Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running (`Connection`)
    /// - The request exceeds the timeout (`Timeout`)
    /// - The server answers with a non-success status (`Status`)
    /// - The body is not a generate response (`InvalidResponse`)
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("POST {} (model: {}, prompt: {} chars)", url, self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(e, self.timeout))?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::InvalidResponse(format!("Failed to parse response: {} (body: {})", e, body))
        })?;

        Ok(parsed.response)
    }

    /// Probe the service root with a short timeout
    pub async fn health_check(&self) -> Result<(), LlmError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| self.classify(e, self.probe_timeout))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(LlmError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn classify(&self, err: reqwest::Error, timeout: Duration) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout(timeout)
        } else if err.is_connect() {
            LlmError::Connection {
                endpoint: self.endpoint.clone(),
                message: err.to_string(),
            }
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}

impl LlmProviderTrait for OllamaProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        OllamaProvider::generate(self, prompt).await
    }

    async fn health_check(&self) -> Result<(), Self::Error> {
        OllamaProvider::health_check(self).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
