use crate::config::OllamaConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use serde_json::{json, Value};

/// The generation capability the pipeline depends on.
///
/// One prompt in, one response out. Implementations may be shared across
/// concurrent requests and must hold no per-request state. Tests swap in a
/// scripted implementation instead of a live backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

/// Generation client backed by Ollama's `/api/generate` endpoint.
pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let body = json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
            },
        });

        let url = format!(
            "{}/api/generate",
            self.config.endpoint.trim_end_matches('/')
        );
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Connection {
                endpoint: self.config.endpoint.clone(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Http { status, body });
        }

        let envelope: Value = resp
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let raw = envelope
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                GenerationError::InvalidResponse("missing 'response' field".to_string())
            })?;

        // Reasoning models prepend <think> blocks; stages only see the answer.
        let cleaned = strip_think_tags(raw).trim().to_string();
        if cleaned.is_empty() {
            return Err(GenerationError::Empty);
        }

        Ok(cleaned)
    }
}

/// Strip `<think>...</think>` blocks emitted by reasoning models.
///
/// An unclosed block is stripped to the end of the text.
pub fn strip_think_tags(text: &str) -> String {
    let mut result = text.to_string();
    while let Some(start) = result.find("<think>") {
        match result[start..].find("</think>") {
            Some(end) => {
                result = format!(
                    "{}{}",
                    &result[..start],
                    &result[start + end + "</think>".len()..]
                );
            }
            None => {
                result.truncate(start);
                break;
            }
        }
    }
    result
}
