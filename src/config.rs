use crate::error::{PipelineError, Result};
use std::env;
use std::time::Duration;

/// Configuration for the Ollama generation backend.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Ollama API endpoint (e.g., "http://localhost:11434")
    pub endpoint: String,
    /// Model name (e.g., "deepseek-r1:1.5b", "llama3")
    pub model: String,
    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f64,
    /// Request timeout (default: 120s)
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://ollama_server:11434".to_string(),
            model: "deepseek-r1:1.5b".to_string(),
            temperature: 0.0,
            timeout: Duration::from_secs(120),
        }
    }
}

impl OllamaConfig {
    /// Create a new config with the given model name.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the Ollama endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address for the HTTP server.
    pub host: String,
    /// Bind port for the HTTP server.
    pub port: u16,
    /// Generation backend settings.
    pub ollama: OllamaConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            ollama: OllamaConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `ANALYZER_HOST`, `ANALYZER_PORT`,
    /// `OLLAMA_ENDPOINT`, `OLLAMA_MODEL`, `OLLAMA_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("ANALYZER_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("ANALYZER_PORT") {
            config.port = port.parse().map_err(|_| {
                PipelineError::InvalidConfig(format!("ANALYZER_PORT is not a valid port: {port}"))
            })?;
        }
        if let Ok(endpoint) = env::var("OLLAMA_ENDPOINT") {
            config.ollama.endpoint = endpoint;
        }
        if let Ok(model) = env::var("OLLAMA_MODEL") {
            config.ollama.model = model;
        }
        if let Ok(secs) = env::var("OLLAMA_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                PipelineError::InvalidConfig(format!(
                    "OLLAMA_TIMEOUT_SECS is not a valid duration: {secs}"
                ))
            })?;
            config.ollama.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.ollama.endpoint, "http://ollama_server:11434");
        assert_eq!(config.ollama.model, "deepseek-r1:1.5b");
        assert_eq!(config.ollama.temperature, 0.0);
        assert_eq!(config.ollama.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_ollama_config_setters() {
        let config = OllamaConfig::with_model("llama3")
            .endpoint("http://localhost:11434")
            .temperature(0.2)
            .timeout(Duration::from_secs(30));
        assert_eq!(config.model, "llama3");
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    // Environment access is process-global, so all from_env assertions live
    // in one test to avoid races under the parallel test runner.
    #[test]
    fn test_from_env() {
        env::set_var("ANALYZER_HOST", "127.0.0.1");
        env::set_var("ANALYZER_PORT", "9001");
        env::set_var("OLLAMA_ENDPOINT", "http://localhost:11434");
        env::set_var("OLLAMA_MODEL", "llama3");
        env::set_var("OLLAMA_TIMEOUT_SECS", "15");

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9001);
        assert_eq!(config.ollama.endpoint, "http://localhost:11434");
        assert_eq!(config.ollama.model, "llama3");
        assert_eq!(config.ollama.timeout, Duration::from_secs(15));

        env::set_var("ANALYZER_PORT", "not-a-port");
        let result = ServiceConfig::from_env();
        assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));

        env::remove_var("ANALYZER_HOST");
        env::remove_var("ANALYZER_PORT");
        env::remove_var("OLLAMA_ENDPOINT");
        env::remove_var("OLLAMA_MODEL");
        env::remove_var("OLLAMA_TIMEOUT_SECS");
    }
}
