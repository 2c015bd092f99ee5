use thiserror::Error;

/// Errors from a single generation call against the model backend.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("cannot connect to Ollama at {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    #[error("Ollama returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid response from Ollama: {0}")]
    InvalidResponse(String),

    #[error("model returned an empty response")]
    Empty,
}

/// Errors from a pipeline run as a whole.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input text must not be empty")]
    EmptyInput,

    #[error("stage '{stage}' failed: {source}")]
    Generation {
        stage: &'static str,
        #[source]
        source: GenerationError,
    },

    #[error("pipeline was cancelled before stage '{stage}'")]
    Cancelled { stage: &'static str },

    #[error("pipeline finished without producing '{0}'")]
    Incomplete(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
