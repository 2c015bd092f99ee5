//! # text-analyzer
//!
//! Ollama-backed text analysis service: classification, entity extraction,
//! and one-sentence summaries behind a single HTTP endpoint.
//!
//! Free-form text flows through a fixed three-stage pipeline — classify →
//! extract_entities → summarize — where each stage makes exactly one
//! generation call and contributes exactly one field to the shared state
//! record. The run either completes with all fields populated or fails at
//! the offending stage; partial results are never returned.
//!
//! ## Features
//!
//! - **Linear stage pipeline** — a strict left-to-right fold over an
//!   append-only state record, with short-circuit on the first failure
//! - **Swappable generation backend** — stages depend on the narrow
//!   [`TextGenerator`] capability, so tests run against a scripted stub
//!   instead of a live model
//! - **Reasoning-model aware** — `<think>` blocks are stripped before
//!   stage post-processing
//! - **Cancellation** — interrupt a run between stages via a shared
//!   `AtomicBool`
//! - **HTTP surface** — `POST /analyze` and a `GET /` health probe
//!   (actix-web), each request with its own independent pipeline run
//!
//! ## Quick Start
//!
//! ```no_run
//! use text_analyzer::{AnalysisState, OllamaClient, OllamaConfig, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OllamaClient::new(
//!         OllamaConfig::with_model("deepseek-r1:1.5b").endpoint("http://localhost:11434"),
//!     );
//!
//!     let pipeline = Pipeline::standard();
//!     let state = AnalysisState::new("The Eiffel Tower is in Paris.")?;
//!     let report = pipeline.execute(&client, state).await?;
//!
//!     println!("{}: {}", report.classification, report.summary);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod server;
pub mod stage;
pub mod state;

pub use client::{OllamaClient, TextGenerator};
pub use config::{OllamaConfig, ServiceConfig};
pub use error::{GenerationError, PipelineError, Result};
pub use pipeline::{Pipeline, PipelineBuilder, StageProgress};
pub use stage::Stage;
pub use state::{AnalysisReport, AnalysisState, StateUpdate};
