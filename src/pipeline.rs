//! Pipeline executor for the three-stage analysis workflow.
//!
//! Execution is a strict left-to-right fold: each stage reads the current
//! state, issues exactly one generation call, and its partial update is
//! merged into the next snapshot. A stage failure short-circuits the run;
//! later stages never execute and no partial result is returned.

use crate::client::TextGenerator;
use crate::error::{PipelineError, Result};
use crate::stage::Stage;
use crate::state::{AnalysisReport, AnalysisState};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Progress notification emitted at the start of each stage.
#[derive(Debug, Clone)]
pub struct StageProgress {
    pub stage_index: usize,
    pub total_stages: usize,
    pub stage_name: &'static str,
}

/// The fixed, ordered composition of stages executed per request.
///
/// Assemble once (per process or per request, equivalently) and share
/// across requests; each run owns its own [`AnalysisState`].
pub struct Pipeline {
    stages: Vec<Stage>,
    cancellation: Option<Arc<AtomicBool>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field(
                "stages",
                &self.stages.iter().map(|s| s.name).collect::<Vec<_>>(),
            )
            .field("has_cancellation", &self.cancellation.is_some())
            .finish()
    }
}

impl Pipeline {
    /// The standard analysis pipeline:
    /// classify → extract_entities → summarize.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Stage::classify(),
                Stage::extract_entities(),
                Stage::summarize(),
            ],
            cancellation: None,
        }
    }

    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Get a reference to the pipeline's stages.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    fn check_cancelled(&self, stage: &'static str) -> Result<()> {
        if let Some(ref cancel) = self.cancellation {
            if cancel.load(Ordering::Relaxed) {
                return Err(PipelineError::Cancelled { stage });
            }
        }
        Ok(())
    }

    /// Execute the pipeline against an initial state.
    pub async fn execute(
        &self,
        client: &dyn TextGenerator,
        state: AnalysisState,
    ) -> Result<AnalysisReport> {
        self.execute_with_progress(client, state, |_| {}).await
    }

    /// Execute the pipeline with a progress callback.
    ///
    /// The callback is invoked at the start of each stage.
    pub async fn execute_with_progress<F>(
        &self,
        client: &dyn TextGenerator,
        state: AnalysisState,
        mut on_progress: F,
    ) -> Result<AnalysisReport>
    where
        F: FnMut(StageProgress),
    {
        let total_stages = self.stages.len();
        let mut state = state;

        for (idx, stage) in self.stages.iter().enumerate() {
            self.check_cancelled(stage.name)?;

            on_progress(StageProgress {
                stage_index: idx,
                total_stages,
                stage_name: stage.name,
            });

            let prompt = stage.render_prompt(state.text());
            let raw = client
                .generate(&prompt)
                .await
                .map_err(|source| PipelineError::Generation {
                    stage: stage.name,
                    source,
                })?;

            state = state.merge(stage.parse_response(&raw));
        }

        state.into_report()
    }
}

/// Builder for creating pipelines.
pub struct PipelineBuilder {
    stages: Vec<Stage>,
    cancellation: Option<Arc<AtomicBool>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            cancellation: None,
        }
    }

    /// Add a stage to the pipeline.
    pub fn add_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Set a cancellation flag that can be used to abort execution.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(cancel);
        self
    }

    /// Build the pipeline, validating configuration.
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(PipelineError::InvalidConfig(
                "pipeline must have at least one stage".to_string(),
            ));
        }

        Ok(Pipeline {
            stages: self.stages,
            cancellation: self.cancellation,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
