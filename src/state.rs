//! Per-request analysis state and the partial updates stages produce.
//!
//! [`AnalysisState`] is a fixed record: `text` is set once at construction
//! and each analysis field starts as `None` and is filled in by exactly one
//! stage. Merging produces a new snapshot rather than mutating in place, so
//! a state can never lose a field it already holds.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// The state record threaded through one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    text: String,
    classification: Option<String>,
    entities: Option<Vec<String>>,
    summary: Option<String>,
}

impl AnalysisState {
    /// Create the initial state for one request.
    ///
    /// Fails with [`PipelineError::EmptyInput`] if the text is empty or
    /// whitespace-only, so invalid input is rejected before any stage runs.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        Ok(Self {
            text,
            classification: None,
            entities: None,
            summary: None,
        })
    }

    /// The input text, fixed for the lifetime of the state.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    pub fn entities(&self) -> Option<&[String]> {
        self.entities.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Merge a partial update into this state, producing the next snapshot.
    ///
    /// Fields named in the update are set; everything else is carried over
    /// unchanged. An empty update is the identity.
    pub fn merge(self, update: StateUpdate) -> Self {
        Self {
            text: self.text,
            classification: update.classification.or(self.classification),
            entities: update.entities.or(self.entities),
            summary: update.summary.or(self.summary),
        }
    }

    /// Convert a completed state into the final report.
    ///
    /// Fails with [`PipelineError::Incomplete`] if any stage output is
    /// missing; a partial payload is never produced.
    pub fn into_report(self) -> Result<AnalysisReport> {
        Ok(AnalysisReport {
            classification: self
                .classification
                .ok_or(PipelineError::Incomplete("classification"))?,
            entities: self.entities.ok_or(PipelineError::Incomplete("entities"))?,
            summary: self.summary.ok_or(PipelineError::Incomplete("summary"))?,
        })
    }
}

/// The subset of state fields one stage produces.
///
/// Each constructor corresponds to the stage that owns the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub classification: Option<String>,
    pub entities: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl StateUpdate {
    pub fn classification(label: impl Into<String>) -> Self {
        Self {
            classification: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn entities(entities: Vec<String>) -> Self {
        Self {
            entities: Some(entities),
            ..Self::default()
        }
    }

    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }
}

/// The fully populated result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub classification: String,
    pub entities: Vec<String>,
    pub summary: String,
}
