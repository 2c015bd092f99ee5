//! The three analysis stages and their response post-processing.
//!
//! A stage couples a name, a prompt template parameterized by `{text}`, and
//! a parse function turning the raw model response into a [`StateUpdate`]
//! for the single field the stage owns. Stages issue no model calls
//! themselves; the pipeline renders the prompt, performs the call, and
//! hands the response back for parsing.

use crate::prompt;
use crate::state::StateUpdate;

const CLASSIFY_PROMPT: &str = "Classify the following text into one of the categories: News, Blog, Research, or Other.\n\nText: {text}\n\nCategory:";

const ENTITIES_PROMPT: &str = "Extract all entities (Person, Organization, Location) from the following text. Provide them as a comma-separated list.\n\nText: {text}\n\nEntities:";

const SUMMARY_PROMPT: &str = "Summarize the following text in one sentence.\n\nText: {text}\n\nSummary:";

/// One unit of pipeline work: prompt construction plus response parsing.
#[derive(Clone)]
pub struct Stage {
    pub name: &'static str,
    template: &'static str,
    parse: fn(&str) -> StateUpdate,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

impl Stage {
    /// Classify the text as one of News, Blog, Research, or Other.
    ///
    /// The label is trimmed but not validated against the closed set; a
    /// model that answers outside it has that answer passed through.
    pub fn classify() -> Self {
        Self {
            name: "classify",
            template: CLASSIFY_PROMPT,
            parse: parse_classification,
        }
    }

    /// Extract named entities as an ordered list.
    pub fn extract_entities() -> Self {
        Self {
            name: "extract_entities",
            template: ENTITIES_PROMPT,
            parse: parse_entities,
        }
    }

    /// Summarize the text in one sentence.
    pub fn summarize() -> Self {
        Self {
            name: "summarize",
            template: SUMMARY_PROMPT,
            parse: parse_summary,
        }
    }

    /// Render this stage's prompt for the given input text.
    pub fn render_prompt(&self, text: &str) -> String {
        prompt::render(self.template, text)
    }

    /// Turn the raw model response into this stage's partial update.
    pub fn parse_response(&self, raw: &str) -> StateUpdate {
        (self.parse)(raw)
    }
}

fn parse_classification(raw: &str) -> StateUpdate {
    StateUpdate::classification(raw.trim())
}

fn parse_entities(raw: &str) -> StateUpdate {
    StateUpdate::entities(split_entities(raw))
}

fn parse_summary(raw: &str) -> StateUpdate {
    StateUpdate::summary(raw.trim())
}

/// Split a comma-separated entity list into an ordered sequence.
///
/// A response with no delimiter yields a single-element sequence equal to
/// the trimmed (possibly empty) response. Malformed lists are passed
/// through rather than rejected.
fn split_entities(raw: &str) -> Vec<String> {
    raw.trim()
        .split(',')
        .map(|piece| piece.trim().to_string())
        .collect()
}
