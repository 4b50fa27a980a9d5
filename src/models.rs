use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parameters for the think tool
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ThinkParams {
    #[serde(default)]
    #[schemars(
        description = "A thought to think about. This can be structured reasoning, step-by-step analysis, policy verification, or any other mental process that helps with problem-solving."
    )]
    pub thought: String,

    #[schemars(
        description = "The thinking pattern used (e.g., \"analytical\", \"creative\", \"critical\", \"exploratory\")"
    )]
    pub pattern: Option<String>,

    #[schemars(description = "Confidence level in this thought (0.0 to 1.0)")]
    pub confidence: Option<f64>,

    #[schemars(description = "List of alternative thoughts or approaches considered")]
    pub alternatives: Option<Vec<String>>,

    #[schemars(description = "Reasoning or evidence supporting this thought")]
    pub justification: Option<String>,
}

/// One recorded unit of reasoning.
///
/// Optional fields are `Some` exactly when the caller supplied them at
/// recording time; an empty `alternatives` list supplied by the caller is
/// stored as present-and-empty. Records are never modified after append.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThoughtRecord {
    pub timestamp: String,
    pub thought: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl ThoughtRecord {
    /// Create a new thought record stamped with the given timestamp
    pub fn new(timestamp: String, params: ThinkParams) -> Self {
        Self {
            timestamp,
            thought: params.thought,
            pattern: params.pattern,
            confidence: params.confidence,
            alternatives: params.alternatives,
            justification: params.justification,
        }
    }
}

/// Descriptive statistics over the session log.
///
/// Field order matters: it is the order the fields appear in the serialized
/// document. `None` fields serialize as `null` rather than being omitted.
#[derive(Debug, Serialize)]
pub struct ThoughtStats {
    pub total_thoughts: usize,
    pub average_length: f64,
    pub longest_thought_index: usize,
    pub longest_thought_length: Option<usize>,
    pub pattern_distribution: HashMap<String, usize>,
    pub average_confidence: Option<f64>,
    pub thoughts_with_justification: usize,
    pub thoughts_with_alternatives: usize,
}
