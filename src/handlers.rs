use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ThinkParams, ThoughtRecord, ThoughtStats};
use crate::repository::ThoughtRepository;
use crate::timestamp::LocalClock;

/// Fixed response when the session log has nothing to show
pub const EMPTY_LOG_MESSAGE: &str = "No thoughts have been recorded yet.";

/// Number of characters of the thought echoed back in the confirmation
const CONFIRMATION_PREVIEW_CHARS: usize = 100;

/// Handler for MCP tool operations
pub struct ToolHandlers<R: ThoughtRepository> {
    repository: Arc<R>,
    clock: LocalClock,
}

impl<R: ThoughtRepository> ToolHandlers<R> {
    pub fn new(repository: Arc<R>, clock: LocalClock) -> Self {
        Self { repository, clock }
    }

    /// Handle the think tool: record a thought and confirm it
    pub async fn think(&self, params: ThinkParams) -> Result<String> {
        let record = ThoughtRecord::new(self.clock.now(), params);

        tracing::info!(
            "Recording thought ({} chars)",
            record.thought.chars().count()
        );

        let mut confirmation = format!(
            "Thought recorded: {}...",
            record
                .thought
                .chars()
                .take(CONFIRMATION_PREVIEW_CHARS)
                .collect::<String>()
        );
        if let Some(pattern) = &record.pattern {
            confirmation.push_str(&format!(" [Pattern: {pattern}]"));
        }
        if let Some(confidence) = record.confidence {
            confirmation.push_str(&format!(" [Confidence: {confidence:.2}]"));
        }

        self.repository.append_thought(record).await?;

        Ok(confirmation)
    }

    /// Handle the get_thoughts tool: render every record in insertion order
    pub async fn get_thoughts(&self) -> Result<String> {
        let thoughts = self.repository.all_thoughts().await?;
        if thoughts.is_empty() {
            return Ok(EMPTY_LOG_MESSAGE.to_string());
        }

        let formatted: Vec<String> = thoughts
            .iter()
            .enumerate()
            .map(|(i, record)| render_thought(i + 1, record))
            .collect();

        Ok(formatted.join("\n"))
    }

    /// Handle the clear_thoughts tool
    pub async fn clear_thoughts(&self) -> Result<String> {
        let count = self.repository.clear_thoughts().await?;
        tracing::info!("Cleared {} thoughts from the session log", count);
        Ok(format!("Cleared {count} recorded thoughts."))
    }

    /// Handle the get_thought_stats tool
    pub async fn get_thought_stats(&self) -> Result<String> {
        let thoughts = self.repository.all_thoughts().await?;
        if thoughts.is_empty() {
            return Ok(EMPTY_LOG_MESSAGE.to_string());
        }

        let stats = aggregate_stats(&thoughts);
        Ok(serde_json::to_string_pretty(&stats)?)
    }
}

/// Render one record as a display block: an indexed header with optional
/// metadata, the thought text, then justification and alternatives lines
/// when present. The block carries a trailing newline so joined blocks are
/// separated by a blank line.
fn render_thought(index: usize, record: &ThoughtRecord) -> String {
    let mut block = format!("Thought #{index} ({}):", record.timestamp);

    let mut metadata = Vec::new();
    if let Some(pattern) = &record.pattern {
        metadata.push(format!("Pattern: {pattern}"));
    }
    if let Some(confidence) = record.confidence {
        metadata.push(format!("Confidence: {confidence:.2}"));
    }
    if !metadata.is_empty() {
        block.push_str(&format!(" [{}]", metadata.join(", ")));
    }

    block.push_str(&format!("\n{}", record.thought));

    if let Some(justification) = &record.justification {
        block.push_str(&format!("\nJustification: {justification}"));
    }
    if let Some(alternatives) = &record.alternatives {
        if !alternatives.is_empty() {
            block.push_str(&format!(
                "\nAlternatives considered: {}",
                alternatives.join(", ")
            ));
        }
    }

    block.push('\n');
    block
}

/// Compute descriptive statistics over a non-empty log.
///
/// The longest thought is chosen by the lexicographic maximum of
/// (length, index) pairs: among equal-length thoughts the one with the
/// larger index wins, so the last occurrence is reported.
fn aggregate_stats(thoughts: &[ThoughtRecord]) -> ThoughtStats {
    let total_thoughts = thoughts.len();

    let total_chars: usize = thoughts.iter().map(|t| t.thought.chars().count()).sum();
    let average_length = round_2(total_chars as f64 / total_thoughts as f64);

    let (longest_length, longest_index) = thoughts
        .iter()
        .enumerate()
        .map(|(i, t)| (t.thought.chars().count(), i))
        .max()
        .unwrap_or((0, 0));

    let mut pattern_distribution: HashMap<String, usize> = HashMap::new();
    let mut confidence_values = Vec::new();
    let mut thoughts_with_justification = 0;
    let mut thoughts_with_alternatives = 0;

    for record in thoughts {
        if let Some(pattern) = &record.pattern {
            *pattern_distribution.entry(pattern.clone()).or_insert(0) += 1;
        }
        if let Some(confidence) = record.confidence {
            confidence_values.push(confidence);
        }
        if record.justification.is_some() {
            thoughts_with_justification += 1;
        }
        if record.alternatives.as_ref().is_some_and(|a| !a.is_empty()) {
            thoughts_with_alternatives += 1;
        }
    }

    let average_confidence = if confidence_values.is_empty() {
        None
    } else {
        Some(round_2(
            confidence_values.iter().sum::<f64>() / confidence_values.len() as f64,
        ))
    };

    ThoughtStats {
        total_thoughts,
        average_length,
        longest_thought_index: longest_index + 1,
        longest_thought_length: (longest_length > 0).then_some(longest_length),
        pattern_distribution,
        average_confidence,
        thoughts_with_justification,
        thoughts_with_alternatives,
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
