use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{Result, ThinkToolError};
use crate::models::ThoughtRecord;

/// Repository trait for thought storage operations
#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// Append a record to the end of the log
    async fn append_thought(&self, thought: ThoughtRecord) -> Result<()>;

    /// Snapshot of every record in insertion order
    async fn all_thoughts(&self) -> Result<Vec<ThoughtRecord>>;

    /// Remove every record, returning how many were stored
    async fn clear_thoughts(&self) -> Result<usize>;
}

/// In-memory implementation of ThoughtRepository backing a single session.
///
/// A single mutex serializes mutations against reads so length and content
/// are always observed consistently.
#[derive(Default)]
pub struct MemoryThoughtRepository {
    log: Mutex<Vec<ThoughtRecord>>,
}

impl MemoryThoughtRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThoughtRepository for MemoryThoughtRepository {
    async fn append_thought(&self, thought: ThoughtRecord) -> Result<()> {
        let mut log = self.log.lock().map_err(|_| ThinkToolError::LockPoisoned)?;
        log.push(thought);
        Ok(())
    }

    async fn all_thoughts(&self) -> Result<Vec<ThoughtRecord>> {
        let log = self.log.lock().map_err(|_| ThinkToolError::LockPoisoned)?;
        Ok(log.clone())
    }

    async fn clear_thoughts(&self) -> Result<usize> {
        let mut log = self.log.lock().map_err(|_| ThinkToolError::LockPoisoned)?;
        let count = log.len();
        log.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(thought: &str) -> ThoughtRecord {
        ThoughtRecord {
            timestamp: "2025-01-01T00:00:00.000000 UTC".to_string(),
            thought: thought.to_string(),
            pattern: None,
            confidence: None,
            alternatives: None,
            justification: None,
        }
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let repo = MemoryThoughtRepository::new();
        repo.append_thought(record("first")).await.unwrap();
        repo.append_thought(record("second")).await.unwrap();
        repo.append_thought(record("third")).await.unwrap();

        let thoughts = repo.all_thoughts().await.unwrap();
        let contents: Vec<&str> = thoughts.iter().map(|t| t.thought.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn clear_reports_prior_length_and_empties_log() {
        let repo = MemoryThoughtRepository::new();
        repo.append_thought(record("a")).await.unwrap();
        repo.append_thought(record("b")).await.unwrap();

        assert_eq!(repo.clear_thoughts().await.unwrap(), 2);
        assert!(repo.all_thoughts().await.unwrap().is_empty());
        assert_eq!(repo.clear_thoughts().await.unwrap(), 0);
    }
}
