use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::generation::GenerationResult;

/// Most recent generations kept.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub prompt: String,
    pub language: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

/// Volatile, most-recent-first list of past generations, capped at `HISTORY_LIMIT`.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front, evicting the oldest entry past the cap.
    pub fn record(&mut self, prompt: &str, result: &GenerationResult) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            language: result.language.clone(),
            code: result.code.clone(),
            timestamp: result.timestamp,
        });
        self.entries.truncate(HISTORY_LIMIT);
        &self.entries[0]
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
