use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::session::{ports::SessionRecorder, types::SessionLogEntry};

#[derive(Debug, Default)]
pub struct InMemorySessionLog {
    max_entries: Option<usize>,
    entries: Mutex<VecDeque<SessionLogEntry>>,
}

impl InMemorySessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest entries are evicted once `max_entries` is exceeded. A limit of 0 keeps nothing.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            entries: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl SessionRecorder for InMemorySessionLog {
    async fn record(&self, entry: SessionLogEntry) {
        let mut entries = self.entries.lock().await;
        entries.push_back(entry);
        if let Some(max_entries) = self.max_entries {
            while entries.len() > max_entries {
                entries.pop_front();
            }
        }
    }

    async fn list_all(&self) -> Vec<SessionLogEntry> {
        self.entries.lock().await.iter().cloned().collect()
    }

    async fn clear(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let dropped = entries.len();
        entries.clear();
        dropped
    }
}
