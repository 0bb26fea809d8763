use async_trait::async_trait;

use crate::session::{ports::SessionRecorder, types::SessionLogEntry};

#[derive(Debug, Clone, Default)]
pub struct NoopSessionRecorder;

#[async_trait]
impl SessionRecorder for NoopSessionRecorder {
    async fn record(&self, _entry: SessionLogEntry) {}

    async fn list_all(&self) -> Vec<SessionLogEntry> {
        Vec::new()
    }

    async fn clear(&self) -> usize {
        0
    }
}
