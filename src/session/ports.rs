use async_trait::async_trait;

use crate::session::types::SessionLogEntry;

#[async_trait]
pub trait SessionRecorder: Send + Sync {
    async fn record(&self, entry: SessionLogEntry);

    /// Entries in arrival order.
    async fn list_all(&self) -> Vec<SessionLogEntry>;

    /// Returns how many entries were dropped.
    async fn clear(&self) -> usize;
}
