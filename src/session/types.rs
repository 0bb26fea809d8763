use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::classifier::{ClassificationRequest, ProcessingMode, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLogEntry {
    pub mode: ProcessingMode,
    pub message: String,
    pub image_count: usize,
    pub severity: Severity,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl SessionLogEntry {
    pub fn from_request(
        request: &ClassificationRequest,
        severity: Severity,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            mode: request.mode,
            message: request.message.clone(),
            image_count: request.image_count,
            severity,
            timestamp,
        }
    }
}
