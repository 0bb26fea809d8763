use std::sync::Arc;

use time::OffsetDateTime;

use crate::classifier::{
    guidance::GuidanceCatalog,
    rules::{Escalation, match_category},
    severity::assess_severity,
    types::{ClassificationRequest, ClassificationResult, ProcessingMode},
};

/// Stateless keyword classifier. Cloning shares the guidance catalog.
#[derive(Debug, Clone)]
pub struct CrisisClassifier {
    catalog: Arc<GuidanceCatalog>,
}

impl CrisisClassifier {
    pub fn new(catalog: GuidanceCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn classify(
        &self,
        message: &str,
        image_count: usize,
        mode: ProcessingMode,
    ) -> ClassificationResult {
        self.classify_at(message, image_count, mode, OffsetDateTime::now_utc())
    }

    pub fn classify_request(&self, request: &ClassificationRequest) -> ClassificationResult {
        self.classify(&request.message, request.image_count, request.mode)
    }

    /// Same as [`classify`](Self::classify) with an explicit timestamp.
    pub fn classify_at(
        &self,
        message: &str,
        image_count: usize,
        mode: ProcessingMode,
        timestamp: OffsetDateTime,
    ) -> ClassificationResult {
        let lowered = message.to_lowercase();
        let assessment = assess_severity(&lowered, image_count, mode);
        let rule = match_category(&lowered, image_count);

        let (severity, call_emergency) = match rule.escalation {
            Escalation::Keep => (assessment.severity, assessment.call_emergency),
            Escalation::CallEmergency => (assessment.severity, true),
            Escalation::Override(severity) => (severity, true),
        };

        let guidance = self.catalog.guidance(rule.category);
        ClassificationResult {
            r#type: rule.category,
            severity,
            message: guidance.headline.clone(),
            steps: guidance.steps.clone(),
            resources: guidance.resources.clone(),
            call_emergency,
            timestamp,
            processing_mode: mode,
        }
    }
}

impl Default for CrisisClassifier {
    fn default() -> Self {
        Self::new(GuidanceCatalog::builtin())
    }
}
