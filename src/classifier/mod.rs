pub mod engine;
pub mod guidance;
pub mod rules;
pub mod severity;
pub mod types;

pub use engine::CrisisClassifier;
pub use guidance::{Guidance, GuidanceCatalog, GuidanceCatalogError};
pub use rules::{CATEGORY_RULES, CategoryRule, Escalation, Trigger, match_category};
pub use severity::{SeverityAssessment, assess_severity};
pub use types::{
    Category, ClassificationRequest, ClassificationResult, ProcessingMode, Resource,
    ResourceTarget, Severity,
};
