use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Urgency tier. Variant order is the escalation order, so `Ord` compares urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    #[default]
    Text,
    Image,
    Voice,
}

impl ProcessingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessingMode::Text => "text",
            ProcessingMode::Image => "image",
            ProcessingMode::Voice => "voice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fire,
    Accident,
    Cardiac,
    Drowning,
    ImageAnalysis,
    Choking,
    GasLeak,
    General,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Fire,
        Category::Accident,
        Category::Cardiac,
        Category::Drowning,
        Category::ImageAnalysis,
        Category::Choking,
        Category::GasLeak,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fire => "fire",
            Category::Accident => "accident",
            Category::Cardiac => "cardiac",
            Category::Drowning => "drowning",
            Category::ImageAnalysis => "image-analysis",
            Category::Choking => "choking",
            Category::GasLeak => "gas-leak",
            Category::General => "general",
        }
    }
}

/// Where a resource points: a link, or a directive kind such as `call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceTarget {
    Url(String),
    Type(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(flatten)]
    pub target: ResourceTarget,
}

impl Resource {
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ResourceTarget::Url(url.into()),
        }
    }

    pub fn typed(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ResourceTarget::Type(kind.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub message: String,
    pub image_count: usize,
    pub mode: ProcessingMode,
}

impl ClassificationRequest {
    pub fn new(message: impl Into<String>, image_count: usize, mode: ProcessingMode) -> Self {
        Self {
            message: message.into(),
            image_count,
            mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub r#type: Category,
    pub severity: Severity,
    pub message: String,
    pub steps: Vec<String>,
    pub resources: Vec<Resource>,
    pub call_emergency: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub processing_mode: ProcessingMode,
}
