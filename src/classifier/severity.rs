use crate::classifier::types::{ProcessingMode, Severity};

pub const CRITICAL_KEYWORDS: &[&str] = &[
    "fire",
    "flame",
    "smoke",
    "explosion",
    "cardiac",
    "heart attack",
    "not breathing",
    "unconscious",
    "collapsed",
    "drowning",
    "shooting",
    "stabbing",
    "severe bleeding",
    "choking",
];

// "unconscious" also appears in the critical set, so it can never land here.
pub const HIGH_KEYWORDS: &[&str] = &[
    "accident",
    "crash",
    "collision",
    "injury",
    "broken bone",
    "unconscious",
    "seizure",
    "allergic reaction",
    "overdose",
    "flood",
    "gas leak",
];

pub const MEDIUM_KEYWORDS: &[&str] = &[
    "fall",
    "cut",
    "burn",
    "sprain",
    "dizzy",
    "chest pain",
    "difficulty breathing",
    "nausea",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityAssessment {
    pub severity: Severity,
    pub call_emergency: bool,
}

pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Step 1 of classification. `lowered` must already be lower-cased.
pub fn assess_severity(lowered: &str, image_count: usize, mode: ProcessingMode) -> SeverityAssessment {
    let image_submission = image_count > 0 && mode == ProcessingMode::Image;

    if contains_any(lowered, CRITICAL_KEYWORDS) || image_submission {
        return SeverityAssessment {
            severity: Severity::Critical,
            call_emergency: true,
        };
    }
    if contains_any(lowered, HIGH_KEYWORDS) {
        return SeverityAssessment {
            severity: Severity::High,
            call_emergency: true,
        };
    }
    if contains_any(lowered, MEDIUM_KEYWORDS) {
        return SeverityAssessment {
            severity: Severity::Medium,
            call_emergency: false,
        };
    }

    SeverityAssessment {
        severity: Severity::Low,
        call_emergency: false,
    }
}
