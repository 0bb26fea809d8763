use crate::classifier::{
    severity::contains_any,
    types::{Category, Severity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    AnyKeyword(&'static [&'static str]),
    HasImages,
    Always,
}

/// What a matched category does to the severity assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    Keep,
    CallEmergency,
    Override(Severity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub trigger: Trigger,
    pub escalation: Escalation,
}

impl CategoryRule {
    pub fn matches(&self, lowered: &str, image_count: usize) -> bool {
        match self.trigger {
            Trigger::AnyKeyword(keywords) => contains_any(lowered, keywords),
            Trigger::HasImages => image_count > 0,
            Trigger::Always => true,
        }
    }
}

const GENERAL_RULE: CategoryRule = CategoryRule {
    category: Category::General,
    trigger: Trigger::Always,
    escalation: Escalation::Keep,
};

/// Evaluated top to bottom, first match wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Fire,
        trigger: Trigger::AnyKeyword(&["fire", "flame", "smoke", "explosion"]),
        escalation: Escalation::Keep,
    },
    CategoryRule {
        category: Category::Accident,
        trigger: Trigger::AnyKeyword(&["accident", "crash", "collision", "overturned"]),
        escalation: Escalation::Keep,
    },
    CategoryRule {
        category: Category::Cardiac,
        trigger: Trigger::AnyKeyword(&[
            "heart",
            "cardiac",
            "chest pain",
            "not breathing",
            "collapsed",
            "unconscious",
            "cpr",
        ]),
        escalation: Escalation::Keep,
    },
    CategoryRule {
        category: Category::Drowning,
        trigger: Trigger::AnyKeyword(&["drown", "water", "pool", "lake", "river"]),
        escalation: Escalation::Keep,
    },
    CategoryRule {
        category: Category::ImageAnalysis,
        trigger: Trigger::HasImages,
        escalation: Escalation::Override(Severity::High),
    },
    CategoryRule {
        category: Category::Choking,
        trigger: Trigger::AnyKeyword(&["chok", "heimlich"]),
        escalation: Escalation::CallEmergency,
    },
    CategoryRule {
        category: Category::GasLeak,
        trigger: Trigger::AnyKeyword(&["gas", "leak", "smell"]),
        escalation: Escalation::CallEmergency,
    },
    GENERAL_RULE,
];

pub fn match_category(lowered: &str, image_count: usize) -> &'static CategoryRule {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(lowered, image_count))
        .unwrap_or(&GENERAL_RULE)
}
