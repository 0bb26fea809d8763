use crisis_guide::classifier::{Category, ProcessingMode, Severity};

use crate::{classify, classify_fixed};

const SAMPLE_MESSAGES: &[&str] = &[
    "",
    "   ",
    "HELP",
    "My kitchen is on FIRE",
    "car crash on the highway",
    "my dad collapsed and is not breathing",
    "kid fell into the pool",
    "baby is choking",
    "I smell gas in the basement",
    "twisted my ankle, maybe a sprain",
    "ünïcödé 🚑 text",
];

#[test]
fn classify_is_total_and_well_formed() {
    for message in SAMPLE_MESSAGES {
        for image_count in [0, 1, 5] {
            for mode in [ProcessingMode::Text, ProcessingMode::Image, ProcessingMode::Voice] {
                let result = classify(message, image_count, mode);
                assert!(!result.message.is_empty(), "empty headline for {message:?}");
                assert!(!result.steps.is_empty(), "no steps for {message:?}");
                assert!(result.steps.iter().all(|step| !step.is_empty()));
                assert_eq!(result.processing_mode, mode);
                if matches!(result.severity, Severity::High | Severity::Critical) {
                    assert!(result.call_emergency, "{message:?} is severe but not escalated");
                }
            }
        }
    }
}

#[test]
fn identical_inputs_produce_identical_results() {
    for message in SAMPLE_MESSAGES {
        let first = classify_fixed(message, 1, ProcessingMode::Text);
        let second = classify_fixed(message, 1, ProcessingMode::Text);
        assert_eq!(first, second);
    }

    let first = classify("house fire", 0, ProcessingMode::Voice);
    let mut second = classify("house fire", 0, ProcessingMode::Voice);
    second.timestamp = first.timestamp;
    assert_eq!(first, second);
}

#[test]
fn fire_outranks_accident() {
    let result = classify("explosion after a collision with a tanker", 0, ProcessingMode::Text);
    assert_eq!(result.r#type, Category::Fire);
}

#[test]
fn image_only_submission_is_forced_to_high() {
    let result = classify("", 2, ProcessingMode::Image);
    assert_eq!(result.r#type, Category::ImageAnalysis);
    assert_eq!(result.severity, Severity::High);
    assert!(result.call_emergency);
}

#[test]
fn gas_smell_escalates_without_raising_severity() {
    let result = classify("I smell gas", 0, ProcessingMode::Text);
    assert_eq!(result.r#type, Category::GasLeak);
    assert_eq!(result.severity, Severity::Low);
    assert!(result.call_emergency);
}

#[test]
fn fire_with_unconscious_victim_is_critical_fire() {
    let result = classify(
        "there was a fire and someone is unconscious",
        0,
        ProcessingMode::Text,
    );
    assert_eq!(result.r#type, Category::Fire);
    assert_eq!(result.severity, Severity::Critical);
    assert!(result.call_emergency);
}

#[test]
fn empty_input_is_low_general() {
    let result = classify("", 0, ProcessingMode::Text);
    assert_eq!(result.r#type, Category::General);
    assert_eq!(result.severity, Severity::Low);
    assert!(!result.call_emergency);
}

#[test]
fn result_serializes_with_wire_field_names() {
    let result = classify_fixed("I smell gas", 0, ProcessingMode::Voice);
    let value = serde_json::to_value(&result).expect("result should serialize");

    assert_eq!(value["type"], "gas-leak");
    assert_eq!(value["severity"], "LOW");
    assert_eq!(value["callEmergency"], true);
    assert_eq!(value["processingMode"], "voice");
    assert_eq!(value["timestamp"], "1970-01-01T00:00:00Z");
    assert!(value["steps"].as_array().is_some_and(|steps| !steps.is_empty()));
    for resource in value["resources"].as_array().expect("resources array") {
        let object = resource.as_object().expect("resource object");
        assert!(object.contains_key("name"));
        assert!(object.contains_key("url") ^ object.contains_key("type"));
    }
}
