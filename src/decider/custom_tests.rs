use serde_json::json;

use crate::checker::{CheckDetail, Severity};

use super::*;

fn results() -> Vec<ValidationResult> {
    vec![
        ValidationResult {
            file: "app.js".to_string(),
            line: 1,
            start: 12,
            end: 25,
            content: "Hello world".to_string(),
            valid: true,
            message: "OK".to_string(),
            details: None,
        },
        ValidationResult {
            file: "README.md".to_string(),
            line: 3,
            start: 0,
            end: 19,
            content: "Text with teh error".to_string(),
            valid: false,
            message: "CRITICAL: Possible typo 'teh' (did you mean 'the'?)".to_string(),
            details: Some(vec![CheckDetail::new(Severity::Error, "typo", "typo")]),
        },
    ]
}

fn decide(logic: &str) -> ValidationSummary {
    let options = json!({ "logic": logic }).as_object().cloned().unwrap();
    CustomDecider.decide(&results(), &options)
}

#[test]
fn true_passes() {
    assert_eq!(decide("true"), ValidationSummary::pass("Custom check passed"));
}

#[test]
fn false_fails() {
    assert_eq!(decide("false"), ValidationSummary::fail("Custom check failed"));
}

#[test]
fn record_is_used_verbatim() {
    assert_eq!(
        decide(r#"({ pass: false, reason: "X" })"#),
        ValidationSummary::fail("X")
    );
}

#[test]
fn record_fields_have_defaults() {
    assert_eq!(
        decide("({ pass: true })"),
        ValidationSummary::pass("Custom decision completed")
    );
    assert_eq!(
        decide("({})"),
        ValidationSummary::fail("Custom decision completed")
    );
}

#[test]
fn every_result_field_is_visible() {
    assert_eq!(
        decide("results.filter(r => r.valid).length >= 1"),
        ValidationSummary::pass("Custom check passed")
    );
    let logic = "results[1].file == 'README.md' && results[1].line == 3 && results[0].end == 25";

    assert!(decide(logic).pass);
    assert!(decide("results[1].details[0].severity == 'error'").pass);
    assert!(decide("results[0].details == null").pass);
}

#[test]
fn evaluation_error_fails_with_the_error() {
    let summary = decide("invalid.syntax");

    assert!(!summary.pass);
    assert!(summary.reason.starts_with("Custom logic error: "));
    assert!(summary.reason.contains("invalid is not defined"));
}

#[test]
fn missing_logic_fails() {
    assert_eq!(
        CustomDecider.decide(&results(), &Options::new()),
        ValidationSummary::fail("No custom logic provided")
    );
}

#[test]
fn other_result_types_are_invalid() {
    assert_eq!(
        decide("results.length"),
        ValidationSummary::fail("Invalid custom logic result")
    );
}

#[test]
fn list_result_takes_record_defaults() {
    assert_eq!(
        decide("results.filter(r => r.valid)"),
        ValidationSummary::fail("Custom decision completed")
    );
}

#[test]
fn failure_reasons_are_distinct() {
    let missing = CustomDecider.decide(&results(), &Options::new()).reason;
    let error = decide("nope").reason;
    let invalid = decide("'text'").reason;

    assert_ne!(missing, error);
    assert_ne!(error, invalid);
    assert_ne!(missing, invalid);
}

#[test]
fn content_is_not_bound() {
    assert!(decide("content").reason.contains("ReferenceError"));
}

#[test]
fn overlong_logic_fails_instead_of_aborting() {
    let logic = format!("results.length == 0{}", " || false".repeat(20_000));

    let summary = CustomDecider.decide(
        &[],
        &json!({ "logic": logic }).as_object().cloned().unwrap(),
    );

    assert!(!summary.pass);
    assert_eq!(
        summary.reason,
        "Custom logic error: LimitError: expression nesting exceeds 64 levels"
    );
}
