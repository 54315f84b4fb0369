use crate::validator::ValidationSummary;

use super::*;

fn result(file: &str, line: usize, content: &str, valid: bool, message: &str) -> ValidationResult {
    ValidationResult {
        file: file.to_string(),
        line,
        start: 0,
        end: content.len(),
        content: content.to_string(),
        valid,
        message: message.to_string(),
        details: None,
    }
}

fn format(results: Vec<ValidationResult>, summary: ValidationSummary) -> String {
    MarkdownFormatter
        .format(&ValidatorOutput { results, summary })
        .unwrap()
}

#[test]
fn passing_results() {
    let comment = format(
        vec![result("src/app.ts", 1, "Hello", true, "OK")],
        ValidationSummary::pass("1/1 strings valid (100.0%)"),
    );

    assert_eq!(
        comment,
        "## 🌊 StringRay Results\n\n\
         ✅ **Passed:** 1/1 strings valid (100.0%)\n\n\
         All strings passed validation.\n"
    );
}

#[test]
fn failing_results_with_details() {
    let comment = format(
        vec![
            result("src/app.ts", 5, "Click here", false, "Use \"Select\" not \"Click\""),
            result("src/app.ts", 10, "Welcome", true, "OK"),
        ],
        ValidationSummary::fail("Only 1/2 strings valid (50.0%), required 80%"),
    );

    assert!(comment.contains("❌ **Failed:** Only 1/2 strings valid"));
    assert!(comment.contains("### Issues Found\n\n#### `src/app.ts`\n\n"));
    assert!(comment.contains("- **Line 5:** `Click here`\n  - Use \"Select\" not \"Click\"\n"));
    assert!(!comment.contains("Welcome"));
    assert!(comment.ends_with("---\n*🌊 Posted by StringRay*"));
}

#[test]
fn groups_by_file_in_first_seen_order() {
    let comment = format(
        vec![
            result("src/b.ts", 1, "foo", false, "error 1"),
            result("src/a.ts", 2, "bar", false, "error 2"),
            result("src/b.ts", 3, "baz", false, "error 3"),
        ],
        ValidationSummary::fail("Only 0/3 strings valid (0.0%), required 80%"),
    );

    let b = comment.find("`src/b.ts`").unwrap();
    let a = comment.find("`src/a.ts`").unwrap();
    assert!(b < a);
    assert_eq!(comment.matches("`src/b.ts`").count(), 1);
    let line3 = comment.find("Line 3").unwrap();
    assert!(line3 < a);
}

#[test]
fn truncates_long_content() {
    let long = "A".repeat(100);
    let comment = format(
        vec![result("src/app.ts", 1, &long, false, "Too long")],
        ValidationSummary::fail("Only 0/1 strings valid (0.0%), required 80%"),
    );

    assert!(!comment.contains(&long));
    assert!(comment.contains(&format!("`{}...`", "A".repeat(47))));
}

#[test]
fn truncation_counts_characters() {
    assert_eq!(truncate(&"é".repeat(50), 50), "é".repeat(50));
    assert_eq!(truncate(&"é".repeat(51), 50), format!("{}...", "é".repeat(47)));
}

#[test]
fn caps_issues_per_file() {
    let results = (1..=8)
        .map(|line| result("src/app.ts", line, "x", false, "bad"))
        .collect();

    let comment = format(results, ValidationSummary::fail("Only 0/8"));

    assert_eq!(comment.matches("- **Line").count(), MAX_ISSUES_PER_FILE);
    assert!(comment.contains("- *...and 3 more issue(s) in this file*\n"));
}

#[test]
fn caps_files() {
    let results = (0..13)
        .map(|i| result(&format!("src/f{i}.ts"), 1, "x", false, "bad"))
        .collect();

    let comment = format(results, ValidationSummary::fail("Only 0/13"));

    assert_eq!(comment.matches("#### ").count(), MAX_FILES);
    assert!(comment.contains("`src/f9.ts`"));
    assert!(!comment.contains("`src/f10.ts`"));
    assert!(comment.contains("\n*...and 3 more file(s)*\n"));
}
