use super::*;

fn results_fixture() -> Value {
    Value::List(vec![
        Value::record([("valid", Value::Bool(true)), ("message", Value::from("OK"))]),
        Value::record([
            ("valid", Value::Bool(false)),
            ("message", Value::from("CRITICAL: typo")),
        ]),
        Value::record([("valid", Value::Bool(true)), ("message", Value::from("OK"))]),
    ])
}

#[test]
fn literal_true() {
    assert_eq!(evaluate("true", &[]).unwrap(), Value::Bool(true));
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(evaluate("1 + 2 * 3 - 4 / 2", &[]).unwrap(), Value::Number(5.0));
    assert_eq!(evaluate("7 % 4", &[]).unwrap(), Value::Number(3.0));
    assert_eq!(evaluate("-(2 + 3)", &[]).unwrap(), Value::Number(-5.0));
}

#[test]
fn plus_concatenates_when_either_side_is_a_string() {
    assert_eq!(
        evaluate("'n=' + 3", &[]).unwrap(),
        Value::from("n=3")
    );
}

#[test]
fn content_binding_is_visible() {
    let bindings = [("content", Value::from("Hello world"))];

    assert_eq!(
        evaluate("content.length < 20 && content.startsWith('Hello')", &bindings).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn length_counts_characters() {
    let bindings = [("content", Value::from("héllo"))];

    assert_eq!(
        evaluate("content.length", &bindings).unwrap(),
        Value::Number(5.0)
    );
}

#[test]
fn filter_and_length_over_results() {
    let bindings = [("results", results_fixture())];

    assert_eq!(
        evaluate("results.filter(r => r.valid).length >= 2", &bindings).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn some_every_find_and_map() {
    let bindings = [("results", results_fixture())];

    assert_eq!(
        evaluate("results.some(r => r.message.includes('CRITICAL'))", &bindings).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate("results.every(r => r.valid)", &bindings).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate("results.find(r => !r.valid).message", &bindings).unwrap(),
        Value::from("CRITICAL: typo")
    );
    assert_eq!(
        evaluate("results.map((r, i) => i).join('-')", &bindings).unwrap(),
        Value::from("0-1-2")
    );
}

#[test]
fn find_without_match_is_null() {
    let bindings = [("results", results_fixture())];

    assert_eq!(
        evaluate("results.find(r => r.message == 'nope')", &bindings).unwrap(),
        Value::Null
    );
}

#[test]
fn record_literal_evaluates_in_order() {
    let value = evaluate(r#"({ pass: false, reason: "X" })"#, &[]).unwrap();

    assert_eq!(value.get("pass"), Some(&Value::Bool(false)));
    assert_eq!(value.get("reason"), Some(&Value::from("X")));
    let Value::Record(fields) = value else {
        panic!("expected record");
    };
    assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["pass", "reason"]);
}

#[test]
fn missing_record_field_is_null() {
    let bindings = [("options", Value::record([("max", Value::Number(3.0))]))];

    assert_eq!(evaluate("options.min", &bindings).unwrap(), Value::Null);
    assert_eq!(evaluate("options.min ?? 1", &bindings).unwrap(), Value::Number(1.0));
    assert_eq!(evaluate("options['max']", &bindings).unwrap(), Value::Number(3.0));
}

#[test]
fn logical_operators_short_circuit() {
    // The right side would raise a ReferenceError if evaluated.
    assert_eq!(evaluate("false && missing", &[]).unwrap(), Value::Bool(false));
    assert_eq!(evaluate("1 || missing", &[]).unwrap(), Value::Number(1.0));
    assert_eq!(evaluate("'x' ?? missing", &[]).unwrap(), Value::from("x"));
}

#[test]
fn conditional_picks_branch() {
    assert_eq!(evaluate("0 ? 'a' : 'b'", &[]).unwrap(), Value::from("b"));
}

#[test]
fn equality_is_structural() {
    assert_eq!(evaluate("[1, 'a'] == [1, 'a']", &[]).unwrap(), Value::Bool(true));
    assert_eq!(evaluate("1 === '1'", &[]).unwrap(), Value::Bool(false));
    assert_eq!(evaluate("null != undefined", &[]).unwrap(), Value::Bool(false));
}

#[test]
fn string_methods() {
    let bindings = [("content", Value::from("  Hello World  "))];

    assert_eq!(
        evaluate("content.trim().toLowerCase()", &bindings).unwrap(),
        Value::from("hello world")
    );
    assert_eq!(
        evaluate("content.trim().split(' ').length", &bindings).unwrap(),
        Value::Number(2.0)
    );
    assert_eq!(
        evaluate("content.trim().slice(-5)", &bindings).unwrap(),
        Value::from("World")
    );
    assert_eq!(
        evaluate("content.indexOf('W')", &bindings).unwrap(),
        Value::Number(8.0)
    );
    assert_eq!(
        evaluate("content.indexOf('z')", &bindings).unwrap(),
        Value::Number(-1.0)
    );
}

#[test]
fn list_methods() {
    assert_eq!(evaluate("[1, 2, 3].includes(2)", &[]).unwrap(), Value::Bool(true));
    assert_eq!(evaluate("[1, 2, 3].slice(1).join()", &[]).unwrap(), Value::from("2,3"));
    assert_eq!(evaluate("['a', 'b'].indexOf('b')", &[]).unwrap(), Value::Number(1.0));
}

#[test]
fn unknown_name_is_a_reference_error() {
    assert_eq!(
        evaluate("invalid.syntax", &[]).unwrap_err(),
        ScriptError::Reference("invalid".to_string())
    );
}

#[test]
fn no_globals_are_reachable() {
    for source in ["process.exit(1)", "require('fs')", "globalThis", "eval('1')"] {
        let err = evaluate(source, &[]).unwrap_err();
        assert!(
            matches!(err, ScriptError::Reference(_)),
            "{source} should be unreachable, got {err}"
        );
    }
}

#[test]
fn calling_a_non_function_is_a_type_error() {
    let bindings = [("content", Value::from("x"))];

    assert!(matches!(
        evaluate("content()", &bindings),
        Err(ScriptError::Type(_))
    ));
    assert!(matches!(
        evaluate("content.explode()", &bindings),
        Err(ScriptError::Type(_))
    ));
}

#[test]
fn reading_through_null_is_a_type_error() {
    let err = evaluate("null.valid", &[]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "TypeError: cannot read properties of null (reading 'valid')"
    );
}

#[test]
fn comparing_mismatched_types_is_a_type_error() {
    assert_eq!(
        evaluate("'a' < 1", &[]).unwrap_err(),
        ScriptError::Type("cannot compare string and number".to_string())
    );
}

#[test]
fn bare_arrow_cannot_be_evaluated() {
    assert!(matches!(evaluate("x => x", &[]), Err(ScriptError::Type(_))));
}

#[test]
fn step_budget_stops_runaway_evaluation() {
    let list = Value::List((0..100).map(f64::from).map(Value::Number).collect());
    let bindings = [("items", list)];
    let script = Script::parse("items.map(a => items.map(b => a * b)).length")
        .unwrap()
        .with_step_budget(500);

    assert_eq!(
        script.evaluate(&bindings).unwrap_err(),
        ScriptError::BudgetExceeded(500)
    );
}

#[test]
fn default_budget_allows_ordinary_work() {
    let list = Value::List((0..1000).map(f64::from).map(Value::Number).collect());
    let bindings = [("items", list)];

    assert_eq!(
        evaluate("items.filter(n => n % 2 == 0).length", &bindings).unwrap(),
        Value::Number(500.0)
    );
}

#[test]
fn parsed_script_is_reusable() {
    let script = Script::parse("content.length > 3").unwrap();

    assert_eq!(
        script.evaluate(&[("content", Value::from("abcd"))]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        script.evaluate(&[("content", Value::from("ab"))]).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn json_values_convert_to_script_values() {
    let json = serde_json::json!({ "valid": true, "line": 3, "tags": ["a", null] });
    let value = Value::from(json);

    assert_eq!(value.get("line"), Some(&Value::Number(3.0)));
    assert_eq!(evaluate("v.tags", &[("v", value.clone())]).unwrap().to_string(), "a,");
    assert!(value.is_truthy());
}

#[test]
fn falsy_values() {
    for source in ["0", "''", "null", "false", "0 / 0"] {
        assert!(!evaluate(source, &[]).unwrap().is_truthy(), "{source}");
    }
    assert!(evaluate("[]", &[]).unwrap().is_truthy());
}
