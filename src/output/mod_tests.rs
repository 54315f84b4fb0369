use super::*;

#[test]
fn parses_format_names() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
}

#[test]
fn rejects_unknown_format() {
    assert_eq!(
        "sarif".parse::<OutputFormat>(),
        Err("Unknown output format: sarif".to_string())
    );
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
