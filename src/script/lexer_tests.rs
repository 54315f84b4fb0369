use super::*;

fn kinds(source: &str) -> Vec<Token<'_>> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|s| s.token)
        .collect()
}

#[test]
fn tokenizes_member_call_with_arrow() {
    assert_eq!(
        kinds("results.filter(r => r.valid)"),
        vec![
            Token::Ident("results"),
            Token::Punct("."),
            Token::Ident("filter"),
            Token::Punct("("),
            Token::Ident("r"),
            Token::Punct("=>"),
            Token::Ident("r"),
            Token::Punct("."),
            Token::Ident("valid"),
            Token::Punct(")"),
        ]
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(
        kinds("a === b !== c >= d"),
        vec![
            Token::Ident("a"),
            Token::Punct("==="),
            Token::Ident("b"),
            Token::Punct("!=="),
            Token::Ident("c"),
            Token::Punct(">="),
            Token::Ident("d"),
        ]
    );
}

#[test]
fn numbers_with_and_without_fraction() {
    assert_eq!(
        kinds("42 0.75"),
        vec![Token::Number(42.0), Token::Number(0.75)]
    );
}

#[test]
fn strings_in_both_quote_styles_with_escapes() {
    assert_eq!(
        kinds(r#""say \"hi\"" 'it\'s' "a\nb""#),
        vec![
            Token::Str("say \"hi\"".to_string()),
            Token::Str("it's".to_string()),
            Token::Str("a\nb".to_string()),
        ]
    );
}

#[test]
fn offsets_point_at_token_starts() {
    let tokens = tokenize("  a  &&  b").unwrap();

    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![2, 5, 9]);
}

#[test]
fn unterminated_string_is_a_syntax_error() {
    let err = tokenize("content.includes(\"oops)").unwrap_err();

    assert_eq!(
        err,
        ScriptError::Syntax {
            offset: 17,
            message: "unterminated string literal".to_string(),
        }
    );
}

#[test]
fn assignment_is_rejected() {
    let err = tokenize("x = 1").unwrap_err();

    assert!(err.to_string().contains("unexpected character '='"));
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(tokenize("   ").unwrap().is_empty());
}
