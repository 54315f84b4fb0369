use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{anychar, char, digit1, one_of, satisfy},
    combinator::{map, map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded},
};

use super::ScriptError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Number(f64),
    Str(String),
    Ident(&'a str),
    Punct(&'a str),
}

/// A token with its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}

/// Split `source` into tokens, skipping whitespace.
///
/// # Errors
/// Returns [`ScriptError::Syntax`] at the first character no token can start with.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, ScriptError> {
    let mut tokens = Vec::new();
    let mut rest = source.trim_start();

    while !rest.is_empty() {
        let offset = source.len() - rest.len();
        match token(rest) {
            Ok((remaining, token)) => {
                tokens.push(Spanned { token, offset });
                rest = remaining.trim_start();
            }
            Err(_) => {
                return Err(ScriptError::Syntax {
                    offset,
                    message: describe_bad_input(rest),
                });
            }
        }
    }

    Ok(tokens)
}

fn describe_bad_input(rest: &str) -> String {
    match rest.chars().next() {
        Some('"' | '\'') => "unterminated string literal".to_string(),
        Some(c) => format!("unexpected character '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((number, string_literal, identifier, punct))(input)
}

fn number(input: &str) -> IResult<&str, Token<'_>> {
    map(
        map_res(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            str::parse::<f64>,
        ),
        Token::Number,
    )(input)
}

fn string_literal(input: &str) -> IResult<&str, Token<'_>> {
    map(alt((double_quoted, single_quoted)), Token::Str)(input)
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    quoted(input, '"')
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    quoted(input, '\'')
}

fn quoted(input: &str, quote: char) -> IResult<&str, String> {
    let (input, _) = char(quote)(input)?;
    let (input, chars) = many0(alt((
        preceded(char('\\'), map(anychar, unescape)),
        satisfy(|c| c != quote && c != '\\'),
    )))(input)?;
    let (input, _) = char(quote)(input)?;
    Ok((input, chars.into_iter().collect()))
}

const fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn identifier(input: &str) -> IResult<&str, Token<'_>> {
    map(
        recognize(pair(satisfy(is_ident_start), take_while(is_ident_continue))),
        Token::Ident,
    )(input)
}

fn punct(input: &str) -> IResult<&str, Token<'_>> {
    map(
        alt((
            alt((
                tag("==="),
                tag("!=="),
                tag("=>"),
                tag("=="),
                tag("!="),
                tag("<="),
                tag(">="),
                tag("&&"),
                tag("||"),
                tag("??"),
            )),
            recognize(one_of("()[]{},.:?!<>+-*/%")),
        )),
        Token::Punct,
    )(input)
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
