use super::ScriptError;
use super::lexer::{Spanned, Token, tokenize};
use super::value::Value;

/// Maximum nesting of sub-expressions accepted by the parser. Also caps the
/// height of the finished tree, including left-deep operator and postfix chains.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
    Nullish,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Variable(String),
    List(Vec<Expr>),
    Record(Vec<(String, Expr)>),
    Member {
        object: Box<Expr>,
        property: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Arrow {
        params: Vec<String>,
        body: Box<Expr>,
    },
}

const EQUALITY_OPS: &[(&str, BinaryOp)] = &[
    ("===", BinaryOp::Eq),
    ("==", BinaryOp::Eq),
    ("!==", BinaryOp::NotEq),
    ("!=", BinaryOp::NotEq),
];
const RELATIONAL_OPS: &[(&str, BinaryOp)] = &[
    ("<=", BinaryOp::LtEq),
    ("<", BinaryOp::Lt),
    (">=", BinaryOp::GtEq),
    (">", BinaryOp::Gt),
];
const ADDITIVE_OPS: &[(&str, BinaryOp)] = &[("+", BinaryOp::Add), ("-", BinaryOp::Sub)];
const MULTIPLICATIVE_OPS: &[(&str, BinaryOp)] = &[
    ("*", BinaryOp::Mul),
    ("/", BinaryOp::Div),
    ("%", BinaryOp::Rem),
];

/// Parse a single expression. One trailing `;` is tolerated.
///
/// # Errors
/// Returns a syntax error for malformed input, or [`ScriptError::TooDeep`]
/// when nesting exceeds [`MAX_DEPTH`].
pub fn parse(source: &str) -> Result<Expr, ScriptError> {
    let trimmed = source.trim_end();
    let source = trimmed.strip_suffix(';').unwrap_or(trimmed);

    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ScriptError::Syntax {
            offset: 0,
            message: "empty expression".to_string(),
        });
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end_offset: source.len(),
    };
    let expr = parser.expression()?;
    if let Some(extra) = parser.peek() {
        return Err(ScriptError::Syntax {
            offset: extra.offset,
            message: format!("unexpected {}", describe(&extra.token)),
        });
    }
    Ok(expr)
}

/// Reject trees taller than [`MAX_DEPTH`], so evaluating and dropping them
/// stays within a fixed recursion depth.
fn bounded(expr: Expr) -> Result<Expr, ScriptError> {
    if height(&expr) > MAX_DEPTH {
        Err(ScriptError::TooDeep(MAX_DEPTH))
    } else {
        Ok(expr)
    }
}

/// Nodes on the longest root-to-leaf path.
fn height(expr: &Expr) -> usize {
    let below = match expr {
        Expr::Literal(_) | Expr::Variable(_) => 0,
        Expr::List(items) => items.iter().map(height).max().unwrap_or(0),
        Expr::Record(fields) => fields.iter().map(|(_, v)| height(v)).max().unwrap_or(0),
        Expr::Member { object, .. } => height(object),
        Expr::Index { object, index } => height(object).max(height(index)),
        Expr::Call { callee, args } => args.iter().map(height).fold(height(callee), usize::max),
        Expr::Unary { operand, .. } => height(operand),
        Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
            height(left).max(height(right))
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => height(test).max(height(consequent)).max(height(alternate)),
        Expr::Arrow { body, .. } => height(body),
    };
    below + 1
}

fn describe(token: &Token<'_>) -> String {
    match token {
        Token::Number(n) => format!("number {}", super::value::format_number(*n)),
        Token::Str(_) => "string".to_string(),
        Token::Ident(name) => format!("identifier '{name}'"),
        Token::Punct(p) => format!("'{p}'"),
    }
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    pos: usize,
    depth: usize,
    end_offset: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Spanned<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_token_at(&self, pos: usize) -> Option<&Token<'a>> {
        self.tokens.get(pos).map(|s| &s.token)
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end_offset, |s| s.offset)
    }

    fn is_punct_at(&self, pos: usize, punct: &str) -> bool {
        matches!(self.peek_token_at(pos), Some(Token::Punct(p)) if *p == punct)
    }

    fn eat(&mut self, punct: &str) -> bool {
        if self.is_punct_at(self.pos, punct) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, punct: &str) -> Result<(), ScriptError> {
        if self.eat(punct) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{punct}'")))
        }
    }

    fn error(&self, expected: &str) -> ScriptError {
        let found = self
            .peek()
            .map_or_else(|| "end of input".to_string(), |s| describe(&s.token));
        ScriptError::Syntax {
            offset: self.offset(),
            message: format!("{expected}, found {found}"),
        }
    }

    fn expect_ident(&mut self) -> Result<String, ScriptError> {
        match self.peek_token_at(self.pos) {
            Some(Token::Ident(name)) => {
                let name = (*name).to_string();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Expr, ScriptError>,
    ) -> Result<Expr, ScriptError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ScriptError::TooDeep(MAX_DEPTH));
        }
        let result = parse(self).and_then(bounded);
        self.depth -= 1;
        result
    }

    fn expression(&mut self) -> Result<Expr, ScriptError> {
        self.nested(|p| {
            if p.arrow_ahead() {
                p.arrow()
            } else {
                p.conditional()
            }
        })
    }

    /// `x =>` or `(a, b) =>` at the current position.
    fn arrow_ahead(&self) -> bool {
        match self.peek_token_at(self.pos) {
            Some(Token::Ident(_)) => self.is_punct_at(self.pos + 1, "=>"),
            Some(Token::Punct("(")) => {
                let mut pos = self.pos + 1;
                loop {
                    match self.peek_token_at(pos) {
                        Some(Token::Punct(")")) => return self.is_punct_at(pos + 1, "=>"),
                        Some(Token::Ident(_) | Token::Punct(",")) => pos += 1,
                        _ => return false,
                    }
                }
            }
            _ => false,
        }
    }

    fn arrow(&mut self) -> Result<Expr, ScriptError> {
        let mut params = Vec::new();
        if self.eat("(") {
            if !self.eat(")") {
                loop {
                    params.push(self.expect_ident()?);
                    if self.eat(")") {
                        break;
                    }
                    self.expect(",")?;
                }
            }
        } else {
            params.push(self.expect_ident()?);
        }
        self.expect("=>")?;
        let body = self.expression()?;
        Ok(Expr::Arrow {
            params,
            body: Box::new(body),
        })
    }

    fn conditional(&mut self) -> Result<Expr, ScriptError> {
        let test = self.nullish()?;
        if !self.eat("?") {
            return Ok(test);
        }
        let consequent = self.expression()?;
        self.expect(":")?;
        let alternate = self.expression()?;
        Ok(Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    fn nullish(&mut self) -> Result<Expr, ScriptError> {
        self.logical("??", LogicalOp::Nullish, Self::or)
    }

    fn or(&mut self) -> Result<Expr, ScriptError> {
        self.logical("||", LogicalOp::Or, Self::and)
    }

    fn and(&mut self) -> Result<Expr, ScriptError> {
        self.logical("&&", LogicalOp::And, Self::equality)
    }

    fn logical(
        &mut self,
        punct: &str,
        op: LogicalOp,
        operand: fn(&mut Self) -> Result<Expr, ScriptError>,
    ) -> Result<Expr, ScriptError> {
        let mut left = operand(self)?;
        while self.eat(punct) {
            let right = operand(self)?;
            left = bounded(Expr::Logical {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })?;
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ScriptError> {
        self.binary(EQUALITY_OPS, Self::relational)
    }

    fn relational(&mut self) -> Result<Expr, ScriptError> {
        self.binary(RELATIONAL_OPS, Self::additive)
    }

    fn additive(&mut self) -> Result<Expr, ScriptError> {
        self.binary(ADDITIVE_OPS, Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expr, ScriptError> {
        self.binary(MULTIPLICATIVE_OPS, Self::unary)
    }

    /// Left-associative binary level. Longer operators are listed first in `ops`.
    fn binary(
        &mut self,
        ops: &[(&str, BinaryOp)],
        operand: fn(&mut Self) -> Result<Expr, ScriptError>,
    ) -> Result<Expr, ScriptError> {
        let mut left = operand(self)?;
        loop {
            let Some(&(_, op)) = ops.iter().find(|(punct, _)| self.is_punct_at(self.pos, punct))
            else {
                return Ok(left);
            };
            self.pos += 1;
            let right = operand(self)?;
            left = bounded(Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })?;
        }
    }

    fn unary(&mut self) -> Result<Expr, ScriptError> {
        let op = if self.eat("!") {
            UnaryOp::Not
        } else if self.eat("-") {
            UnaryOp::Negate
        } else {
            return self.postfix();
        };
        let operand = self.nested(Self::unary)?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn postfix(&mut self) -> Result<Expr, ScriptError> {
        let mut expr = self.primary()?;
        loop {
            expr = if self.eat(".") {
                let property = self.expect_ident()?;
                Expr::Member {
                    object: Box::new(expr),
                    property,
                }
            } else if self.eat("[") {
                let index = self.expression()?;
                self.expect("]")?;
                Expr::Index {
                    object: Box::new(expr),
                    index: Box::new(index),
                }
            } else if self.eat("(") {
                let args = self.sequence(")")?;
                Expr::Call {
                    callee: Box::new(expr),
                    args,
                }
            } else {
                return Ok(expr);
            };
            expr = bounded(expr)?;
        }
    }

    /// Comma-separated expressions up to `close`; a trailing comma is allowed.
    fn sequence(&mut self, close: &str) -> Result<Vec<Expr>, ScriptError> {
        let mut items = Vec::new();
        while !self.eat(close) {
            items.push(self.expression()?);
            if !self.eat(",") {
                self.expect(close)?;
                break;
            }
        }
        Ok(items)
    }

    fn primary(&mut self) -> Result<Expr, ScriptError> {
        let Some(token) = self.peek_token_at(self.pos).cloned() else {
            return Err(self.error("expected expression"));
        };
        let expr = match token {
            Token::Number(n) => Expr::Literal(Value::Number(n)),
            Token::Str(s) => Expr::Literal(Value::String(s)),
            Token::Ident("true") => Expr::Literal(Value::Bool(true)),
            Token::Ident("false") => Expr::Literal(Value::Bool(false)),
            Token::Ident("null" | "undefined") => Expr::Literal(Value::Null),
            Token::Ident(name) => Expr::Variable(name.to_string()),
            Token::Punct("(") => {
                self.pos += 1;
                let inner = self.expression()?;
                self.expect(")")?;
                return Ok(inner);
            }
            Token::Punct("[") => {
                self.pos += 1;
                return self.nested(|p| p.sequence("]").map(Expr::List));
            }
            Token::Punct("{") => {
                self.pos += 1;
                return self.nested(Self::record);
            }
            Token::Punct(_) => return Err(self.error("expected expression")),
        };
        self.pos += 1;
        Ok(expr)
    }

    /// Record literal body after `{`. Keys are identifiers or strings;
    /// `{ name }` is shorthand for `{ name: name }`.
    fn record(&mut self) -> Result<Expr, ScriptError> {
        let mut fields = Vec::new();
        while !self.eat("}") {
            let key = match self.peek_token_at(self.pos) {
                Some(Token::Ident(name)) => (*name).to_string(),
                Some(Token::Str(s)) => s.clone(),
                _ => return Err(self.error("expected property name")),
            };
            self.pos += 1;

            let value = if self.eat(":") {
                self.expression()?
            } else {
                Expr::Variable(key.clone())
            };
            fields.push((key, value));

            if !self.eat(",") {
                self.expect("}")?;
                break;
            }
        }
        Ok(Expr::Record(fields))
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
