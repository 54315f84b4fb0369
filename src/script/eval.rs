use std::cmp::Ordering;
use std::rc::Rc;

use indexmap::IndexMap;

use super::ScriptError;
use super::parser::{BinaryOp, Expr, LogicalOp, UnaryOp};
use super::value::Value;

/// Steps allowed per evaluation. Every visited expression node costs one step.
pub const DEFAULT_STEP_BUDGET: usize = 1_000_000;

/// List methods that take an arrow function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Callback {
    Filter,
    Map,
    Some,
    Every,
    Find,
}

impl Callback {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "filter" => Some(Self::Filter),
            "map" => Some(Self::Map),
            "some" => Some(Self::Some),
            "every" => Some(Self::Every),
            "find" => Some(Self::Find),
            _ => None,
        }
    }
}

pub struct Evaluator {
    /// Innermost binding last; lookups search from the end. Values are shared
    /// so reading a bound list or record does not copy it.
    scope: Vec<(String, Rc<Value>)>,
    steps: usize,
    budget: usize,
}

impl Evaluator {
    pub fn new(bindings: &[(&str, Value)], budget: usize) -> Self {
        Self {
            scope: bindings
                .iter()
                .map(|(name, value)| ((*name).to_string(), Rc::new(value.clone())))
                .collect(),
            steps: 0,
            budget,
        }
    }

    fn tick(&mut self) -> Result<(), ScriptError> {
        self.steps += 1;
        if self.steps > self.budget {
            Err(ScriptError::BudgetExceeded(self.budget))
        } else {
            Ok(())
        }
    }

    fn is_bound(&self, name: &str) -> bool {
        self.scope.iter().any(|(n, _)| n == name)
    }

    fn lookup(&self, name: &str) -> Result<Rc<Value>, ScriptError> {
        self.scope
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, value)| Rc::clone(value))
            .ok_or_else(|| ScriptError::Reference(name.to_string()))
    }

    /// Evaluate an expression that is only read from, such as the object of a
    /// member access. Bound names come back shared instead of copied.
    fn eval_shared(&mut self, expr: &Expr) -> Result<Rc<Value>, ScriptError> {
        if let Expr::Variable(name) = expr {
            self.tick()?;
            return self.lookup(name);
        }
        self.eval(expr).map(Rc::new)
    }

    pub fn eval(&mut self, expr: &Expr) -> Result<Value, ScriptError> {
        self.tick()?;
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Variable(name) => self.lookup(name).map(|value| Value::clone(&value)),
            Expr::List(items) => items
                .iter()
                .map(|item| self.eval(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Expr::Record(fields) => {
                let mut record = IndexMap::with_capacity(fields.len());
                for (key, value) in fields {
                    let value = self.eval(value)?;
                    record.insert(key.clone(), value);
                }
                Ok(Value::Record(record))
            }
            Expr::Member { object, property } => {
                let target = self.eval_shared(object)?;
                property_of(&target, property)
            }
            Expr::Index { object, index } => {
                let target = self.eval_shared(object)?;
                let index = self.eval(index)?;
                index_of(&target, &index)
            }
            Expr::Call { callee, args } => self.call(callee, args),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                unary(*op, &value)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                binary(*op, &left, &right)
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval(left)?;
                let short_circuit = match op {
                    LogicalOp::And => !left.is_truthy(),
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::Nullish => !left.is_null(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.eval(right)
                }
            }
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                if self.eval(test)?.is_truthy() {
                    self.eval(consequent)
                } else {
                    self.eval(alternate)
                }
            }
            Expr::Arrow { .. } => Err(ScriptError::Type(
                "arrow functions can only be passed to list methods".to_string(),
            )),
        }
    }

    fn call(&mut self, callee: &Expr, args: &[Expr]) -> Result<Value, ScriptError> {
        let Expr::Member { object, property } = callee else {
            return Err(match callee {
                Expr::Variable(name) if !self.is_bound(name) => {
                    ScriptError::Reference(name.clone())
                }
                Expr::Variable(name) => ScriptError::Type(format!("{name} is not a function")),
                _ => ScriptError::Type("expression is not a function".to_string()),
            });
        };

        let receiver = self.eval_shared(object)?;
        if let Value::List(items) = &*receiver
            && let Some(callback) = Callback::from_name(property)
        {
            return self.call_with_callback(items, callback, property, args);
        }

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        call_method(&receiver, property, &values)
    }

    fn call_with_callback(
        &mut self,
        items: &[Value],
        callback: Callback,
        name: &str,
        args: &[Expr],
    ) -> Result<Value, ScriptError> {
        let Some(Expr::Arrow { params, body }) = args.first() else {
            return Err(ScriptError::Type(format!(
                "list.{name} expects an arrow function"
            )));
        };

        let mut collected = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let result = self.apply(params, body, item, index)?;
            match callback {
                Callback::Filter => {
                    if result.is_truthy() {
                        collected.push(item.clone());
                    }
                }
                Callback::Map => collected.push(result),
                Callback::Some => {
                    if result.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                }
                Callback::Every => {
                    if !result.is_truthy() {
                        return Ok(Value::Bool(false));
                    }
                }
                Callback::Find => {
                    if result.is_truthy() {
                        return Ok(item.clone());
                    }
                }
            }
        }

        Ok(match callback {
            Callback::Filter | Callback::Map => Value::List(collected),
            Callback::Some => Value::Bool(false),
            Callback::Every => Value::Bool(true),
            Callback::Find => Value::Null,
        })
    }

    /// Bind `(item, index)` to the arrow's parameters and evaluate its body.
    fn apply(
        &mut self,
        params: &[String],
        body: &Expr,
        item: &Value,
        index: usize,
    ) -> Result<Value, ScriptError> {
        let outer = self.scope.len();
        for (position, param) in params.iter().enumerate() {
            let value = match position {
                0 => item.clone(),
                1 => count(index),
                _ => Value::Null,
            };
            self.scope.push((param.clone(), Rc::new(value)));
        }
        let result = self.eval(body);
        self.scope.truncate(outer);
        result
    }
}

#[allow(clippy::cast_precision_loss)]
const fn count(n: usize) -> Value {
    Value::Number(n as f64)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_index(n: f64) -> Option<usize> {
    (n >= 0.0 && n.fract() == 0.0).then_some(n as usize)
}

fn null_access(name: &str) -> ScriptError {
    ScriptError::Type(format!(
        "cannot read properties of null (reading '{name}')"
    ))
}

fn property_of(target: &Value, name: &str) -> Result<Value, ScriptError> {
    match target {
        Value::Null => Err(null_access(name)),
        Value::String(s) if name == "length" => Ok(count(s.chars().count())),
        Value::List(items) if name == "length" => Ok(count(items.len())),
        Value::Record(fields) => Ok(fields.get(name).cloned().unwrap_or(Value::Null)),
        _ => Ok(Value::Null),
    }
}

fn index_of(target: &Value, index: &Value) -> Result<Value, ScriptError> {
    match (target, index) {
        (Value::Null, _) => Err(null_access(&index.to_string())),
        (Value::List(items), Value::Number(n)) => Ok(as_index(*n)
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::String(s), Value::Number(n)) => Ok(as_index(*n)
            .and_then(|i| s.chars().nth(i))
            .map_or(Value::Null, |c| Value::String(c.to_string()))),
        (_, Value::String(key)) => property_of(target, key),
        _ => Ok(Value::Null),
    }
}

fn unary(op: UnaryOp, value: &Value) -> Result<Value, ScriptError> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
        UnaryOp::Negate => value.as_f64().map(|n| Value::Number(-n)).ok_or_else(|| {
            ScriptError::Type(format!("cannot negate {}", value.type_name()))
        }),
    }
}

fn type_mismatch(verb: &str, left: &Value, right: &Value) -> ScriptError {
    ScriptError::Type(format!(
        "cannot {verb} {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

fn numeric(
    verb: &str,
    left: &Value,
    right: &Value,
    apply: fn(f64, f64) -> f64,
) -> Result<Value, ScriptError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(*a, *b))),
        _ => Err(type_mismatch(verb, left, right)),
    }
}

/// Numbers compare numerically, strings lexicographically; `NaN` compares false.
fn ordered(
    left: &Value,
    right: &Value,
    accept: fn(Ordering) -> bool,
) -> Result<Value, ScriptError> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => return Err(type_mismatch("compare", left, right)),
    };
    Ok(Value::Bool(ordering.is_some_and(accept)))
}

fn binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ScriptError> {
    match op {
        BinaryOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(_), _) | (_, Value::String(_)) => {
                Ok(Value::String(format!("{left}{right}")))
            }
            _ => Err(type_mismatch("add", left, right)),
        },
        BinaryOp::Sub => numeric("subtract", left, right, |a, b| a - b),
        BinaryOp::Mul => numeric("multiply", left, right, |a, b| a * b),
        BinaryOp::Div => numeric("divide", left, right, |a, b| a / b),
        BinaryOp::Rem => numeric("divide", left, right, |a, b| a % b),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Lt => ordered(left, right, Ordering::is_lt),
        BinaryOp::LtEq => ordered(left, right, Ordering::is_le),
        BinaryOp::Gt => ordered(left, right, Ordering::is_gt),
        BinaryOp::GtEq => ordered(left, right, Ordering::is_ge),
    }
}

fn not_a_function(receiver: &Value, name: &str) -> ScriptError {
    ScriptError::Type(format!("{}.{name} is not a function", receiver.type_name()))
}

fn call_method(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, ScriptError> {
    match receiver {
        Value::String(s) => string_method(s, name, args),
        Value::List(items) => list_method(items, name, args),
        Value::Null => Err(null_access(name)),
        other => Err(not_a_function(other, name)),
    }
}

fn string_arg(args: &[Value], position: usize) -> String {
    args.get(position).map(ToString::to_string).unwrap_or_default()
}

/// Resolve a `slice` bound: negative counts from the end, result clamped to `len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn slice_bound(arg: Option<&Value>, len: usize, default: usize) -> usize {
    match arg.and_then(Value::as_f64) {
        None => default,
        Some(n) if n < 0.0 => len.saturating_sub((-n) as usize),
        Some(n) => (n as usize).min(len),
    }
}

fn slice_range(args: &[Value], len: usize) -> std::ops::Range<usize> {
    let start = slice_bound(args.first(), len, 0);
    let end = slice_bound(args.get(1), len, len);
    start..end.max(start)
}

fn string_method(s: &str, name: &str, args: &[Value]) -> Result<Value, ScriptError> {
    let value = match name {
        "includes" => Value::Bool(s.contains(&string_arg(args, 0))),
        "startsWith" => Value::Bool(s.starts_with(&string_arg(args, 0))),
        "endsWith" => Value::Bool(s.ends_with(&string_arg(args, 0))),
        "indexOf" => {
            let needle = string_arg(args, 0);
            s.find(&needle)
                .map_or(Value::Number(-1.0), |byte| count(s[..byte].chars().count()))
        }
        "toLowerCase" => Value::String(s.to_lowercase()),
        "toUpperCase" => Value::String(s.to_uppercase()),
        "trim" => Value::String(s.trim().to_string()),
        "split" => {
            let separator = string_arg(args, 0);
            let parts: Vec<Value> = if separator.is_empty() {
                s.chars().map(|c| Value::String(c.to_string())).collect()
            } else {
                s.split(separator.as_str()).map(Value::from).collect()
            };
            Value::List(parts)
        }
        "slice" => {
            let chars: Vec<char> = s.chars().collect();
            let range = slice_range(args, chars.len());
            Value::String(chars[range].iter().collect())
        }
        _ => return Err(not_a_function(&Value::String(String::new()), name)),
    };
    Ok(value)
}

fn list_method(items: &[Value], name: &str, args: &[Value]) -> Result<Value, ScriptError> {
    let needle = args.first().unwrap_or(&Value::Null);
    let value = match name {
        "includes" => Value::Bool(items.contains(needle)),
        "indexOf" => items
            .iter()
            .position(|item| item == needle)
            .map_or(Value::Number(-1.0), count),
        "join" => {
            let separator = args.first().map_or_else(|| ",".to_string(), ToString::to_string);
            let parts: Vec<String> = items
                .iter()
                .map(|item| {
                    if item.is_null() {
                        String::new()
                    } else {
                        item.to_string()
                    }
                })
                .collect();
            Value::String(parts.join(&separator))
        }
        "slice" => Value::List(items[slice_range(args, items.len())].to_vec()),
        _ => return Err(not_a_function(&Value::List(Vec::new()), name)),
    };
    Ok(value)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
