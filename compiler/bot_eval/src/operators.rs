//! Arithmetic and comparison commands.
//!
//! Scripts mix integers and floats freely. Two ints stay in checked `i64`
//! arithmetic; anything involving a float is computed in `f64` and the
//! result normalized back to `Int` when it is integral. Bools count as `0`
//! and `1`; symbols are not numbers.

use std::cmp::Ordering;

use bot_ir::{Command, Value};

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalError, EvalResult};

const NUMBER: &str = "a number";

#[inline]
fn checked_arith(result: Option<i64>, command: Command) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(command))
}

/// Bools take part in arithmetic and comparisons as `0` and `1`.
#[inline]
fn numeric(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::Int(i64::from(b)),
        other => other,
    }
}

fn floats(command: Command, a: Value, b: Value) -> Result<(f64, f64), EvalError> {
    let x = a.as_f64().ok_or_else(|| type_mismatch(command, NUMBER, &a))?;
    let y = b.as_f64().ok_or_else(|| type_mismatch(command, NUMBER, &b))?;
    Ok((x, y))
}

pub fn add(a: Value, b: Value) -> EvalResult {
    let (a, b) = (numeric(a), numeric(b));
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_arith(x.checked_add(y), Command::Add),
        _ => floats(Command::Add, a, b).map(|(x, y)| Value::number(x + y)),
    }
}

pub fn sub(a: Value, b: Value) -> EvalResult {
    let (a, b) = (numeric(a), numeric(b));
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_arith(x.checked_sub(y), Command::Sub),
        _ => floats(Command::Sub, a, b).map(|(x, y)| Value::number(x - y)),
    }
}

pub fn mul(a: Value, b: Value) -> EvalResult {
    let (a, b) = (numeric(a), numeric(b));
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => checked_arith(x.checked_mul(y), Command::Mul),
        _ => floats(Command::Mul, a, b).map(|(x, y)| Value::number(x * y)),
    }
}

/// True division: `div(7, 2)` is `3.5`, `div(8, 2)` is `4`.
pub fn div(a: Value, b: Value) -> EvalResult {
    let (a, b) = (numeric(a), numeric(b));
    match (a, b) {
        (Value::Int(_), Value::Int(0)) => Err(division_by_zero()),
        (Value::Int(x), Value::Int(y)) if x.checked_rem(y) == Some(0) => {
            checked_arith(x.checked_div(y), Command::Div)
        }
        (Value::Int(i64::MIN), Value::Int(-1)) => Err(integer_overflow(Command::Div)),
        _ => {
            let (x, y) = floats(Command::Div, a, b)?;
            if y == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::number(x / y))
        }
    }
}

/// Equality over any two values. Numbers and bools compare by value, so
/// `eq(eq(1, 1), 1)` holds; symbols only equal the same symbol.
#[allow(clippy::float_cmp, reason = "script equality is exact")]
pub fn eq(a: Value, b: Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        _ => match (numeric(a).as_f64(), numeric(b).as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Numeric ordering; `None` when a NaN is involved.
fn compare(command: Command, a: Value, b: Value) -> Result<Option<Ordering>, EvalError> {
    match (numeric(a), numeric(b)) {
        (Value::Int(x), Value::Int(y)) => Ok(Some(x.cmp(&y))),
        (a, b) => floats(command, a, b).map(|(x, y)| x.partial_cmp(&y)),
    }
}

/// Evaluate one of `gt`, `gqt`, `lt`, `lqt`.
pub fn ordering(command: Command, a: Value, b: Value) -> EvalResult {
    let ord = compare(command, a, b)?;
    let result = match command {
        Command::Gt => matches!(ord, Some(Ordering::Greater)),
        Command::Gqt => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        Command::Lt => matches!(ord, Some(Ordering::Less)),
        Command::Lqt => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
        _ => return Err(type_mismatch(command, "a comparison", &a)),
    };
    Ok(Value::Bool(result))
}
