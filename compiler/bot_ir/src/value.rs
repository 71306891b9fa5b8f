//! Runtime values.

use std::fmt;

use crate::{Name, StringInterner};

/// A dynamically typed script value.
///
/// Type constraints are not enforced here: each command checks its own
/// arguments when it runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// An unresolved symbol name. Resolved through the acting unit's
    /// variable context before being handed to most commands.
    Symbol(Name),
}

impl Value {
    /// Create a number from a float, normalizing integral values to `Int`.
    ///
    /// Non-finite values and integral values outside the `i64` range stay
    /// floats.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range checked against i64 bounds before the cast"
    )]
    #[allow(clippy::float_cmp, reason = "exact integrality test")]
    pub fn number(n: f64) -> Self {
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
        if n.is_finite() && n == n.floor() && (-I64_BOUND..I64_BOUND).contains(&n) {
            return Value::Int(n as i64);
        }
        Value::Float(n)
    }

    /// Script truthiness: zero and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Symbol(_) => true,
        }
    }

    /// Numeric view of the value, if it is a number.
    #[expect(
        clippy::cast_precision_loss,
        reason = "script numbers mix ints and floats freely"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Bool(_) | Value::Symbol(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<Name> {
        match self {
            Value::Symbol(name) => Some(*name),
            _ => None,
        }
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Symbol(_) => "symbol",
        }
    }

    /// Render the value for player-facing output.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

/// Display adapter that resolves symbol names through an interner.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Symbol(name) => f.write_str(self.interner.lookup(*name)),
        }
    }
}
