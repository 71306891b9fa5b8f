//! Runtime errors raised while a script runs.
//!
//! Any of these aborts the rest of the acting unit's script for the turn;
//! what happens next is the game's error policy. Gameplay no-ops (moving
//! with no free tile, a second critical action) are not errors.
//!
//! Construct errors through the factory functions below rather than the
//! variants directly, so call sites read as what went wrong.

use bot_diagnostic::{Diagnostic, ErrorCode};
use bot_ir::{Command, Value};
use thiserror::Error;

/// Result of evaluating a single command or node.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined symbol `{name}`")]
    UndefinedSymbol { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("`{command}` expected {expected}, got {got}")]
    TypeMismatch {
        command: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("integer overflow in `{command}`")]
    IntegerOverflow { command: &'static str },

    #[error("invalid argument to `{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedSymbol { .. } => ErrorCode::E6001,
            EvalError::DivisionByZero => ErrorCode::E6002,
            EvalError::TypeMismatch { .. } => ErrorCode::E6003,
            EvalError::IntegerOverflow { .. } => ErrorCode::E6004,
            EvalError::InvalidArgument { .. } => ErrorCode::E6005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UndefinedSymbol { name } => diag
                .with_note("each unit has its own variables; they start out empty")
                .with_suggestion(format!("define it first, e.g. `define({name}, 0)`")),
            EvalError::DivisionByZero => {
                diag.with_suggestion("guard the division with `if(neg(eq(divisor, 0)), ...)`")
            }
            EvalError::TypeMismatch { .. }
            | EvalError::IntegerOverflow { .. }
            | EvalError::InvalidArgument { .. } => diag,
        }
    }
}

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::UndefinedSymbol {
        name: name.to_owned(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn type_mismatch(command: Command, expected: &'static str, got: &Value) -> EvalError {
    EvalError::TypeMismatch {
        command: command.name(),
        expected,
        got: got.type_name(),
    }
}

#[cold]
pub fn integer_overflow(command: Command) -> EvalError {
    EvalError::IntegerOverflow {
        command: command.name(),
    }
}

#[cold]
pub fn invalid_argument(command: Command, reason: impl Into<String>) -> EvalError {
    EvalError::InvalidArgument {
        command: command.name(),
        reason: reason.into(),
    }
}

/// A call reached dispatch with the wrong number of values. Only possible
/// for hand-built executables; compiled ones are arity-checked.
#[cold]
pub fn wrong_arg_count(command: Command, got: usize) -> EvalError {
    invalid_argument(
        command,
        format!("expected {} arguments, got {got}", command.arity()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(undefined_symbol("hp").to_string(), "undefined symbol `hp`");
        assert_eq!(
            type_mismatch(Command::Add, "a number", &Value::Bool(true)).to_string(),
            "`add` expected a number, got bool"
        );
        assert_eq!(
            integer_overflow(Command::Mul).to_string(),
            "integer overflow in `mul`"
        );
        assert_eq!(
            wrong_arg_count(Command::Neg, 2).to_string(),
            "invalid argument to `neg`: expected 1 arguments, got 2"
        );
    }

    #[test]
    fn diagnostics_use_runtime_codes() {
        let diag = division_by_zero().to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E6002);
        assert!(diag.code.is_runtime_error());

        let diag = undefined_symbol("target").to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E6001);
        assert_eq!(diag.suggestions, ["define it first, e.g. `define(target, 0)`"]);
    }
}
