//! Parse error types.

use std::fmt;

use bot_diagnostic::{Diagnostic, ErrorCode};

/// A syntax problem found while splitting or classifying script text.
///
/// Every variant keeps the offending token so the rendered diagnostic can
/// quote it back to the script author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Token is not a number, a symbol or a call.
    InvalidToken { token: String },
    /// Parentheses in a call do not balance.
    UnclosedParentheses { token: String },
    /// Something follows the closing parenthesis of a call, as in `a(b)(c)`.
    TrailingText { token: String, trailing: String },
    /// An argument between commas is blank, as in `add(1, )`.
    EmptyArgument { token: String, index: usize },
    /// A number literal that does not denote a finite value (`inf`, `1e999`).
    NonFiniteNumber { token: String },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::InvalidToken { .. } => ErrorCode::E1001,
            ParseError::UnclosedParentheses { .. } => ErrorCode::E1002,
            ParseError::TrailingText { .. } => ErrorCode::E1003,
            ParseError::EmptyArgument { .. } => ErrorCode::E1004,
            ParseError::NonFiniteNumber { .. } => ErrorCode::E1005,
        }
    }

    /// The token the error was found in.
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidToken { token }
            | ParseError::UnclosedParentheses { token }
            | ParseError::TrailingText { token, .. }
            | ParseError::EmptyArgument { token, .. }
            | ParseError::NonFiniteNumber { token } => token,
        }
    }

    /// Convert to a diagnostic, adding a hint for the common mistakes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::InvalidToken { token } if token.starts_with('(') => diag
                .with_note("a command name must be followed directly by `(`")
                .with_suggestion("remove the whitespace between the command name and `(`"),
            ParseError::InvalidToken { token } if token.contains('_') => diag
                .with_note("symbols may only contain letters and digits"),
            ParseError::InvalidToken { .. } => diag,
            ParseError::UnclosedParentheses { .. } => {
                diag.with_suggestion("check that every `(` has a matching `)`")
            }
            ParseError::TrailingText { .. } => {
                diag.with_suggestion("separate statements with whitespace")
            }
            ParseError::EmptyArgument { .. } => {
                diag.with_note("every argument must be a number, a symbol or a command call")
            }
            ParseError::NonFiniteNumber { .. } => {
                diag.with_note("number literals must be finite")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken { token } => {
                write!(f, "syntax error in expression `{token}`")
            }
            ParseError::UnclosedParentheses { token } => {
                write!(f, "unclosed parentheses in `{token}`")
            }
            ParseError::TrailingText { token, trailing } => {
                write!(f, "unexpected `{trailing}` after the end of call `{token}`")
            }
            ParseError::EmptyArgument { token, index } => {
                write!(f, "argument {} of `{token}` is empty", index + 1)
            }
            ParseError::NonFiniteNumber { token } => {
                write!(f, "number literal `{token}` is not finite")
            }
        }
    }
}

impl std::error::Error for ParseError {}
