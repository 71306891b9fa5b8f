//! Parser for the bot-battle scripting language.
//!
//! The language has no lexer in the usual sense. Script text is split into
//! statements on whitespace outside parentheses, and each statement is then
//! classified on its own as a number, a bare symbol, or a command call whose
//! arguments are themselves script text:
//!
//! ```text
//! define(hp, 3) if(gt(num_adjacent_enemies(), 0), attack())
//! ^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!   statement                  statement
//! ```
//!
//! Building nodes out of these pieces is the evaluator's job; this crate
//! only answers "what is this piece of text".

mod error;

use bot_ir::Value;
use tracing::trace;

pub use error::ParseError;

/// What a single statement token is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Parses as a decimal or floating point literal.
    Number,
    /// Non-empty and entirely alphanumeric.
    Symbol,
    /// `name(args...)` with no whitespace in `name`.
    Call,
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split script text into top-level statements.
///
/// Spaces only separate statements at parenthesis depth 0, so text inside a
/// call is never split. Depth may go negative on stray `)`; no split happens
/// until it returns to 0, and the malformed token is left for
/// [`classify`] to reject.
pub fn parse(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut depth: i64 = 0;

    for c in normalized.chars() {
        match c {
            ' ' if depth == 0 => {
                if !current.is_empty() {
                    statements.push(std::mem::take(&mut current));
                }
                continue;
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        current.push(c);
    }
    if !current.is_empty() {
        statements.push(current);
    }

    trace!(count = statements.len(), "split script text into statements");
    statements
}

/// Whether the token parses as a floating point literal.
///
/// This includes `inf` and `nan`, which [`number_value`] then rejects.
#[inline]
pub fn is_number(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

/// Non-empty and made only of alphanumeric characters (`_` excluded).
#[inline]
pub fn is_symbol(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Shape check for a command call: ends with `)`, and the text before the
/// first `(` is non-empty and contains no whitespace.
///
/// Balance is checked later by [`get_args`].
pub fn is_call(token: &str) -> bool {
    if !token.ends_with(')') {
        return false;
    }
    match token.find('(') {
        Some(0) | None => false,
        Some(open) => !token[..open].contains(char::is_whitespace),
    }
}

/// Classify a statement token. Numbers take precedence over symbols.
pub fn classify(token: &str) -> Result<TokenClass, ParseError> {
    if is_number(token) {
        Ok(TokenClass::Number)
    } else if is_symbol(token) {
        Ok(TokenClass::Symbol)
    } else if is_call(token) {
        Ok(TokenClass::Call)
    } else {
        Err(ParseError::InvalidToken {
            token: token.to_owned(),
        })
    }
}

/// Value of a number literal.
///
/// Integral values that fit in `i64` become `Int`, everything else `Float`.
pub fn number_value(token: &str) -> Result<Value, ParseError> {
    let n: f64 = token.parse().map_err(|_| ParseError::InvalidToken {
        token: token.to_owned(),
    })?;
    if !n.is_finite() {
        return Err(ParseError::NonFiniteNumber {
            token: token.to_owned(),
        });
    }
    Ok(Value::number(n))
}

/// The command name of a call token: everything before the first `(`.
pub fn command_name(token: &str) -> &str {
    token.split_once('(').map_or(token, |(name, _)| name)
}

/// Split a call's arguments on commas at depth 1.
///
/// Whitespace inside each argument is kept as written; the evaluator
/// normalizes it when it compiles the argument. `f()` has no arguments, but
/// a blank argument anywhere else (`f( )`, `f(a,)`) is an error, as is
/// anything after the call's closing parenthesis.
pub fn get_args(token: &str) -> Result<Vec<String>, ParseError> {
    let unclosed = || ParseError::UnclosedParentheses {
        token: token.to_owned(),
    };

    let mut args = Vec::new();
    let mut current = String::new();
    let mut depth: i64 = 0;
    let mut closed = false;

    for (i, c) in token.char_indices() {
        if closed {
            return Err(ParseError::TrailingText {
                token: token[..i].to_owned(),
                trailing: token[i..].to_owned(),
            });
        }
        match c {
            ',' if depth == 1 => {
                args.push(std::mem::take(&mut current));
                continue;
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(unclosed());
                }
                if depth == 0 {
                    closed = true;
                    continue;
                }
            }
            _ => {}
        }
        if depth > 0 {
            current.push(c);
        }
        if c == '(' {
            depth += 1;
        }
    }

    if depth != 0 || !closed {
        return Err(unclosed());
    }
    if !current.is_empty() || !args.is_empty() {
        args.push(current);
    }
    if let Some(index) = args.iter().position(|arg| arg.trim().is_empty()) {
        return Err(ParseError::EmptyArgument {
            token: token.to_owned(),
            index,
        });
    }

    trace!(call = command_name(token), argc = args.len(), "split call arguments");
    Ok(args)
}
