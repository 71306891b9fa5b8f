//! Command registry: name lookup, compile-time verification and dispatch.
//!
//! The command set is closed, so the table is built from `Command::ALL` and
//! dispatch is a `match`. Special forms (`define`, `if_else`, `and`, `or`)
//! control their own argument evaluation and are handled by the
//! interpreter; everything else arrives here with resolved values.

use rustc_hash::FxHashMap;

use bot_diagnostic::{Diagnostic, ErrorCode};
use bot_ir::{Command, StringInterner, Value};

use crate::errors::{wrong_arg_count, EvalResult};
use crate::operators;
use crate::print_handler::PrintHandlerImpl;
use crate::suggest::suggest_similar;

/// Script spelling of `if_else` with the else branch omitted.
pub const IF: &str = "if";

/// The game side of command dispatch.
///
/// Critical actions and queries act on whichever unit is currently taking
/// its turn; the host knows which one that is.
pub trait CommandHost {
    fn execute(&mut self, command: Command, args: &[Value]) -> EvalResult;
}

/// Everything a plain command may touch while it runs.
pub struct CallContext<'a> {
    pub interner: &'a StringInterner,
    pub print_handler: &'a PrintHandlerImpl,
    pub host: &'a mut dyn CommandHost,
}

pub struct CommandRegistry {
    by_name: FxHashMap<&'static str, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let by_name = Command::ALL
            .iter()
            .map(|command| (command.name(), *command))
            .collect();
        CommandRegistry { by_name }
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Command> {
        self.by_name.get(name).copied()
    }

    /// Every name a script may call, including `if`.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Command::ALL
            .iter()
            .map(|command| command.name())
            .chain(std::iter::once(IF))
    }

    /// Resolve a call's name and check its argument count.
    ///
    /// `if` resolves to `if_else` and takes one argument fewer; the caller
    /// supplies the missing else branch.
    pub fn verify(&self, name: &str, argc: usize) -> Result<Command, Diagnostic> {
        let (command, expected) = if name == IF {
            (Command::IfElse, Command::IfElse.arity() - 1)
        } else {
            let command = self.lookup(name).ok_or_else(|| self.unknown_command(name))?;
            (command, command.arity())
        };

        if argc != expected {
            let plural = if expected == 1 { "" } else { "s" };
            return Err(Diagnostic::error(ErrorCode::E2002).with_message(format!(
                "`{name}` takes {expected} argument{plural}, found {argc}"
            )));
        }
        Ok(command)
    }

    #[cold]
    fn unknown_command(&self, name: &str) -> Diagnostic {
        let diag =
            Diagnostic::error(ErrorCode::E2001).with_message(format!("unknown command `{name}`"));
        match suggest_similar(name, self.names()) {
            Some(similar) => diag.with_suggestion(format!("did you mean `{similar}`?")),
            None => diag.with_note("run `botbattle help` to list the available commands"),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a non-special command on already-resolved arguments.
pub fn execute(command: Command, args: &[Value], cx: &mut CallContext<'_>) -> EvalResult {
    match (command, args) {
        (Command::Add, [a, b]) => operators::add(*a, *b),
        (Command::Sub, [a, b]) => operators::sub(*a, *b),
        (Command::Mul, [a, b]) => operators::mul(*a, *b),
        (Command::Div, [a, b]) => operators::div(*a, *b),
        (Command::Eq, [a, b]) => Ok(Value::Bool(operators::eq(*a, *b))),
        (Command::Gt | Command::Gqt | Command::Lt | Command::Lqt, [a, b]) => {
            operators::ordering(command, *a, *b)
        }
        (Command::Neg, [a]) => Ok(Value::Bool(!a.is_truthy())),
        (Command::Print, [a]) => {
            cx.print_handler
                .println(&a.display(cx.interner).to_string());
            Ok(Value::Bool(true))
        }
        _ if command.is_game_command() && args.len() == command.arity() =>
        {
            cx.host.execute(command, args)
        }
        _ => Err(wrong_arg_count(command, args.len())),
    }
}
