//! Script compiler and evaluator.
//!
//! `analyze` turns script text into an `Executable` once; `run` executes it
//! every turn against the acting unit's variables. Compilation checks every
//! command name and arity up front, so the only failures left for `run`
//! are the runtime ones in [`crate::errors`].

use smallvec::SmallVec;
use tracing::trace;

use bot_diagnostic::{Diagnostic, ErrorCode};
use bot_ir::{Command, Executable, Node, SharedInterner, StringInterner, Value};
use bot_parse::{classify, command_name, get_args, number_value, parse, TokenClass};
use bot_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{invalid_argument, type_mismatch, undefined_symbol, wrong_arg_count, EvalResult};
use crate::print_handler::{stdout_handler, PrintHandlerImpl, SharedPrintHandler};
use crate::registry::{self, CallContext, CommandHost, CommandRegistry, IF};
use crate::EvalError;

pub struct Interpreter {
    interner: SharedInterner,
    registry: CommandRegistry,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new(interner: SharedInterner) -> Self {
        Interpreter {
            interner,
            registry: CommandRegistry::new(),
            print_handler: stdout_handler(),
        }
    }

    /// Send `prnt` output somewhere other than stdout.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Compile script text into a re-runnable executable.
    ///
    /// Text with no statements compiles to an empty executable.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<Executable, Diagnostic> {
        let exe = self.compile(text)?;
        trace!(statements = exe.len(), calls = exe.call_count(), "compiled script");
        Ok(exe)
    }

    fn compile(&self, text: &str) -> Result<Executable, Diagnostic> {
        ensure_sufficient_stack(|| {
            parse(text)
                .iter()
                .map(|token| self.compile_token(token))
                .collect::<Result<Vec<_>, _>>()
                .map(Executable::new)
        })
    }

    fn compile_token(&self, token: &str) -> Result<Node, Diagnostic> {
        match classify(token).map_err(|e| e.to_diagnostic())? {
            TokenClass::Number => number_value(token)
                .map(Node::Literal)
                .map_err(|e| e.to_diagnostic()),
            TokenClass::Symbol => Ok(Node::Symbol(self.interner.intern(token))),
            TokenClass::Call => self.compile_call(token),
        }
    }

    fn compile_call(&self, token: &str) -> Result<Node, Diagnostic> {
        let raw_args = get_args(token).map_err(|e| e.to_diagnostic())?;
        let name = command_name(token);
        let command = self
            .registry
            .verify(name, raw_args.len())
            .map_err(|diag| diag.with_note(format!("in `{token}`")))?;

        let mut args = raw_args
            .iter()
            .map(|arg| self.compile(arg))
            .collect::<Result<Vec<_>, _>>()?;
        if name == IF {
            args.push(Executable::single(Node::Literal(Value::Int(0))));
        }

        Ok(Node::Call { command, args })
    }

    /// Run an executable with `env` as the variable context.
    ///
    /// Returns the value of the last statement, or `None` for an empty
    /// executable. The first runtime error stops the run; bindings made
    /// before it stay in `env`.
    pub fn run(
        &self,
        exe: &Executable,
        env: &mut Environment,
        host: &mut dyn CommandHost,
    ) -> Result<Option<Value>, EvalError> {
        let mut evaluator = Evaluator {
            interner: &self.interner,
            print_handler: &self.print_handler,
            env,
            host,
        };
        evaluator.run(exe)
    }
}

/// Evaluation state for one run: the bound variable context and the game.
struct Evaluator<'a, 'h> {
    interner: &'a StringInterner,
    print_handler: &'a PrintHandlerImpl,
    env: &'a mut Environment,
    host: &'a mut (dyn CommandHost + 'h),
}

impl Evaluator<'_, '_> {
    fn run(&mut self, exe: &Executable) -> Result<Option<Value>, EvalError> {
        let mut last = None;
        for node in exe.nodes() {
            last = Some(self.eval_node(node)?);
        }
        Ok(last)
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult {
        match node {
            Node::Literal(value) => Ok(*value),
            Node::Symbol(name) => Ok(Value::Symbol(*name)),
            Node::Call { command, args } => {
                ensure_sufficient_stack(|| self.eval_call(*command, args))
            }
        }
    }

    /// Evaluate an argument without resolving a symbol result.
    fn eval_arg(&mut self, command: Command, arg: &Executable) -> EvalResult {
        self.run(arg)?
            .ok_or_else(|| invalid_argument(command, "argument produced no value"))
    }

    /// Evaluate an argument and resolve a symbol result through the context.
    fn eval_resolved(&mut self, command: Command, arg: &Executable) -> EvalResult {
        let value = self.eval_arg(command, arg)?;
        self.resolve(value)
    }

    fn resolve(&self, value: Value) -> EvalResult {
        match value {
            Value::Symbol(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_symbol(self.interner.lookup(name))),
            other => Ok(other),
        }
    }

    fn eval_call(&mut self, command: Command, args: &[Executable]) -> EvalResult {
        match (command, args) {
            (Command::Define, [name, value]) => {
                let name = match self.eval_arg(command, name)? {
                    Value::Symbol(name) => name,
                    other => return Err(type_mismatch(command, "a symbol name", &other)),
                };
                let value = self.eval_resolved(command, value)?;
                self.env.define(name, value);
                Ok(Value::Bool(true))
            }
            (Command::IfElse, [predicate, then_branch, else_branch]) => {
                let branch = if self.eval_resolved(command, predicate)?.is_truthy() {
                    then_branch
                } else {
                    else_branch
                };
                self.eval_arg(command, branch)
            }
            (Command::And, [lhs, rhs]) => {
                if !self.eval_resolved(command, lhs)?.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval_resolved(command, rhs)?.is_truthy()))
            }
            (Command::Or, [lhs, rhs]) => {
                if self.eval_resolved(command, lhs)?.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval_resolved(command, rhs)?.is_truthy()))
            }
            (Command::Define | Command::IfElse | Command::And | Command::Or, _) => {
                Err(wrong_arg_count(command, args.len()))
            }
            _ => {
                let mut values: SmallVec<[Value; 2]> = SmallVec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_resolved(command, arg)?);
                }
                let mut cx = CallContext {
                    interner: self.interner,
                    print_handler: self.print_handler,
                    host: &mut *self.host,
                };
                registry::execute(command, &values, &mut cx)
            }
        }
    }
}

/// Warning for a script that compiled to nothing.
pub fn empty_script_warning() -> Diagnostic {
    Diagnostic::warning(ErrorCode::W1001)
        .with_message("script has no statements")
        .with_note("units running it will never act")
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
