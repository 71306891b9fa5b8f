//! Bot Eval - compiler and lazy evaluator for bot-battle scripts.
//!
//! # Architecture
//!
//! - `Interpreter::analyze`: script text to `Executable`, verifying every
//!   command name and arity against the `CommandRegistry`
//! - `Interpreter::run`: executes an `Executable` against a unit's
//!   `Environment`, evaluating call arguments lazily so `if_else`, `and` and
//!   `or` only run the branches they need
//! - `CommandHost`: implemented by the game for critical actions and queries
//! - `SharedPrintHandler`: where `prnt` output goes
//!
//! The interpreter holds no game state. Everything unit-specific comes in
//! through `run`'s arguments for the duration of one turn.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
pub mod registry;
mod suggest;

pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use interpreter::{empty_script_warning, Interpreter};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use registry::{CallContext, CommandHost, CommandRegistry};
pub use suggest::{edit_distance, suggest_similar};
