//! Bot IR - shared data types for the bot-battle scripting runtime.
//!
//! # Contents
//!
//! - `Name` / `StringInterner`: interned symbol and command names
//! - `Value`: the dynamically typed runtime value
//! - `Command`: the closed set of script commands with their arities
//! - `Node` / `Executable`: the compiled, re-runnable form of a script
//!
//! The parser produces strings, the evaluator turns them into `Executable`s,
//! and the game runs those against per-unit variable contexts. Everything
//! here is plain data; behavior lives in `bot_eval` and `bot_game`.

mod command;
mod interner;
mod name;
mod node;
mod value;

pub use command::{Command, CommandKind};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use node::{Executable, Node};
pub use value::{Value, ValueDisplay};
