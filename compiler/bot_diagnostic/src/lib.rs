//! Diagnostics for bot-battle scripts.
//!
//! A script is rejected before the game starts if any of its statements fails
//! to compile. Each problem becomes a `Diagnostic` with:
//! - an error code for searchability
//! - a message saying what went wrong
//! - the script it came from, when known
//! - notes and suggestions (how to fix)
//!
//! Runtime script errors are converted into the same shape (E6xxx) so the
//! CLI can render both through one emitter.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
