//! Command handlers for the `botbattle` CLI.
//!
//! Shared helpers for loading scripts and reporting diagnostics live here
//! in the module root.

use std::io::IsTerminal;

use bot_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use bot_diagnostic::Diagnostic;
use bot_game::ScriptSource;
use tracing::debug;

mod check;
mod help;
mod options;
mod run;

pub use check::check_scripts;
pub use help::{print_usage, script_commands};
pub use options::{parse_run_options, RunOptions};
pub use run::run_scripts;

/// Read every script, failing on the first unreadable path.
pub(crate) fn read_scripts(paths: &[String]) -> Result<Vec<ScriptSource>, String> {
    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read script '{path}': {e}"))?;
            debug!(path = %path, bytes = text.len(), "loaded script");
            Ok(ScriptSource::new(path.clone(), text))
        })
        .collect()
}

pub(crate) fn stderr_emitter() -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
}

/// Emit diagnostics followed by a summary. Returns the number of errors.
pub(crate) fn report(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) -> usize {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if !diagnostics.is_empty() {
        emitter.emit_all(diagnostics);
        emitter.emit_summary(errors, diagnostics.len() - errors);
    }
    emitter.flush();
    errors
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
