//! The `check` command: compile scripts without playing.

use std::process::ExitCode;

use bot_eval::Interpreter;
use bot_game::compile_scripts;
use bot_ir::SharedInterner;

use super::{read_scripts, report, stderr_emitter};

/// Compile every script and report all problems at once.
pub fn check_scripts(paths: &[String]) -> ExitCode {
    let sources = match read_scripts(paths) {
        Ok(sources) => sources,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let interpreter = Interpreter::new(SharedInterner::new());
    let compiled = compile_scripts(&interpreter, &sources);
    let errors = report(&mut stderr_emitter(), &compiled.diagnostics);

    for (source, exe) in sources.iter().zip(&compiled.executables) {
        let failed = compiled
            .diagnostics
            .iter()
            .any(|d| d.is_error() && d.origin.as_deref() == Some(source.origin.as_str()));
        if !failed {
            println!(
                "OK: {} ({} statements, {} calls)",
                source.origin,
                exe.len(),
                exe.call_count()
            );
        }
    }

    if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
