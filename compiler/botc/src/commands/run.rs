//! The `run` command: play a game to the end.

use std::process::ExitCode;

use bot_diagnostic::emitter::DiagnosticEmitter;
use bot_eval::stdout_handler;
use bot_game::{Game, GameError};

use super::{read_scripts, report, stderr_emitter, RunOptions};

pub fn run_scripts(options: &RunOptions) -> ExitCode {
    let sources = match read_scripts(&options.scripts) {
        Ok(sources) => sources,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut emitter = stderr_emitter();

    let mut game = match Game::new(options.config.clone(), &sources, stdout_handler()) {
        Ok(game) => game,
        Err(GameError::Compile { diagnostics }) => {
            report(&mut emitter, &diagnostics);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    report(&mut emitter, game.warnings());

    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(GameError::ScriptAborted {
            player,
            unit,
            source,
        }) => {
            let origin = sources
                .get(player.index())
                .map_or_else(|| format!("player {player}"), |s| s.origin.clone());
            let diag = source
                .to_diagnostic()
                .with_origin(origin)
                .with_note(format!(
                    "raised by unit {unit} on turn {}, the game was stopped by --strict",
                    game.turn_number()
                ));
            emitter.emit(&diag);
            emitter.flush();
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
