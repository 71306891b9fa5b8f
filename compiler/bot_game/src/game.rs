//! Script compilation, the turn loop and the final outcome.

use std::fmt;

use bot_diagnostic::Diagnostic;
use bot_eval::{empty_script_warning, silent_handler, Interpreter, SharedPrintHandler};
use bot_ir::{Executable, SharedInterner};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::{Board, ErrorPolicy, Feedback, GameConfig, GameError, PlayerId, UnitHost};

/// A player's script and where it came from.
#[derive(Clone, Debug)]
pub struct ScriptSource {
    /// Shown in diagnostics, usually the script's path.
    pub origin: String,
    pub text: String,
}

impl ScriptSource {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        ScriptSource {
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// Compiled scripts, in source order, plus every diagnostic raised.
///
/// A script that failed to compile is left empty in `executables`.
#[derive(Debug, Default)]
pub struct CompiledScripts {
    pub executables: Vec<Executable>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledScripts {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

/// Compile every script, collecting problems instead of stopping at the first.
pub fn compile_scripts(interpreter: &Interpreter, sources: &[ScriptSource]) -> CompiledScripts {
    let mut compiled = CompiledScripts::default();
    for source in sources {
        match interpreter.analyze(&source.text) {
            Ok(exe) => {
                if exe.is_empty() {
                    compiled
                        .diagnostics
                        .push(empty_script_warning().with_origin(&source.origin));
                }
                compiled.executables.push(exe);
            }
            Err(diag) => {
                compiled.diagnostics.push(diag.with_origin(&source.origin));
                compiled.executables.push(Executable::default());
            }
        }
    }
    compiled
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every other player was eliminated.
    Winner { player: PlayerId, units: usize },
    /// The turn limit was reached and one player had the most units.
    TurnLimitWinner { player: PlayerId, units: usize },
    /// The turn limit was reached and several players shared the most units.
    Tie { players: Vec<PlayerId>, units: usize },
    NoSurvivors,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner { player, .. } => write!(f, "Player {player} has won the game"),
            GameOutcome::TurnLimitWinner { player, units } => write!(
                f,
                "Turn limit reached, player {player} wins with {units} units remaining"
            ),
            GameOutcome::Tie { players, units } => {
                f.write_str("Turn limit reached, players [")?;
                for (i, player) in players.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{player}")?;
                }
                write!(f, "] are tied with {units} units remaining")
            }
            GameOutcome::NoSurvivors => f.write_str("No units survived, the game has no winner"),
        }
    }
}

pub struct Game {
    config: GameConfig,
    interpreter: Interpreter,
    /// Indexed by `PlayerId::index`.
    scripts: Vec<Executable>,
    board: Board,
    feedback: Feedback,
    seed: u64,
    warnings: Vec<Diagnostic>,
    script_errors: usize,
}

impl Game {
    /// Compile the scripts, one per player, and put each player's first
    /// unit on the board.
    ///
    /// All compile problems are returned together in
    /// [`GameError::Compile`].
    pub fn new(
        config: GameConfig,
        sources: &[ScriptSource],
        print_handler: SharedPrintHandler,
    ) -> Result<Self, GameError> {
        config.validate(sources.len())?;

        let script_output = if config.display_messages {
            print_handler.clone()
        } else {
            silent_handler()
        };
        let interpreter = Interpreter::new(SharedInterner::new()).with_print_handler(script_output);
        let compiled = compile_scripts(&interpreter, sources);
        if compiled.has_errors() {
            return Err(GameError::Compile {
                diagnostics: compiled.diagnostics,
            });
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut board = Board::new(&config, SmallRng::seed_from_u64(seed));
        for index in 0..sources.len() {
            let player = PlayerId::from_index(index)
                .ok_or_else(|| GameError::invalid_config("too many players"))?;
            board.add_player(player);
        }
        board.spawn_initial_units()?;
        info!(
            seed,
            players = sources.len(),
            width = config.width,
            height = config.height,
            "game created"
        );

        let feedback = Feedback::new(print_handler, config.display_messages, config.display_board);
        Ok(Game {
            config,
            interpreter,
            scripts: compiled.executables,
            board,
            feedback,
            seed,
            warnings: compiled.diagnostics,
            script_errors: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seed every random choice in this game derives from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Warnings raised while compiling the scripts.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Runtime errors raised by scripts so far.
    pub fn script_errors(&self) -> usize {
        self.script_errors
    }

    pub fn turn_number(&self) -> u64 {
        self.board.scheduler().turn_number()
    }

    pub fn is_over(&self) -> bool {
        self.turn_number() >= self.config.turn_limit
            || self.board.players().len() <= 1
            || self.board.scheduler().is_empty()
    }

    /// Play turns until the game is over, then announce the outcome.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        while !self.is_over() {
            self.play_turn()?;
        }
        let outcome = self.outcome();
        info!(turns = self.turn_number(), %outcome, "game over");
        self.feedback.announce(&outcome);
        Ok(outcome)
    }

    /// Play one unit's turn.
    pub fn play_turn(&mut self) -> Result<(), GameError> {
        let Some(id) = self.board.begin_turn()? else {
            return Ok(());
        };
        let Some(unit) = self.board.unit(id) else {
            self.board.end_turn();
            return Ok(());
        };
        let (serial, player) = (unit.serial(), unit.player());
        self.feedback
            .message(format_args!("Turn number {}", self.turn_number()));
        self.feedback.message(format_args!("Acting unit: {serial}"));

        let mut env = self.board.take_env(id);
        let result = match self.scripts.get(player.index()) {
            Some(exe) => {
                let mut host = UnitHost::new(&mut self.board, id, &self.feedback);
                self.interpreter.run(exe, &mut env, &mut host)
            }
            None => Ok(None),
        };
        self.board.restore_env(id, env);
        self.board.end_turn();

        if let Err(err) = result {
            self.script_errors += 1;
            warn!(unit = serial, %player, error = %err, "script failed");
            self.feedback
                .message(format_args!("Unit {serial} script error: {err}"));
            if self.config.error_policy == ErrorPolicy::Abort {
                return Err(GameError::ScriptAborted {
                    player,
                    unit: serial,
                    source: err,
                });
            }
        }

        self.feedback.board(&self.board);
        for eliminated in self.board.remove_eliminated() {
            debug!(player = %eliminated, "player eliminated");
            self.feedback
                .message(format_args!("Player {eliminated} eliminated"));
        }
        Ok(())
    }

    /// Who is ahead right now, judged as if the game ended here.
    pub fn outcome(&self) -> GameOutcome {
        let players = self.board.players();
        match players {
            [] => GameOutcome::NoSurvivors,
            [only] => GameOutcome::Winner {
                player: only.id(),
                units: only.num_units(),
            },
            _ => {
                let units = players.iter().map(|p| p.num_units()).max().unwrap_or(0);
                let leaders: Vec<PlayerId> = players
                    .iter()
                    .filter(|p| p.num_units() == units)
                    .map(|p| p.id())
                    .collect();
                match leaders.as_slice() {
                    [player] => GameOutcome::TurnLimitWinner {
                        player: *player,
                        units,
                    },
                    _ => GameOutcome::Tie {
                        players: leaders,
                        units,
                    },
                }
            }
        }
    }
}
