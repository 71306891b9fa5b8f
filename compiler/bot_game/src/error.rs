//! Errors that stop a game from being set up or carried on.

use bot_diagnostic::Diagnostic;
use bot_eval::EvalError;
use thiserror::Error;

use crate::{Location, PlayerId};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot spawn a unit at {location}: tile is occupied")]
    TileOccupied { location: Location },

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    /// Every diagnostic from every script, warnings included.
    #[error("{} script problem(s) prevented the game from starting", .diagnostics.len())]
    Compile { diagnostics: Vec<Diagnostic> },

    #[error("script of player {player} failed on unit {unit}")]
    ScriptAborted {
        player: PlayerId,
        unit: u64,
        #[source]
        source: EvalError,
    },
}

impl GameError {
    #[cold]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfig(reason.into())
    }
}
