//! Bot Game - the world scripts act on.
//!
//! # Architecture
//!
//! - `grid`: toroidal geometry and tile occupancy
//! - `unit`: per-unit state and the action-readiness state machine
//! - `scheduler`: round-robin turn queue over live units
//! - `board`: units, players and the actions that move them around
//! - `host`: the `CommandHost` that binds script commands to the acting unit
//! - `game`: script compilation, the turn loop and the final outcome
//!
//! Everything runs on one thread. During a turn exactly one unit acts; its
//! variable context is lent to the interpreter for the length of the turn.

mod board;
mod config;
mod error;
mod feedback;
mod game;
mod grid;
mod host;
mod player;
mod scheduler;
mod unit;

pub use board::{AttackReport, Board, Side};
pub use config::{ErrorPolicy, GameConfig, SPAWN_DELAY};
pub use error::GameError;
pub use feedback::Feedback;
pub use game::{compile_scripts, CompiledScripts, Game, GameOutcome, ScriptSource};
pub use grid::{Grid, Location};
pub use host::UnitHost;
pub use player::{Player, PlayerId};
pub use scheduler::TurnScheduler;
pub use unit::{Damage, TurnStart, Unit, UnitId};
