//! Game configuration.

use crate::GameError;

/// Own turns a unit spends spawning before the new unit appears.
pub const SPAWN_DELAY: u32 = 3;

/// What the game does when a script fails at run time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the error and end the acting unit's turn.
    #[default]
    Continue,
    /// Stop the game with [`GameError::ScriptAborted`].
    Abort,
}

/// Settings for one game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Board columns.
    pub width: usize,
    /// Board rows.
    pub height: usize,
    /// The game ends once this many turns have been played.
    pub turn_limit: u64,
    /// Maximum live units per player, as a fraction of the board's tiles.
    pub unit_limit_pct: f64,
    /// Hit points of a freshly spawned unit.
    pub unit_hp: i64,
    /// Print action messages and script output.
    pub display_messages: bool,
    /// Print the board after every turn.
    pub display_board: bool,
    /// Seed for every random choice. A random seed is drawn when unset.
    pub seed: Option<u64>,
    pub error_policy: ErrorPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 20,
            height: 20,
            turn_limit: 10_000,
            unit_limit_pct: 0.05,
            unit_hp: 3,
            display_messages: true,
            display_board: true,
            seed: None,
            error_policy: ErrorPolicy::Continue,
        }
    }
}

impl GameConfig {
    /// Smallest board side that still gives every tile eight distinct neighbours.
    pub const MIN_SIDE: usize = 3;
    /// Largest board, in tiles, a game will allocate.
    pub const MAX_TILES: usize = 1 << 20;

    pub fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Units each player may have alive at once: `ceil(tiles * pct)`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "pct is validated to (0, 1], so the product is within 1..=capacity"
    )]
    pub fn unit_limit(&self) -> usize {
        (self.capacity() as f64 * self.unit_limit_pct).ceil() as usize
    }

    /// Check the settings for a game with `players` players.
    pub fn validate(&self, players: usize) -> Result<(), GameError> {
        if players < 2 {
            return Err(GameError::invalid_config(format!(
                "at least 2 players are required, found {players}"
            )));
        }
        if self.width < Self::MIN_SIDE || self.height < Self::MIN_SIDE {
            return Err(GameError::invalid_config(format!(
                "board must be at least {min}x{min}, found {}x{}",
                self.width,
                self.height,
                min = Self::MIN_SIDE,
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(tiles) if tiles <= Self::MAX_TILES => {}
            _ => {
                return Err(GameError::invalid_config(format!(
                    "board {}x{} is larger than the {} tile maximum",
                    self.width,
                    self.height,
                    Self::MAX_TILES
                )));
            }
        }
        if players > self.capacity() {
            return Err(GameError::invalid_config(format!(
                "{players} players do not fit on a {}x{} board",
                self.width, self.height
            )));
        }
        if !(self.unit_limit_pct > 0.0 && self.unit_limit_pct <= 1.0) {
            return Err(GameError::invalid_config(format!(
                "unit limit must be greater than 0 and at most 1, found {}",
                self.unit_limit_pct
            )));
        }
        if self.unit_hp <= 0 {
            return Err(GameError::invalid_config(format!(
                "unit hp must be positive, found {}",
                self.unit_hp
            )));
        }
        Ok(())
    }
}
