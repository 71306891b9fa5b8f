//! Units on the board and everything that moves them.
//!
//! The board owns the unit storage, the players' unit lists and the turn
//! queue, and keeps the three in step: a unit is on a tile, in the queue
//! and in its player's list, or in none of them.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use slotmap::SlotMap;
use tracing::debug;

use crate::unit::Damage;
use crate::{GameConfig, GameError, Grid, Location, Player, PlayerId, TurnScheduler, Unit, UnitId};

/// Which units a query counts, relative to the asking unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Ally,
    Enemy,
}

/// A landed attack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    /// Serial of the unit that was hit.
    pub target: u64,
    pub damage: Damage,
}

pub struct Board {
    grid: Grid,
    units: SlotMap<UnitId, Unit>,
    players: Vec<Player>,
    scheduler: TurnScheduler,
    rng: SmallRng,
    unit_limit: usize,
    unit_hp: i64,
    /// Units spawned so far; the next serial is one more.
    spawned: u64,
}

impl Board {
    /// An empty board sized and limited by `config`.
    pub fn new(config: &GameConfig, rng: SmallRng) -> Self {
        Board {
            grid: Grid::new(config.height, config.width),
            units: SlotMap::with_key(),
            players: Vec::new(),
            scheduler: TurnScheduler::new(),
            rng,
            unit_limit: config.unit_limit(),
            unit_hp: config.unit_hp,
            spawned: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    #[inline]
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id)
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units.iter()
    }

    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    /// Players still in the game, in id order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[inline]
    pub fn unit_limit(&self) -> usize {
        self.unit_limit
    }

    pub fn add_player(&mut self, id: PlayerId) {
        if self.player(id).is_none() {
            self.players.push(Player::new(id));
        }
    }

    /// Put a new unit for `player` on `loc`.
    ///
    /// Returns `Ok(None)` when the player is at the unit limit.
    pub fn spawn_unit(
        &mut self,
        player: PlayerId,
        loc: Location,
    ) -> Result<Option<UnitId>, GameError> {
        if !self.grid.is_free(loc) {
            return Err(GameError::TileOccupied { location: loc });
        }
        let owner = self
            .players
            .iter_mut()
            .find(|p| p.id() == player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if owner.num_units() >= self.unit_limit {
            debug!(%player, limit = self.unit_limit, "spawn refused, unit limit reached");
            return Ok(None);
        }

        self.spawned += 1;
        let id = self
            .units
            .insert(Unit::new(self.spawned, player, loc, self.unit_hp));
        owner.add_unit(id);
        self.grid.place(loc, id);
        self.scheduler.enqueue(id);
        debug!(unit = self.spawned, %player, %loc, "unit spawned");
        Ok(Some(id))
    }

    /// Spawn next to `loc`, on a random free tile. `Ok(None)` if there is
    /// no room or the player is at the unit limit.
    pub fn spawn_adjacent(
        &mut self,
        player: PlayerId,
        loc: Location,
    ) -> Result<Option<UnitId>, GameError> {
        match self.free_adjacent(loc) {
            Some(free) => self.spawn_unit(player, free),
            None => {
                debug!(%player, %loc, "spawn refused, no free tile");
                Ok(None)
            }
        }
    }

    /// Take a unit off the board, out of the queue and away from its player.
    pub fn despawn_unit(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(id)?;
        self.grid.clear(unit.location());
        self.scheduler.dequeue(id);
        if let Some(owner) = self.players.iter_mut().find(|p| p.id() == unit.player()) {
            owner.remove_unit(id);
        }
        debug!(unit = unit.serial(), "unit destroyed");
        Some(unit)
    }

    /// One unit for each player, on distinct random tiles.
    pub fn spawn_initial_units(&mut self) -> Result<(), GameError> {
        let players: Vec<PlayerId> = self.players.iter().map(Player::id).collect();
        for player in players {
            let mut loc = self.grid.random_location(&mut self.rng);
            while !self.grid.is_free(loc) {
                loc = self.grid.random_location(&mut self.rng);
            }
            self.spawn_unit(player, loc)?;
        }
        Ok(())
    }

    fn free_adjacent(&mut self, loc: Location) -> Option<Location> {
        let free: Vec<Location> = self
            .grid
            .neighbours(loc)
            .into_iter()
            .filter(|&tile| self.grid.is_free(tile))
            .collect();
        free.choose(&mut self.rng).copied()
    }

    /// Move a unit to a random free neighbouring tile.
    ///
    /// Returns the tiles moved from and to, or `None` if boxed in.
    pub fn move_unit(&mut self, id: UnitId) -> Option<(Location, Location)> {
        let from = self.units.get(id)?.location();
        let to = self.free_adjacent(from)?;
        let unit = self.units.get_mut(id)?;
        unit.set_location(to);
        self.grid.clear(from);
        self.grid.place(to, id);
        debug!(unit = unit.serial(), %from, %to, "unit moved");
        Some((from, to))
    }

    /// Hit a random adjacent enemy of `attacker` for `damage` points.
    ///
    /// A target brought to zero hp is despawned. Returns `None` when no
    /// enemy is in range.
    pub fn attack_adjacent_enemy(&mut self, attacker: UnitId, damage: i64) -> Option<AttackReport> {
        let unit = self.units.get(attacker)?;
        let (serial, loc) = (unit.serial(), unit.location());
        let enemies = self.adjacent(attacker, loc, Side::Enemy);
        let Some(&target) = enemies.choose(&mut self.rng) else {
            debug!(unit = serial, "attack found no enemy in range");
            return None;
        };

        let victim = self.units.get_mut(target)?;
        let report = AttackReport {
            target: victim.serial(),
            damage: victim.damage(damage),
        };
        debug!(unit = serial, target = report.target, damage, outcome = ?report.damage, "attack");
        if report.damage == Damage::Killed {
            self.despawn_unit(target);
        }
        Some(report)
    }

    /// Units on the tiles around `loc` that are on `side` of `of`'s owner.
    fn adjacent(&self, of: UnitId, loc: Location, side: Side) -> Vec<UnitId> {
        let Some(player) = self.units.get(of).map(Unit::player) else {
            return Vec::new();
        };
        self.grid
            .neighbours(loc)
            .into_iter()
            .filter_map(|tile| self.grid.get(tile))
            .filter(|&other| other != of && self.is_side(other, player, side))
            .collect()
    }

    fn is_side(&self, other: UnitId, player: PlayerId, side: Side) -> bool {
        self.units
            .get(other)
            .is_some_and(|u| (u.player() == player) == (side == Side::Ally))
    }

    /// Units of `side` on the eight tiles around `unit`.
    pub fn count_adjacent(&self, unit: UnitId, side: Side) -> usize {
        self.units
            .get(unit)
            .map_or(0, |u| self.adjacent(unit, u.location(), side).len())
    }

    /// Live units of `side` anywhere on the board, not counting `unit`.
    pub fn count_total(&self, unit: UnitId, side: Side) -> usize {
        let Some(player) = self.units.get(unit).map(Unit::player) else {
            return 0;
        };
        self.players
            .iter()
            .filter(|p| (p.id() == player) == (side == Side::Ally))
            .map(Player::num_units)
            .sum::<usize>()
            .saturating_sub(usize::from(side == Side::Ally))
    }

    /// Distance to the nearest unit of `side`, or `rows + cols` if there
    /// is none.
    pub fn distance_to_closest(&self, unit: UnitId, side: Side) -> usize {
        let fallback = self.grid.rows() + self.grid.cols();
        let Some(me) = self.units.get(unit) else {
            return fallback;
        };
        self.units
            .iter()
            .filter(|&(other, _)| other != unit && self.is_side(other, me.player(), side))
            .map(|(_, other)| self.grid.distance(me.location(), other.location()))
            .min()
            .unwrap_or(fallback)
    }

    /// Start the next turn: advance the acting unit's timers and carry out
    /// whatever came due. Returns the acting unit.
    pub fn begin_turn(&mut self) -> Result<Option<UnitId>, GameError> {
        let Some(id) = self.scheduler.start_turn() else {
            return Ok(None);
        };
        let Some(unit) = self.units.get_mut(id) else {
            return Ok(Some(id));
        };
        let start = unit.on_new_turn();
        let (player, loc) = (unit.player(), unit.location());

        if start.spawn_ready {
            self.spawn_adjacent(player, loc)?;
        }
        if let Some(damage) = start.charge_damage {
            self.attack_adjacent_enemy(id, damage);
        }
        Ok(Some(id))
    }

    pub fn end_turn(&mut self) {
        self.scheduler.end_turn();
    }

    /// Remove players left without units. Returns who was removed.
    pub fn remove_eliminated(&mut self) -> Vec<PlayerId> {
        let eliminated: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.num_units() == 0)
            .map(Player::id)
            .collect();
        self.players.retain(|p| p.num_units() > 0);
        eliminated
    }

    /// Lend a unit's variable context out for its turn.
    pub(crate) fn take_env(&mut self, id: UnitId) -> bot_eval::Environment {
        self.units
            .get_mut(id)
            .map(Unit::take_env)
            .unwrap_or_default()
    }

    /// Give a lent context back. Dropped if the unit died meanwhile.
    pub(crate) fn restore_env(&mut self, id: UnitId, env: bot_eval::Environment) {
        if let Some(unit) = self.units.get_mut(id) {
            unit.restore_env(env);
        }
    }

    /// The board as text: `X` for a free tile, otherwise the unit serial.
    /// Columns are left-aligned to their widest cell and tab separated.
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .grid
            .rows_iter()
            .map(|row| {
                row.iter()
                    .map(|tile| match tile.and_then(|id| self.units.get(id)) {
                        Some(unit) => unit.serial().to_string(),
                        None => "X".to_owned(),
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..self.grid.cols())
            .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(1))
            .collect();

        cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:<width$}"))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
