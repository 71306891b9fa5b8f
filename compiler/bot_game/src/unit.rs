//! Units and their action-readiness state machine.
//!
//! A unit may take at most one critical action per own turn, and none
//! while it is spawning or charging. Timers advance only at the start of
//! the unit's own turns, in `on_new_turn`.

use bot_eval::Environment;
use slotmap::new_key_type;

use crate::{Location, PlayerId};

new_key_type! {
    /// Handle to a unit. Handles of dead units never match a live one.
    pub struct UnitId;
}

/// What came due at the start of a unit's turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnStart {
    /// The spawn timer ran out: place a new unit next to this one.
    pub spawn_ready: bool,
    /// The charge timer ran out: hit an adjacent enemy this hard.
    pub charge_damage: Option<i64>,
}

/// Result of an incoming attack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Damage {
    /// A defending unit absorbed the hit and lost its defense.
    Blocked,
    Wounded { hp: i64 },
    Killed,
}

#[derive(Clone, Debug)]
pub struct Unit {
    serial: u64,
    player: PlayerId,
    location: Location,
    hp: i64,
    spawn_timer: u32,
    charge_timer: u32,
    charge_strength: u32,
    /// Own turns taken so far.
    turn: u64,
    defending: bool,
    /// A critical action was taken this turn.
    acted: bool,
    env: Environment,
}

impl Unit {
    pub fn new(serial: u64, player: PlayerId, location: Location, hp: i64) -> Self {
        Unit {
            serial,
            player,
            location,
            hp,
            spawn_timer: 0,
            charge_timer: 0,
            charge_strength: 0,
            turn: 0,
            defending: false,
            acted: false,
            env: Environment::new(),
        }
    }

    /// 1-based spawn number, shown on the board.
    #[inline]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn hp(&self) -> i64 {
        self.hp
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn charge_timer(&self) -> u32 {
        self.charge_timer
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Lend the variable context out for a turn. Pair with `restore_env`.
    pub(crate) fn take_env(&mut self) -> Environment {
        std::mem::take(&mut self.env)
    }

    pub(crate) fn restore_env(&mut self, env: Environment) {
        self.env = env;
    }

    /// Advance the unit into its next own turn.
    ///
    /// Clears the per-turn flags, then runs down the spawn timer and the
    /// charge timer. The caller carries out whatever came due.
    pub fn on_new_turn(&mut self) -> TurnStart {
        self.turn += 1;
        self.defending = false;
        self.acted = false;

        let mut start = TurnStart::default();
        if self.spawn_timer > 0 {
            self.spawn_timer -= 1;
            start.spawn_ready = self.spawn_timer == 0;
        }
        if self.charge_timer > 0 {
            self.charge_timer -= 1;
            self.charge_strength += 1;
            if self.charge_timer == 0 {
                start.charge_damage = Some(charge_damage(self.charge_strength));
                self.charge_strength = 0;
            }
        }
        start
    }

    /// No timer running and no critical action taken yet this turn.
    pub fn can_act(&self) -> bool {
        self.spawn_timer == 0 && self.charge_timer == 0 && !self.acted
    }

    /// Claim this turn's critical action. Returns false if the unit can't act.
    pub fn try_act(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        self.acted = true;
        true
    }

    pub fn set_spawn(&mut self, turns: u32) {
        self.spawn_timer = self.spawn_timer.saturating_add(turns);
    }

    /// Start charging for `turns` turns. The hit lands at the start of the
    /// `turns`-th following own turn.
    pub fn begin_charge(&mut self, turns: u32) {
        self.charge_timer = turns;
    }

    pub fn defend(&mut self) {
        self.defending = true;
    }

    pub fn fortify(&mut self) {
        self.hp = self.hp.saturating_add(1);
    }

    pub fn damage(&mut self, amount: i64) -> Damage {
        if self.defending {
            self.defending = false;
            return Damage::Blocked;
        }
        self.hp = self.hp.saturating_sub(amount);
        if self.hp <= 0 {
            Damage::Killed
        } else {
            Damage::Wounded { hp: self.hp }
        }
    }
}

/// Damage of an attack charged `strength` turns: `(n + 1)(n + 2) / 2`.
pub fn charge_damage(strength: u32) -> i64 {
    let n = i64::from(strength);
    (n + 1).saturating_mul(n + 2) / 2
}

#[cfg(test)]
mod tests;
